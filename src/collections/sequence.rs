//! FIFO and LIFO sequence collaborators used by traversal

use std::collections::VecDeque;

/// First-in, first-out sequence
pub trait Fifo<T> {
    fn enqueue(&mut self, value: T);
    fn dequeue(&mut self) -> Option<T>;
    fn front(&self) -> Option<&T>;
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Last-in, first-out sequence
pub trait Lifo<T> {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn top(&self) -> Option<&T>;
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    fn enqueue(&mut self, value: T) {
        self.push_back(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Lifo<T> for Vec<T> {
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn top(&self) -> Option<&T> {
        self.last()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_preserves_arrival_order() {
        let mut queue: VecDeque<i32> = VecDeque::new();
        assert!(Fifo::is_empty(&queue));
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(Fifo::front(&queue), Some(&1));
        assert_eq!(Fifo::size(&queue), 3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn lifo_returns_latest_first() {
        let mut stack: Vec<&str> = Vec::new();
        Lifo::push(&mut stack, "a");
        Lifo::push(&mut stack, "b");

        assert_eq!(Lifo::top(&stack), Some(&"b"));
        assert_eq!(Lifo::pop(&mut stack), Some("b"));
        assert_eq!(Lifo::pop(&mut stack), Some("a"));
        assert!(Lifo::is_empty(&stack));
        assert_eq!(Lifo::pop(&mut stack), None);
    }
}
