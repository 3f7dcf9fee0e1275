//! Common test utilities for graphkit integration tests
//!
//! This module provides shared fixtures, seeded random graph generators
//! and brute-force reference metrics to check the algorithms against.

#![allow(dead_code)]

pub mod fixtures;
pub mod generators;
pub mod metrics;

pub use fixtures::{sample_weighted_graph, SampleGraph};
pub use generators::{random_dag, random_directed, random_simple_directed, random_symmetric, GeneratedGraph};
pub use metrics::{reachable_from, reference_distances, reference_mst_weight};

use tracing_subscriber::EnvFilter;

/// Install a test subscriber once per binary.
///
/// Output is captured by the test harness and filtered through `RUST_LOG`,
/// defaulting to `warn` so passing runs stay quiet.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
