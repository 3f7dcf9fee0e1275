//! Graph construction settings

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Upper bound on any pre-allocation hint
pub const MAX_PREALLOCATION: usize = 1 << 24;

/// Sizing hints used when building a [`Graph`](crate::Graph)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected number of nodes
    pub node_capacity: usize,
    /// Expected number of edges
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_edge_capacity(mut self, edge_capacity: usize) -> Self {
        self.edge_capacity = edge_capacity;
        self
    }

    /// Load and validate a config from JSON
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from YAML
    pub fn from_yaml_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject hints that would force an unreasonable up-front allocation
    pub fn validate(&self) -> GraphResult<()> {
        if self.node_capacity > MAX_PREALLOCATION {
            return Err(GraphError::InvalidConfig(format!(
                "node_capacity {} exceeds {}",
                self.node_capacity, MAX_PREALLOCATION
            )));
        }
        if self.edge_capacity > MAX_PREALLOCATION {
            return Err(GraphError::InvalidConfig(format!(
                "edge_capacity {} exceeds {}",
                self.edge_capacity, MAX_PREALLOCATION
            )));
        }
        Ok(())
    }
}
