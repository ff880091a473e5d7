//! Cluster connection configuration for the query service.

mod config;
mod node_address;

pub use self::config::{ClusterConfig, ClusterConfigBuilder, Credentials};
pub use self::node_address::{NodeAddress, DEFAULT_QUERY_PORT};
