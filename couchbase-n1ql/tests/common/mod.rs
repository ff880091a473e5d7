use std::env;

use couchbase_n1ql::cluster::{ClusterConfig, ClusterConfigBuilder};
use couchbase_n1ql::error::Result;

#[allow(dead_code)]
pub const DEFAULT_HOST: &str = "127.0.0.1";
#[allow(dead_code)]
pub const DEFAULT_QUERY_PORT: u16 = 8093;

/// Connection parameters for the test cluster, resolved from the
/// environment with local-cluster defaults.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct TestClusterParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub bucket: String,
}

#[allow(dead_code)]
impl TestClusterParams {
    pub fn from_env() -> TestClusterParams {
        TestClusterParams {
            host: var_or("COUCHBASE_HOST", DEFAULT_HOST),
            port: env::var("COUCHBASE_QUERY_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_QUERY_PORT),
            username: var_or("COUCHBASE_USERNAME", "Administrator"),
            password: var_or("COUCHBASE_PASSWORD", "password"),
            bucket: var_or("COUCHBASE_BUCKET", "default"),
        }
    }

    pub fn cluster_config(&self) -> Result<ClusterConfig> {
        ClusterConfigBuilder::new()
            .with_contact_point(format!("{}:{}", self.host, self.port).into())
            .with_credentials(self.username.clone(), self.password.clone())
            .with_bucket(self.bucket.clone())
            .build()
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
