use itertools::Itertools;
use tracing::debug;

use crate::cluster::NodeAddress;
use crate::error::{Error, Result};

const CONNECTION_SCHEME: &str = "couchbase://";

/// Authentication credentials for the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Cluster-level connection parameters for the query service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterConfig {
    pub contact_points: Vec<NodeAddress>,
    pub credentials: Option<Credentials>,
    pub bucket: Option<String>,
}

impl ClusterConfig {
    /// Parses a `couchbase://host1,host2:8093` style connection string into
    /// a configuration with one contact point per listed host.
    pub fn from_connection_string(connection_string: &str) -> Result<ClusterConfig> {
        let hosts = connection_string
            .strip_prefix(CONNECTION_SCHEME)
            .ok_or_else(|| Error::InvalidAddress(connection_string.to_string()))?;

        let mut builder = ClusterConfigBuilder::new();
        for host in hosts.split(',') {
            builder = builder.with_contact_point(NodeAddress::parse(host)?);
        }

        builder.build()
    }
}

/// Builder structure that helps to configure cluster connection parameters.
#[derive(Debug, Default)]
pub struct ClusterConfigBuilder {
    contact_points: Vec<NodeAddress>,
    credentials: Option<Credentials>,
    bucket: Option<String>,
}

impl ClusterConfigBuilder {
    pub fn new() -> ClusterConfigBuilder {
        Default::default()
    }

    /// Adds a contact point.
    #[must_use]
    pub fn with_contact_point(mut self, contact_point: NodeAddress) -> Self {
        self.contact_points.push(contact_point);
        self
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.credentials = Some(Credentials { username, password });
        self
    }

    /// Sets the bucket queries are scoped to.
    #[must_use]
    pub fn with_bucket(mut self, bucket: String) -> Self {
        self.bucket = Some(bucket);
        self
    }

    /// Finalizes building process. Duplicate contact points are dropped;
    /// at least one must remain.
    pub fn build(self) -> Result<ClusterConfig> {
        if self.contact_points.is_empty() {
            return Err(Error::MissingContactPoints);
        }

        let contact_points: Vec<_> = self.contact_points.into_iter().unique().collect();
        debug!(count = contact_points.len(), "Configured cluster contact points.");

        Ok(ClusterConfig {
            contact_points,
            credentials: self.credentials,
            bucket: self.bucket,
        })
    }
}
