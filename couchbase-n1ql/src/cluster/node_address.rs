use std::fmt;
use std::net::SocketAddr;

use crate::error::{Error, Result};

/// Default port of the query service on a Couchbase node.
pub const DEFAULT_QUERY_PORT: u16 = 8093;

/// Representation of a node address. Can be a direct socket address or a
/// hostname. In the latter case, the host can be resolved to multiple
/// addresses, which could result in multiple node configurations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeAddress {
    Direct(SocketAddr),
    Hostname(String),
}

impl NodeAddress {
    /// Parses a single contact point: a socket address taken as-is, or
    /// anything else kept as a hostname for later resolution.
    pub(crate) fn parse(input: &str) -> Result<NodeAddress> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidAddress(input.to_string()));
        }

        Ok(match trimmed.parse::<SocketAddr>() {
            Ok(addr) => NodeAddress::Direct(addr),
            Err(_) => NodeAddress::Hostname(trimmed.to_string()),
        })
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeAddress::Direct(addr) => addr.fmt(f),
            NodeAddress::Hostname(hostname) => hostname.fmt(f),
        }
    }
}

impl From<SocketAddr> for NodeAddress {
    fn from(addr: SocketAddr) -> Self {
        NodeAddress::Direct(addr)
    }
}

impl From<String> for NodeAddress {
    fn from(value: String) -> Self {
        NodeAddress::Hostname(value)
    }
}

impl From<&str> for NodeAddress {
    fn from(value: &str) -> Self {
        NodeAddress::Hostname(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direct_address() {
        assert_eq!(
            NodeAddress::parse("127.0.0.1:8093").unwrap(),
            NodeAddress::Direct("127.0.0.1:8093".parse().unwrap())
        );
    }

    #[test]
    fn test_parse_hostname() {
        assert_eq!(
            NodeAddress::parse("cb1.local:8093").unwrap(),
            NodeAddress::Hostname("cb1.local:8093".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(NodeAddress::parse("  ").is_err());
    }
}
