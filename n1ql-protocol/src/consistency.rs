#![warn(missing_docs)]
//! The module contains Rust representation of N1QL scan consistency levels.
use crate::error;
use crate::request::{RequestBody, Serialize};
use std::default::Default;
use std::fmt;
use std::str::FromStr;

/// Request body field carrying the consistency token.
pub const SCAN_CONSISTENCY: &str = "scan_consistency";

/// `ScanConsistency` is an enum which represents the guarantee a query
/// requests about how up-to-date the queried index must be relative to
/// prior mutations.
#[derive(Debug, PartialEq, Clone, Copy, Ord, PartialOrd, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ScanConsistency {
    /// No consistency bound. The index is scanned as-is, regardless of any
    /// mutations still in flight. Lowest latency, the default.
    #[default]
    NotBounded,
    /// The index must catch up to the state of the bucket at the time the
    /// request was received. Strongest guarantee, blocks until the index
    /// has absorbed all prior mutations.
    RequestPlus,
    /// The index must catch up to a specific set of mutation points,
    /// supplied as a scan vector. Selected implicitly whenever a scan
    /// vector is attached to a query.
    AtPlus,
}

impl ScanConsistency {
    /// Canonical token used in the request body.
    pub fn as_token(self) -> &'static str {
        match self {
            ScanConsistency::NotBounded => "none",
            ScanConsistency::RequestPlus => "request_plus",
            ScanConsistency::AtPlus => "at_plus",
        }
    }
}

impl fmt::Display for ScanConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ScanConsistency {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let consistency = match s {
            "none" => ScanConsistency::NotBounded,
            "request_plus" => ScanConsistency::RequestPlus,
            "at_plus" => ScanConsistency::AtPlus,
            _ => return Err(error::Error::UnknownConsistency(s.to_string())),
        };

        Ok(consistency)
    }
}

impl Serialize for ScanConsistency {
    fn serialize(&self, body: &mut RequestBody) {
        body.insert(SCAN_CONSISTENCY.into(), self.as_token().into());
    }
}
