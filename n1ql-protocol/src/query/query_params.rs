use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::consistency::ScanConsistency;
use crate::query::query_values::QueryValues;
use crate::query::scan_vector::{ScanVector, ScanVectorEntry};
use crate::request::{RequestBody, Serialize};
use crate::types::{SequenceNumber, VBucketId, VBucketUuid};

/// Request body field carrying the server-side timeout.
pub const TIMEOUT: &str = "timeout";

/// Request body field carrying the request correlation id.
pub const CLIENT_CONTEXT_ID: &str = "client_context_id";

/// Parameters of a query, everything except the statement itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Requested index staleness bound. Omitted from the body when not set.
    pub consistency: Option<ScanConsistency>,
    /// Mutation points the index must have caught up to. A non-empty scan
    /// vector always encodes with `at_plus` consistency, whatever
    /// `consistency` says.
    pub scan_vector: Option<ScanVector>,
    /// Positional and named statement values.
    pub values: QueryValues,
    /// Server-side execution timeout.
    pub timeout: Option<Duration>,
    /// Opaque id echoed back by the query service, for log correlation.
    pub client_context_id: Option<String>,
    /// Extra request fields without a dedicated setter, emitted verbatim
    /// at top level.
    pub raw: HashMap<String, Value>,
}

impl QueryParams {
    /// Records a mutation point, overwriting any previous entry for the
    /// same vbucket, and pins consistency to `at_plus`.
    pub fn add_scan_vector_entry(
        &mut self,
        vbucket_id: VBucketId,
        vbucket_uuid: VBucketUuid,
        sequence_number: SequenceNumber,
    ) {
        self.scan_vector
            .get_or_insert_with(ScanVector::new)
            .insert(vbucket_id, ScanVectorEntry::new(sequence_number, vbucket_uuid));
        self.consistency = Some(ScanConsistency::AtPlus);
    }

    fn effective_consistency(&self) -> Option<ScanConsistency> {
        match &self.scan_vector {
            Some(scan_vector) if !scan_vector.is_empty() => Some(ScanConsistency::AtPlus),
            _ => self.consistency,
        }
    }
}

impl Serialize for QueryParams {
    fn serialize(&self, body: &mut RequestBody) {
        if let Some(consistency) = self.effective_consistency() {
            consistency.serialize(body);
        }

        if let Some(scan_vector) = &self.scan_vector {
            if !scan_vector.is_empty() {
                scan_vector.serialize(body);
            }
        }

        self.values.serialize(body);

        if let Some(timeout) = self.timeout {
            body.insert(TIMEOUT.into(), format_timeout(timeout).into());
        }

        if let Some(client_context_id) = &self.client_context_id {
            body.insert(CLIENT_CONTEXT_ID.into(), client_context_id.clone().into());
        }

        for (key, value) in &self.raw {
            body.insert(key.clone(), value.clone());
        }
    }
}

/// Renders a timeout the way the query service expects it: seconds with an
/// `s` suffix.
fn format_timeout(timeout: Duration) -> String {
    let seconds = timeout.as_secs_f64();
    if seconds.fract() == 0.0 {
        format!("{}s", seconds as u64)
    } else {
        format!("{}s", seconds)
    }
}
