use serde_json::Value;

use crate::error;
use crate::query::query_params::QueryParams;
use crate::request::{RequestBody, Serialize};
use crate::types::{SequenceNumber, VBucketId, VBucketUuid};

/// Request body field carrying the statement text.
pub const STATEMENT: &str = "statement";

/// A full query service request: a statement and its parameters.
///
/// Encoding is pure and side-effect-free; a request may be encoded any
/// number of times and the output always reflects its current state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Statement text, carried into the body verbatim. `$name` and `$1`
    /// placeholders are opaque to the encoder.
    pub statement: String,
    /// Everything else.
    pub params: QueryParams,
}

impl QueryRequest {
    pub fn new<S: Into<String>>(statement: S) -> Self {
        QueryRequest {
            statement: statement.into(),
            params: Default::default(),
        }
    }

    pub fn with_params<S: Into<String>>(statement: S, params: QueryParams) -> Self {
        QueryRequest {
            statement: statement.into(),
            params,
        }
    }

    /// Records a mutation point, overwriting any previous entry for the
    /// same vbucket, and pins consistency to `at_plus`.
    pub fn add_scan_vector_entry(
        &mut self,
        vbucket_id: VBucketId,
        vbucket_uuid: VBucketUuid,
        sequence_number: SequenceNumber,
    ) {
        self.params
            .add_scan_vector_entry(vbucket_id, vbucket_uuid, sequence_number);
    }

    /// Assembles the request body.
    pub fn encode(&self) -> Value {
        Value::Object(self.serialize_to_body())
    }

    /// Assembles the request body and serializes it to a string.
    pub fn encoded(&self) -> error::Result<String> {
        serde_json::to_string(&self.encode()).map_err(Into::into)
    }
}

impl Serialize for QueryRequest {
    fn serialize(&self, body: &mut RequestBody) {
        body.insert(STATEMENT.into(), self.statement.clone().into());
        self.params.serialize(body);
    }
}
