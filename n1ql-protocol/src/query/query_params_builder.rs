use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use super::{QueryParams, QueryValues, ScanVector};
use crate::consistency::ScanConsistency;

#[derive(Debug, Default)]
pub struct QueryParamsBuilder {
    consistency: Option<ScanConsistency>,
    scan_vector: Option<ScanVector>,
    values: QueryValues,
    timeout: Option<Duration>,
    client_context_id: Option<String>,
    raw: HashMap<String, Value>,
}

impl QueryParamsBuilder {
    /// Factory function that returns new `QueryParamsBuilder`.
    pub fn new() -> QueryParamsBuilder {
        Default::default()
    }

    /// Sets query consistency.
    #[must_use]
    pub fn with_consistency(mut self, consistency: ScanConsistency) -> Self {
        self.consistency = Some(consistency);
        self
    }

    /// Sets the scan vector, and thereby `at_plus` consistency.
    #[must_use]
    pub fn with_scan_vector(mut self, scan_vector: ScanVector) -> Self {
        self.scan_vector = Some(scan_vector);
        self.consistency = Some(ScanConsistency::AtPlus);
        self
    }

    /// Sets statement values.
    #[must_use]
    pub fn with_values(mut self, values: QueryValues) -> Self {
        self.values = values;
        self
    }

    /// Sets the server-side execution timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the request correlation id.
    #[must_use]
    pub fn with_client_context_id(mut self, client_context_id: String) -> Self {
        self.client_context_id = Some(client_context_id);
        self
    }

    /// Adds a raw request field, passed through to the body verbatim.
    #[must_use]
    pub fn with_raw_option<V: Into<Value>>(mut self, key: String, value: V) -> Self {
        self.raw.insert(key, value.into());
        self
    }

    /// Finalizes query building process and returns the params.
    #[must_use]
    pub fn build(self) -> QueryParams {
        QueryParams {
            consistency: self.consistency,
            scan_vector: self.scan_vector,
            values: self.values,
            timeout: self.timeout,
            client_context_id: self.client_context_id,
            raw: self.raw,
        }
    }
}
