use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use n1ql_protocol::consistency::ScanConsistency;
use n1ql_protocol::query::{QueryParams, QueryValues};

use crate::statement::{MutationState, StatementParams};

#[derive(Debug)]
pub struct StatementParamsBuilder {
    consistency: Option<ScanConsistency>,
    values: QueryValues,
    timeout: Option<Duration>,
    client_context_id: Option<String>,
    raw: HashMap<String, Value>,
    mutation_state: Option<MutationState>,
    adhoc: bool,
}

impl Default for StatementParamsBuilder {
    fn default() -> Self {
        StatementParamsBuilder {
            consistency: None,
            values: Default::default(),
            timeout: None,
            client_context_id: None,
            raw: HashMap::new(),
            mutation_state: None,
            adhoc: true,
        }
    }
}

impl StatementParamsBuilder {
    pub fn new() -> StatementParamsBuilder {
        Default::default()
    }

    /// Sets statement consistency.
    #[must_use]
    pub fn with_consistency(mut self, consistency: ScanConsistency) -> Self {
        self.consistency = Some(consistency);
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

    /// Generates a fresh v4 UUID as the request correlation id.
    #[must_use]
    pub fn with_random_client_context_id(mut self) -> Self {
        self.client_context_id = Some(Uuid::new_v4().to_string());
        self
    }

    /// Adds a raw request field, passed through to the body verbatim.
    #[must_use]
    pub fn with_raw_option<V: Into<Value>>(mut self, key: String, value: V) -> Self {
        self.raw.insert(key, value.into());
        self
    }

    /// Marks the statement as ad-hoc (the default) or prepared.
    #[must_use]
    pub fn adhoc(mut self, value: bool) -> Self {
        self.adhoc = value;
        self
    }

    /// Pins the statement to the mutations captured in `state`.
    #[must_use]
    pub fn with_mutation_state(mut self, state: MutationState) -> Self {
        self.mutation_state = Some(state);
        self
    }

    #[must_use]
    pub fn build(self) -> StatementParams {
        let mut query_params = QueryParams {
            consistency: self.consistency,
            scan_vector: None,
            values: self.values,
            timeout: self.timeout,
            client_context_id: self.client_context_id,
            raw: self.raw,
        };

        if let Some(state) = &self.mutation_state {
            debug!(tokens = state.len(), "Pinning statement to mutation state.");
            state.apply(&mut query_params);
        }

        StatementParams {
            query_params,
            adhoc: self.adhoc,
        }
    }
}
