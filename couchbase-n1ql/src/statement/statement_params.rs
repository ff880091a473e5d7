use n1ql_protocol::query::QueryParams;

/// Parameters of a single statement execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementParams {
    /// Protocol-level parameters.
    pub query_params: QueryParams,
    /// Whether the statement runs ad-hoc, i.e. without being prepared
    /// first. A client-side hint only, never part of the request body.
    pub adhoc: bool,
}

impl Default for StatementParams {
    fn default() -> Self {
        StatementParams {
            query_params: Default::default(),
            adhoc: true,
        }
    }
}
