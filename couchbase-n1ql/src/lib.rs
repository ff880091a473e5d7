//! **couchbase-n1ql** is a client-side library for the Couchbase N1QL query
//! service: cluster connection configuration, statement parameters and
//! request body encoding.
//!
//! ## Getting started
//!
//! This example configures a single-node cluster and encodes a parametrized
//! query pinned to request-level consistency.
//!
//! ```
//! use couchbase_n1ql::cluster::ClusterConfigBuilder;
//! use couchbase_n1ql::consistency::ScanConsistency;
//! use couchbase_n1ql::query::QueryRequest;
//! use couchbase_n1ql::statement::StatementParamsBuilder;
//!
//! fn main() -> couchbase_n1ql::Result<()> {
//!     let config = ClusterConfigBuilder::new()
//!         .with_contact_point("127.0.0.1:8093".into())
//!         .with_credentials("Administrator".into(), "password".into())
//!         .with_bucket("default".into())
//!         .build()?;
//!
//!     let params = StatementParamsBuilder::new()
//!         .with_consistency(ScanConsistency::RequestPlus)
//!         .build();
//!
//!     let mut request = QueryRequest::with_params(
//!         "SELECT * FROM default WHERE type = $kind",
//!         params.query_params,
//!     );
//!     request.params.values.insert_named("kind", "beer");
//!
//!     let body = request.encoded()?;
//!     assert!(body.contains("request_plus"));
//!     let _ = config;
//!     Ok(())
//! }
//! ```

pub mod cluster;
pub mod statement;

pub use n1ql_protocol::consistency;
pub use n1ql_protocol::error;
pub use n1ql_protocol::query;
pub use n1ql_protocol::query_args;
pub use n1ql_protocol::request;
pub use n1ql_protocol::types;

pub type Error = error::Error;
pub type Result<T> = error::Result<T>;
