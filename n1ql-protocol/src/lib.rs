//! Request encoding for the Couchbase N1QL query service.
//! Built in coordination with couchbase-n1ql but is flexible for many usecases.

#[macro_use]
mod macros;

pub mod query;
pub mod request;
pub mod types;

pub mod consistency;
pub mod error;

pub type Error = error::Error;
pub type Result<T> = error::Result<T>;
