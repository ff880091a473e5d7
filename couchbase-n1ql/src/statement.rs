//! Statement-level parameters layered on top of the protocol-level ones.

mod mutation_state;
mod statement_params;
mod statement_params_builder;

pub use self::mutation_state::{MutationState, MutationToken};
pub use self::statement_params::StatementParams;
pub use self::statement_params_builder::StatementParamsBuilder;
