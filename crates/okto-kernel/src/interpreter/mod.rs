//! Interpreter core: variable store, statement results, errors, and
//! arithmetic on numeric variables.

pub mod arith;
mod error;
mod result;
mod scope;

pub use error::{EvalError, StoreError};
pub use result::ExecResult;
pub use scope::VariableStore;
