use thiserror::Error;

use crate::types::DataType;

/// Convenience result type for parameter resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Error produced while resolving one operation parameter against the request.
///
/// Both variants are caught at the operation-resolution boundary and turned
/// into "skip this operation"; they never abort the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request omits the key and the parameter defines no default.
    #[error("missing required parameter '{key}'")]
    MissingParameter { key: String },

    /// A raw value was present but could not be coerced to the target type.
    #[error("parameter '{key}' is not a valid {expected} (raw='{raw}')")]
    InvalidParameterType {
        key: String,
        expected: DataType,
        raw: String,
    },
}

/// Error returned by [`crate::types::DataTable::apply_operation`] when the
/// invocation itself is malformed.
///
/// Invocations built from the catalog always satisfy the dispatch contract,
/// so the chain only ever surfaces these through its observer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The operation name is not in the dispatch table.
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Wrong number of positional arguments.
    #[error("operation '{operation}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        operation: String,
        expected: usize,
        got: usize,
    },

    /// An argument had the wrong type for its position.
    #[error("operation '{operation}' argument {index} must be a {expected}")]
    ArgumentType {
        operation: String,
        index: usize,
        expected: &'static str,
    },
}
