//! Concrete shaping operations.
//!
//! Each operation is a free function mutating a [`crate::types::DataTable`]
//! in place. [`apply`] is the name-based dispatch behind
//! [`crate::types::DataTable::apply_operation`]; the chain executor only ever
//! invokes names and argument lists taken from [`crate::catalog`], so the
//! dispatch contract errors here are a guard for hand-built invocations.
//!
//! Operations are tolerant of the data: an unknown column or an uncompilable
//! pattern leaves the table unchanged. The chain has no failure surface to
//! report such conditions through, and a pass-through is the specified
//! outcome.

pub mod exclude_low_population;
pub mod limit;
pub mod metrics;
pub mod pattern;
pub mod sort;
pub mod truncate;

pub use exclude_low_population::exclude_low_population;
pub use limit::limit;
pub use metrics::{add_processed_metrics, add_processed_metrics_goal};
pub use pattern::{pattern, pattern_recursive};
pub use sort::sort;
pub use truncate::truncate;

use crate::error::OperationError;
use crate::types::{DataTable, Value};

/// Dispatch a named operation with positional, typed arguments.
pub(crate) fn apply(
    table: &mut DataTable,
    name: &str,
    args: &[Value],
) -> Result<(), OperationError> {
    match name {
        "pattern" => {
            expect_len(name, args, 2)?;
            pattern(table, str_arg(name, args, 0)?, str_arg(name, args, 1)?);
        }
        "pattern_recursive" => {
            expect_len(name, args, 2)?;
            pattern_recursive(table, str_arg(name, args, 0)?, str_arg(name, args, 1)?);
        }
        "exclude_low_population" => {
            expect_len(name, args, 2)?;
            exclude_low_population(table, str_arg(name, args, 0)?, float_arg(name, args, 1)?);
        }
        "add_processed_metrics" => {
            expect_len(name, args, 1)?;
            add_processed_metrics(table, int_arg(name, args, 0)?);
        }
        "add_processed_metrics_goal" => {
            expect_len(name, args, 2)?;
            add_processed_metrics_goal(table, int_arg(name, args, 0)?, str_arg(name, args, 1)?);
        }
        "sort" => {
            expect_len(name, args, 2)?;
            sort(table, str_arg(name, args, 0)?, str_arg(name, args, 1)?);
        }
        "truncate" => {
            expect_len(name, args, 1)?;
            truncate(table, int_arg(name, args, 0)?);
        }
        "limit" => {
            expect_len(name, args, 3)?;
            limit(
                table,
                int_arg(name, args, 0)?,
                int_arg(name, args, 1)?,
                int_arg(name, args, 2)?,
            );
        }
        _ => {
            return Err(OperationError::UnknownOperation {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn expect_len(operation: &str, args: &[Value], expected: usize) -> Result<(), OperationError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(OperationError::ArgumentCount {
            operation: operation.to_string(),
            expected,
            got: args.len(),
        })
    }
}

fn str_arg<'a>(operation: &str, args: &'a [Value], index: usize) -> Result<&'a str, OperationError> {
    match args.get(index) {
        Some(Value::Utf8(s)) => Ok(s.as_str()),
        _ => Err(type_error(operation, index, "string")),
    }
}

fn int_arg(operation: &str, args: &[Value], index: usize) -> Result<i64, OperationError> {
    match args.get(index) {
        Some(Value::Int64(v)) => Ok(*v),
        _ => Err(type_error(operation, index, "integer")),
    }
}

fn float_arg(operation: &str, args: &[Value], index: usize) -> Result<f64, OperationError> {
    match args.get(index) {
        Some(Value::Float64(v)) => Ok(*v),
        _ => Err(type_error(operation, index, "float")),
    }
}

fn type_error(operation: &str, index: usize, expected: &'static str) -> OperationError {
    OperationError::ArgumentType {
        operation: operation.to_string(),
        index,
        expected,
    }
}
