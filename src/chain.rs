//! The ordered shaping chain.
//!
//! [`FilterChain::apply`] walks the catalog in its fixed order for each leaf
//! table: every parameter of an operation is resolved against the request,
//! and the operation is invoked only when the full list resolved. A
//! resolution failure cancels that one operation and nothing else: the rest
//! of the chain still runs, and on composite results every member is shaped
//! independently.
//!
//! Callers that honor the `disable_generic_filters` opt-out are expected to
//! check [`crate::request::Request::generic_filters_disabled`] before calling
//! into the chain at all.

use std::fmt;
use std::sync::Arc;

use crate::catalog::{catalog, OperationSpec};
use crate::error::ResolveResult;
use crate::observe::{ChainEvent, FilterObserver};
use crate::request::Request;
use crate::resolve::resolve;
use crate::types::{DataTable, ReportTable, Value};

/// Applies the catalog of generic shaping operations to report tables.
///
/// Holds a handle to the process-wide catalog plus an optional observer; one
/// chain can shape any number of tables.
#[derive(Clone)]
pub struct FilterChain {
    catalog: &'static [OperationSpec],
    observer: Option<Arc<dyn FilterObserver>>,
}

impl Default for FilterChain {
    fn default() -> Self {
        Self {
            catalog: catalog(),
            observer: None,
        }
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl FilterChain {
    /// A chain with no observer attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer for per-operation outcomes (diagnostics only).
    pub fn with_observer(mut self, observer: Arc<dyn FilterObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Shape `table` according to `request`.
    ///
    /// Returns `true` when at least one operation was applied to at least one
    /// leaf table. The flag is informational; no error ever propagates out of
    /// this call.
    pub fn apply(&self, table: &mut ReportTable, request: &Request) -> bool {
        match table {
            ReportTable::Set(members) => {
                let mut any_applied = false;
                for member in members.iter_mut() {
                    let applied = self.apply(member, request);
                    any_applied = any_applied || applied;
                }
                any_applied
            }
            ReportTable::Table(leaf) => self.apply_to_leaf(leaf, request),
        }
    }

    fn apply_to_leaf(&self, table: &mut DataTable, request: &Request) -> bool {
        let mut any_applied = false;
        for spec in self.catalog {
            match resolve_arguments(spec, request) {
                Ok(args) => match table.apply_operation(spec.name, &args) {
                    Ok(()) => {
                        any_applied = true;
                        self.emit(|| ChainEvent::OperationApplied {
                            operation: spec.name,
                            rows: table.row_count(),
                        });
                    }
                    Err(err) => {
                        self.emit(|| ChainEvent::OperationFailed {
                            operation: spec.name,
                            reason: err.to_string(),
                        });
                    }
                },
                Err(err) => {
                    self.emit(|| ChainEvent::OperationSkipped {
                        operation: spec.name,
                        reason: err.to_string(),
                    });
                }
            }
        }
        any_applied
    }

    fn emit(&self, event: impl FnOnce() -> ChainEvent) {
        if let Some(observer) = &self.observer {
            observer.on_event(&event());
        }
    }
}

/// One-shot convenience: shape `table` with a fresh, observer-less chain.
pub fn apply_generic_filters(table: &mut ReportTable, request: &Request) -> bool {
    FilterChain::new().apply(table, request)
}

fn resolve_arguments(spec: &OperationSpec, request: &Request) -> ResolveResult<Vec<Value>> {
    let mut args = Vec::with_capacity(spec.parameters.len());
    for definition in &spec.parameters {
        args.push(resolve(definition, request)?);
    }
    Ok(args)
}
