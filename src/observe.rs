//! Optional diagnostics for chain runs.
//!
//! Skipped operations are expected and silent at the chain level (a missing
//! trigger parameter is the common case, not an error). An observer gives
//! embedders visibility into what was applied and what was skipped without
//! changing chain behavior.

use std::fmt;
use std::sync::Arc;

/// One per-operation outcome during a chain run over a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEvent {
    /// The operation's parameters all resolved and it was applied.
    OperationApplied {
        operation: &'static str,
        /// Row count of the table after application.
        rows: usize,
    },
    /// A parameter failed to resolve; the operation was skipped.
    OperationSkipped {
        operation: &'static str,
        reason: String,
    },
    /// The operation dispatch itself rejected the invocation.
    OperationFailed {
        operation: &'static str,
        reason: String,
    },
}

/// Observer hook for chain events.
///
/// Implementors can record metrics or logs; observation never alters what the
/// chain does.
pub trait FilterObserver: Send + Sync {
    fn on_event(&self, event: &ChainEvent);
}

/// Logs chain events to stderr.
#[derive(Debug, Default)]
pub struct StdErrFilterObserver;

impl FilterObserver for StdErrFilterObserver {
    fn on_event(&self, event: &ChainEvent) {
        match event {
            ChainEvent::OperationApplied { operation, rows } => {
                eprintln!("[shape][ok] op={operation} rows={rows}");
            }
            ChainEvent::OperationSkipped { operation, reason } => {
                eprintln!("[shape][skip] op={operation} {reason}");
            }
            ChainEvent::OperationFailed { operation, reason } => {
                eprintln!("[shape][fail] op={operation} {reason}");
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeFilterObserver {
    observers: Vec<Arc<dyn FilterObserver>>,
}

impl CompositeFilterObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn FilterObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeFilterObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilterObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl FilterObserver for CompositeFilterObserver {
    fn on_event(&self, event: &ChainEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
