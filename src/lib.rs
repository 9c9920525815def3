//! `report-shaping` applies a fixed, ordered chain of generic shaping
//! operations (pattern filtering, low-population exclusion, derived-metric
//! augmentation, sorting, truncation, and pagination) to in-memory report
//! tables produced by an upstream query/reporting layer.
//!
//! Each operation's parameters come from an externally supplied
//! [`request::Request`] mapping and are looked up, defaulted, and
//! type-coerced per operation. A parameter that is missing (with no default)
//! or fails coercion cancels only that one operation; the rest of the chain
//! still runs. The chain order is fixed by the [`catalog`] (row-removing
//! operations first, then sorting, then subsetting, then presentation
//! columns) and is never affected by request key order.
//!
//! ## Quick example: sort and paginate
//!
//! ```rust
//! use report_shaping::chain::FilterChain;
//! use report_shaping::request::Request;
//! use report_shaping::types::{DataTable, DataType, Field, ReportTable, Row, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("label", DataType::Utf8),
//!     Field::new("nb_visits", DataType::Int64),
//! ]);
//! let table = DataTable::new(
//!     schema,
//!     vec![
//!         Row::new(vec![Value::Utf8("home".to_string()), Value::Int64(10)]),
//!         Row::new(vec![Value::Utf8("docs".to_string()), Value::Int64(25)]),
//!         Row::new(vec![Value::Utf8("about".to_string()), Value::Int64(3)]),
//!     ],
//! );
//!
//! // Sort by visits (descending is the default order) and keep the top two.
//! let request = Request::from_pairs([
//!     ("filter_sort_column", "nb_visits"),
//!     ("filter_limit", "2"),
//! ]);
//!
//! let mut report = ReportTable::Table(table);
//! let applied = FilterChain::new().apply(&mut report, &request);
//! assert!(applied);
//!
//! let shaped = report.as_table().unwrap();
//! assert_eq!(shaped.row_count(), 2);
//! assert_eq!(shaped.rows[0].cells[0], Value::Utf8("docs".to_string()));
//! ```
//!
//! ## Failure isolation
//!
//! A bad parameter skips its own operation and nothing else:
//!
//! ```rust
//! use report_shaping::chain::apply_generic_filters;
//! use report_shaping::request::Request;
//! use report_shaping::types::{DataTable, DataType, Field, ReportTable, Row, Schema, Value};
//!
//! let schema = Schema::new(vec![Field::new("nb_visits", DataType::Int64)]);
//! let rows = vec![
//!     Row::new(vec![Value::Int64(10)]),
//!     Row::new(vec![Value::Int64(3)]),
//! ];
//! let mut report = ReportTable::Table(DataTable::new(schema, rows));
//!
//! let request = Request::from_pairs([
//!     // Not a float: exclude_low_population is skipped...
//!     ("filter_excludelowpop", "nb_visits"),
//!     ("filter_excludelowpop_value", "abc"),
//!     // ...while pagination still applies.
//!     ("filter_limit", "1"),
//! ]);
//!
//! assert!(apply_generic_filters(&mut report, &request));
//! assert_eq!(report.as_table().unwrap().row_count(), 1);
//! ```
//!
//! ## Composite results
//!
//! A [`types::ReportTable::Set`] (one member per period, site, ...) is shaped
//! member by member, independently: the chain recurses into each member and
//! one member's outcome never affects another.
//!
//! ## Opting out
//!
//! The `disable_generic_filters` request flag belongs to the caller: check
//! [`request::Request::generic_filters_disabled`] *before* invoking the
//! chain. The chain itself never consults it.
//!
//! ## Modules
//!
//! - [`types`]: report table data model (tables, rows, subtables, values)
//! - [`request`]: the raw request parameter mapping
//! - [`catalog`]: the ordered registry of operations and their parameters
//! - [`resolve`]: per-parameter resolution (lookup, default, coercion)
//! - [`chain`]: the chain executor and composite traversal
//! - [`ops`]: the concrete shaping operations
//! - [`observe`]: optional per-operation diagnostics
//! - [`error`]: error types used across resolution and dispatch

pub mod catalog;
pub mod chain;
pub mod error;
pub mod observe;
pub mod ops;
pub mod request;
pub mod resolve;
pub mod types;

pub use error::{OperationError, ResolveError, ResolveResult};
