//! The catalog of generic shaping operations.
//!
//! The catalog is an immutable, process-wide registry mapping each operation
//! name to the ordered parameter definitions its implementation expects.
//! Catalog order is execution order: row-removing operations first, then
//! sorting, then subsetting, then presentation augmentation. Later operations
//! depend on the row set produced by earlier ones.

use std::sync::OnceLock;

use crate::ops::metrics::GOAL_OVERVIEW;
use crate::types::DataType;

/// Describes one positional parameter of a shaping operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Parameter name; also the request key unless `request_key` overrides it.
    pub key: &'static str,
    /// Target type the raw request value is coerced to.
    pub data_type: DataType,
    /// Raw default, substituted before coercion when the request omits the key.
    pub default: Option<&'static str>,
    /// Request-key alias; `None` means the parameter's own `key` is used.
    pub request_key: Option<&'static str>,
}

impl ParameterDefinition {
    const fn required(key: &'static str, data_type: DataType) -> Self {
        Self {
            key,
            data_type,
            default: None,
            request_key: None,
        }
    }

    const fn with_default(key: &'static str, data_type: DataType, default: &'static str) -> Self {
        Self {
            key,
            data_type,
            default: Some(default),
            request_key: None,
        }
    }

    /// The request key this parameter is looked up under.
    pub fn lookup_key(&self) -> &'static str {
        self.request_key.unwrap_or(self.key)
    }
}

/// One catalog entry: an operation name and its ordered parameter list.
///
/// Parameter order matches the positional order the operation implementation
/// expects; it is meaningful only within this entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    /// Operation name, as dispatched by [`crate::types::DataTable::apply_operation`].
    pub name: &'static str,
    /// Ordered parameter definitions.
    pub parameters: Vec<ParameterDefinition>,
}

/// The ordered operation catalog.
///
/// Built at most once per process (first use wins, concurrent first calls
/// observe the same fully built registry) and read-only thereafter.
pub fn catalog() -> &'static [OperationSpec] {
    static CATALOG: OnceLock<Vec<OperationSpec>> = OnceLock::new();
    CATALOG.get_or_init(build).as_slice()
}

fn build() -> Vec<OperationSpec> {
    use DataType::{Float64, Int64, Utf8};

    vec![
        OperationSpec {
            name: "pattern",
            parameters: vec![
                ParameterDefinition::with_default("filter_column", Utf8, "label"),
                ParameterDefinition::required("filter_pattern", Utf8),
            ],
        },
        OperationSpec {
            name: "pattern_recursive",
            parameters: vec![
                ParameterDefinition::with_default("filter_column_recursive", Utf8, "label"),
                ParameterDefinition::required("filter_pattern_recursive", Utf8),
            ],
        },
        OperationSpec {
            name: "exclude_low_population",
            parameters: vec![
                ParameterDefinition::required("filter_excludelowpop", Utf8),
                ParameterDefinition::with_default("filter_excludelowpop_value", Float64, "0"),
            ],
        },
        OperationSpec {
            name: "add_processed_metrics",
            parameters: vec![ParameterDefinition::required(
                "filter_add_columns_when_show_all_columns",
                Int64,
            )],
        },
        OperationSpec {
            name: "add_processed_metrics_goal",
            parameters: vec![
                ParameterDefinition::required("filter_update_columns_when_show_all_goals", Int64),
                ParameterDefinition::with_default("idGoal", Utf8, GOAL_OVERVIEW),
            ],
        },
        OperationSpec {
            name: "sort",
            parameters: vec![
                ParameterDefinition::required("filter_sort_column", Utf8),
                ParameterDefinition::with_default("filter_sort_order", Utf8, "desc"),
            ],
        },
        OperationSpec {
            name: "truncate",
            parameters: vec![ParameterDefinition::required("filter_truncate", Int64)],
        },
        OperationSpec {
            name: "limit",
            parameters: vec![
                ParameterDefinition::with_default("filter_offset", Int64, "0"),
                ParameterDefinition::required("filter_limit", Int64),
                ParameterDefinition::with_default("keep_summary_row", Int64, "0"),
            ],
        },
    ]
}
