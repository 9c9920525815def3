//! Core data model for report tables.
//!
//! The shaping chain operates on an in-memory [`DataTable`]: an ordered
//! [`Schema`] of typed columns plus rows of [`Value`] cells. Rows may carry a
//! drill-down subtable (produced by the reporting layer for hierarchical
//! reports), and a table may carry a summary row (produced by truncation).
//!
//! [`ReportTable`] is the shape handed to the chain: either a single table or
//! an ordered collection of tables, each shaped independently.

use serde::Serialize;
use std::fmt;

use crate::error::OperationError;

/// Label given to the summary row produced by truncation.
pub const SUMMARY_ROW_LABEL: &str = "Others";

/// Logical data type for a table column or an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int64 => "integer",
            DataType::Float64 => "float",
            DataType::Utf8 => "string",
        };
        f.write_str(name)
    }
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of columns describing the shape of a table's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Numeric view of the value; `None` for `Null` and strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            Value::Null | Value::Utf8(_) => None,
        }
    }

    /// String view of the value; `None` unless `Utf8`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// One table row: ordered cells plus an optional drill-down subtable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Cells in schema order.
    pub cells: Vec<Value>,
    /// Drill-down subtable, if the reporting layer produced one for this row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtable: Option<Box<DataTable>>,
}

impl Row {
    /// Create a row without a subtable.
    pub fn new(cells: Vec<Value>) -> Self {
        Self {
            cells,
            subtable: None,
        }
    }

    /// Create a row carrying a drill-down subtable.
    pub fn with_subtable(cells: Vec<Value>, subtable: DataTable) -> Self {
        Self {
            cells,
            subtable: Some(Box::new(subtable)),
        }
    }
}

/// A single in-memory report table (the Leaf shape).
///
/// Shaping operations mutate the table in place via [`DataTable::apply_operation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Rows in report order.
    pub rows: Vec<Row>,
    /// Summary row, if one exists (e.g. the `Others` row added by truncation).
    /// Kept apart from `rows` so that sorting and pattern filtering never
    /// touch it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_row: Option<Row>,
}

impl DataTable {
    /// Create a table from schema and rows, with no summary row.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            schema,
            rows,
            summary_row: None,
        }
    }

    /// Number of rows in the table (excluding any summary row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    /// Returns the index of `name`, adding the column (with `Null` cells in
    /// every row, including the summary row) if it does not exist yet.
    pub fn ensure_column(&mut self, name: &str, data_type: DataType) -> usize {
        if let Some(idx) = self.schema.index_of(name) {
            return idx;
        }
        self.schema.fields.push(Field::new(name, data_type));
        for row in &mut self.rows {
            row.cells.push(Value::Null);
        }
        if let Some(summary) = &mut self.summary_row {
            summary.cells.push(Value::Null);
        }
        self.schema.fields.len() - 1
    }

    /// Apply a named shaping operation with positional, typed arguments.
    ///
    /// This is the capability the chain executor invokes once an operation's
    /// parameters have all resolved; see [`crate::catalog`] for the known
    /// names and their argument contracts.
    pub fn apply_operation(&mut self, name: &str, args: &[Value]) -> Result<(), OperationError> {
        crate::ops::apply(self, name, args)
    }
}

/// A shaping target: a single table, or an ordered collection of tables each
/// shaped independently. Collections may nest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportTable {
    /// A single table.
    Table(DataTable),
    /// An ordered collection of member tables (e.g. one per period or site).
    Set(Vec<ReportTable>),
}

impl ReportTable {
    /// Borrow the inner table if this is a single-table result.
    pub fn as_table(&self) -> Option<&DataTable> {
        match self {
            ReportTable::Table(t) => Some(t),
            ReportTable::Set(_) => None,
        }
    }
}
