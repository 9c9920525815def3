//! Row truncation with an aggregated `Others` summary row.

use crate::types::{DataTable, DataType, Row, Schema, Value, SUMMARY_ROW_LABEL};

/// Fold rows beyond index `keep` into a summary row labelled
/// [`SUMMARY_ROW_LABEL`].
///
/// Numeric columns of the folded rows are summed (nulls ignored; an all-null
/// column stays null); other columns become null, except a `label` column
/// which carries the summary label. The folded rows' subtables are dropped,
/// any existing summary row is replaced, and surviving rows' subtables are
/// truncated recursively with the same limit. A negative `keep` is a no-op.
pub fn truncate(table: &mut DataTable, keep: i64) {
    if keep < 0 {
        return;
    }
    let keep = keep as usize;
    if table.row_count() > keep {
        let tail = table.rows.split_off(keep);
        table.summary_row = Some(aggregate_tail(&table.schema, &tail));
    }
    for row in &mut table.rows {
        if let Some(subtable) = row.subtable.as_deref_mut() {
            truncate(subtable, keep as i64);
        }
    }
}

fn aggregate_tail(schema: &Schema, tail: &[Row]) -> Row {
    let mut cells = Vec::with_capacity(schema.fields.len());
    for (idx, field) in schema.fields.iter().enumerate() {
        let cell = match field.data_type {
            DataType::Int64 => sum_int(tail, idx),
            DataType::Float64 => sum_float(tail, idx),
            DataType::Utf8 => {
                if field.name == "label" {
                    Value::Utf8(SUMMARY_ROW_LABEL.to_string())
                } else {
                    Value::Null
                }
            }
        };
        cells.push(cell);
    }
    Row::new(cells)
}

fn sum_int(rows: &[Row], idx: usize) -> Value {
    let mut acc: Option<i64> = None;
    for row in rows {
        if let Some(Value::Int64(v)) = row.cells.get(idx) {
            acc = Some(acc.unwrap_or(0) + v);
        }
    }
    acc.map(Value::Int64).unwrap_or(Value::Null)
}

fn sum_float(rows: &[Row], idx: usize) -> Value {
    let mut acc: Option<f64> = None;
    for row in rows {
        if let Some(v) = row.cells.get(idx).and_then(Value::as_f64) {
            acc = Some(acc.unwrap_or(0.0) + v);
        }
    }
    acc.map(Value::Float64).unwrap_or(Value::Null)
}
