//! Low-population row exclusion.

use crate::types::{DataTable, Value};

/// Fraction of the column sum used as the threshold when no explicit minimum
/// is supplied: rows below 2% of the total are not statistically significant.
const MINIMUM_SIGNIFICANT_FRACTION: f64 = 0.02;

/// Remove rows whose numeric value in `column` falls below `minimum`.
///
/// When `minimum` is zero or negative, the threshold becomes
/// [`MINIMUM_SIGNIFICANT_FRACTION`] of the column sum. Null and non-numeric
/// cells count as 0, so any positive threshold removes them. An unknown
/// column leaves the table unchanged.
pub fn exclude_low_population(table: &mut DataTable, column: &str, minimum: f64) {
    let Some(idx) = table.column_index(column) else {
        return;
    };

    let threshold = if minimum > 0.0 {
        minimum
    } else {
        let sum: f64 = table
            .rows
            .iter()
            .filter_map(|row| row.cells.get(idx).and_then(Value::as_f64))
            .sum();
        sum * MINIMUM_SIGNIFICANT_FRACTION
    };

    table.rows.retain(|row| {
        row.cells
            .get(idx)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            >= threshold
    });
}
