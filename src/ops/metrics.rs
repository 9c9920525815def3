//! Derived (processed) metric columns.
//!
//! These operations augment a table with presentation ratios computed from
//! its base metric columns. They are deliberately additive: each derived
//! column is written only when its inputs exist, and an existing column of
//! the same name is overwritten rather than duplicated.

use crate::types::{DataTable, DataType, Value};

/// `idGoal` sentinel requesting the overview ratios rather than the metrics
/// of one specific goal.
pub const GOAL_OVERVIEW: &str = "overview";

/// Derived column name and the base column it is divided by visits from.
const PROCESSED_RATIOS: [(&str, &str); 4] = [
    ("actions_per_visit", "nb_actions"),
    ("avg_time_on_site", "sum_visit_length"),
    ("bounce_rate", "bounce_count"),
    ("conversion_rate", "nb_visits_converted"),
];

/// Add per-visit ratio columns derived from the base metric columns.
///
/// Requires an `nb_visits` column; without it the whole operation is a no-op.
/// When `delete_rows_with_no_visits` is non-zero, rows with zero (or null)
/// visits are removed first. Ratios are null where the denominator is zero.
/// The summary row, when present, gets the same derived columns.
pub fn add_processed_metrics(table: &mut DataTable, delete_rows_with_no_visits: i64) {
    let Some(visits_idx) = table.column_index("nb_visits") else {
        return;
    };

    if delete_rows_with_no_visits != 0 {
        table.rows.retain(|row| {
            row.cells
                .get(visits_idx)
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                > 0.0
        });
    }

    for (derived, numerator) in PROCESSED_RATIOS {
        add_ratio_column(table, derived, numerator, visits_idx);
    }
}

/// Goal flavor of [`add_processed_metrics`].
///
/// After the base ratios, derives revenue ratios: the [`GOAL_OVERVIEW`]
/// sentinel (or an empty goal) adds `revenue_per_visit` from the `revenue`
/// column; a concrete goal id `G` adds `goal_G_conversion_rate` and
/// `goal_G_revenue_per_visit` from that goal's `goal_G_nb_conversions` /
/// `goal_G_revenue` columns.
pub fn add_processed_metrics_goal(
    table: &mut DataTable,
    delete_rows_with_no_visits: i64,
    id_goal: &str,
) {
    add_processed_metrics(table, delete_rows_with_no_visits);
    let Some(visits_idx) = table.column_index("nb_visits") else {
        return;
    };

    let goal = id_goal.trim();
    if goal.is_empty() || goal == GOAL_OVERVIEW {
        add_ratio_column(table, "revenue_per_visit", "revenue", visits_idx);
    } else {
        add_ratio_column(
            table,
            &format!("goal_{goal}_conversion_rate"),
            &format!("goal_{goal}_nb_conversions"),
            visits_idx,
        );
        add_ratio_column(
            table,
            &format!("goal_{goal}_revenue_per_visit"),
            &format!("goal_{goal}_revenue"),
            visits_idx,
        );
    }
}

fn add_ratio_column(table: &mut DataTable, derived: &str, numerator: &str, visits_idx: usize) {
    let Some(numerator_idx) = table.column_index(numerator) else {
        return;
    };
    let out_idx = table.ensure_column(derived, DataType::Float64);

    for row in &mut table.rows {
        let value = ratio(row.cells.get(numerator_idx), row.cells.get(visits_idx));
        row.cells[out_idx] = value;
    }
    if let Some(summary) = &mut table.summary_row {
        let value = ratio(summary.cells.get(numerator_idx), summary.cells.get(visits_idx));
        summary.cells[out_idx] = value;
    }
}

fn ratio(numerator: Option<&Value>, denominator: Option<&Value>) -> Value {
    match (
        numerator.and_then(Value::as_f64),
        denominator.and_then(Value::as_f64),
    ) {
        (Some(n), Some(d)) if d > 0.0 => Value::Float64(n / d),
        _ => Value::Null,
    }
}
