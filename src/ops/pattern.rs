//! Pattern filtering over a single column.

use regex::{Regex, RegexBuilder};

use crate::types::{DataTable, Value};

/// Keep only rows whose cell in `column` matches `pattern`, case-insensitively.
///
/// An unknown column or an uncompilable pattern leaves the table unchanged.
/// The summary row is never pattern-filtered.
pub fn pattern(table: &mut DataTable, column: &str, pattern: &str) {
    let Some(idx) = table.column_index(column) else {
        return;
    };
    let Some(re) = compile(pattern) else {
        return;
    };
    table.rows.retain(|row| cell_matches(&re, row.cells.get(idx)));
}

/// Recursive variant for hierarchical reports.
///
/// A row survives when its own cell matches (its subtable is kept whole) or
/// when its subtable recursively contains a match (the subtable is pruned to
/// the matching subset). Column lookup happens per table, so subtables with
/// their own schemas participate.
pub fn pattern_recursive(table: &mut DataTable, column: &str, pattern: &str) {
    if table.column_index(column).is_none() {
        return;
    }
    let Some(re) = compile(pattern) else {
        return;
    };
    retain_matching(table, column, &re);
}

fn retain_matching(table: &mut DataTable, column: &str, re: &Regex) -> bool {
    let idx = table.column_index(column);
    table.rows.retain_mut(|row| {
        let self_match = idx.is_some_and(|i| cell_matches(re, row.cells.get(i)));
        if self_match {
            return true;
        }
        match row.subtable.as_deref_mut() {
            Some(subtable) => retain_matching(subtable, column, re),
            None => false,
        }
    });
    !table.rows.is_empty()
}

fn compile(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

fn cell_matches(re: &Regex, cell: Option<&Value>) -> bool {
    match cell {
        Some(Value::Utf8(s)) => re.is_match(s),
        Some(Value::Int64(v)) => re.is_match(&v.to_string()),
        Some(Value::Float64(v)) => re.is_match(&v.to_string()),
        Some(Value::Null) | None => false,
    }
}
