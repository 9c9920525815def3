//! Row sorting by a single column.

use std::cmp::Ordering;

use crate::types::{DataTable, Value};

/// Stable-sort rows by `column`.
///
/// `asc` (case-insensitive) sorts ascending; any other order string sorts
/// descending. Numeric values compare numerically (Int64 and Float64
/// interoperate); strings compare case-insensitively; mixed cells compare on
/// their text forms. Null and missing cells order last in both directions.
/// An unknown column leaves the table unchanged; the summary row stays put.
pub fn sort(table: &mut DataTable, column: &str, order: &str) {
    let Some(idx) = table.column_index(column) else {
        return;
    };
    let ascending = order.eq_ignore_ascii_case("asc");
    table
        .rows
        .sort_by(|a, b| compare_cells(a.cells.get(idx), b.cells.get(idx), ascending));
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>, ascending: bool) -> Ordering {
    match (present(a), present(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = compare_values(x, y);
            if ascending { ord } else { ord.reverse() }
        }
    }
}

fn present(cell: Option<&Value>) -> Option<&Value> {
    match cell {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.total_cmp(&y);
    }
    text_form(a).cmp(&text_form(b))
}

fn text_form(value: &Value) -> String {
    match value {
        Value::Utf8(s) => s.to_lowercase(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Null => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::sort;
    use crate::types::{DataTable, DataType, Field, Row, Schema, Value};

    fn table() -> DataTable {
        let schema = Schema::new(vec![
            Field::new("label", DataType::Utf8),
            Field::new("nb_visits", DataType::Int64),
        ]);
        DataTable::new(
            schema,
            vec![
                Row::new(vec![Value::Utf8("a".to_string()), Value::Int64(5)]),
                Row::new(vec![Value::Utf8("b".to_string()), Value::Null]),
                Row::new(vec![Value::Utf8("c".to_string()), Value::Int64(12)]),
                Row::new(vec![Value::Utf8("d".to_string()), Value::Float64(7.5)]),
            ],
        )
    }

    fn labels(t: &DataTable) -> Vec<&str> {
        t.rows
            .iter()
            .map(|r| r.cells[0].as_str().unwrap())
            .collect()
    }

    #[test]
    fn descending_numeric_sort_with_nulls_last() {
        let mut t = table();
        sort(&mut t, "nb_visits", "desc");
        assert_eq!(labels(&t), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn ascending_numeric_sort_with_nulls_still_last() {
        let mut t = table();
        sort(&mut t, "nb_visits", "asc");
        assert_eq!(labels(&t), vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn unrecognized_order_falls_back_to_descending() {
        let mut t = table();
        sort(&mut t, "nb_visits", "sideways");
        assert_eq!(labels(&t), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn string_sort_is_case_insensitive() {
        let schema = Schema::new(vec![Field::new("label", DataType::Utf8)]);
        let mut t = DataTable::new(
            schema,
            vec![
                Row::new(vec![Value::Utf8("beta".to_string())]),
                Row::new(vec![Value::Utf8("Alpha".to_string())]),
            ],
        );
        sort(&mut t, "label", "asc");
        assert_eq!(labels(&t), vec!["Alpha", "beta"]);
    }

    #[test]
    fn unknown_column_is_a_no_op_and_summary_row_stays_put() {
        let mut t = table();
        t.summary_row = Some(Row::new(vec![
            Value::Utf8("Others".to_string()),
            Value::Int64(99),
        ]));
        let before = t.clone();

        sort(&mut t, "nope", "desc");
        assert_eq!(t, before);

        sort(&mut t, "nb_visits", "desc");
        assert_eq!(
            t.summary_row.as_ref().unwrap().cells[0],
            Value::Utf8("Others".to_string())
        );
    }
}
