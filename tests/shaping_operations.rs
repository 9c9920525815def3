//! End-to-end scenarios for the individual shaping operations, driven through
//! the chain the way a reporting layer would drive them.

use pretty_assertions::assert_eq;

use report_shaping::chain::apply_generic_filters;
use report_shaping::request::Request;
use report_shaping::types::{DataTable, DataType, Field, ReportTable, Row, Schema, Value};

fn metric_schema() -> Schema {
    Schema::new(vec![
        Field::new("label", DataType::Utf8),
        Field::new("nb_visits", DataType::Int64),
        Field::new("nb_actions", DataType::Int64),
        Field::new("bounce_count", DataType::Int64),
    ])
}

fn metric_row(label: &str, visits: i64, actions: i64, bounces: i64) -> Row {
    Row::new(vec![
        Value::Utf8(label.to_string()),
        Value::Int64(visits),
        Value::Int64(actions),
        Value::Int64(bounces),
    ])
}

#[test]
fn pattern_recursive_filters_through_subtables() {
    let schema = Schema::new(vec![
        Field::new("label", DataType::Utf8),
        Field::new("nb_visits", DataType::Int64),
    ]);
    let subtable = DataTable::new(
        schema.clone(),
        vec![
            Row::new(vec![Value::Utf8("checkout".to_string()), Value::Int64(4)]),
            Row::new(vec![Value::Utf8("landing".to_string()), Value::Int64(9)]),
        ],
    );
    let table = DataTable::new(
        schema,
        vec![
            Row::with_subtable(
                vec![Value::Utf8("shop".to_string()), Value::Int64(13)],
                subtable,
            ),
            Row::new(vec![Value::Utf8("blog".to_string()), Value::Int64(20)]),
        ],
    );

    let request = Request::from_pairs([("filter_pattern_recursive", "checkout")]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let shaped = report.as_table().unwrap();
    assert_eq!(shaped.row_count(), 1);
    assert_eq!(shaped.rows[0].cells[0], Value::Utf8("shop".to_string()));
    let sub = shaped.rows[0].subtable.as_deref().unwrap();
    assert_eq!(sub.row_count(), 1);
    assert_eq!(sub.rows[0].cells[0], Value::Utf8("checkout".to_string()));
}

#[test]
fn exclude_low_population_uses_the_explicit_threshold() {
    let table = DataTable::new(
        metric_schema(),
        vec![
            metric_row("big", 100, 150, 20),
            metric_row("mid", 10, 12, 1),
            metric_row("tiny", 1, 1, 1),
        ],
    );

    let request = Request::from_pairs([
        ("filter_excludelowpop", "nb_visits"),
        ("filter_excludelowpop_value", "10"),
    ]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let shaped = report.as_table().unwrap();
    assert_eq!(shaped.row_count(), 2);
}

#[test]
fn processed_metrics_add_ratio_columns_and_drop_empty_rows() {
    let table = DataTable::new(
        metric_schema(),
        vec![metric_row("a", 10, 30, 2), metric_row("ghost", 0, 0, 0)],
    );

    let request = Request::from_pairs([("filter_add_columns_when_show_all_columns", "1")]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let shaped = report.as_table().unwrap();
    assert_eq!(shaped.row_count(), 1, "zero-visit row must be removed");

    let actions_idx = shaped.column_index("actions_per_visit").unwrap();
    let bounce_idx = shaped.column_index("bounce_rate").unwrap();
    assert_eq!(shaped.rows[0].cells[actions_idx], Value::Float64(3.0));
    assert_eq!(shaped.rows[0].cells[bounce_idx], Value::Float64(0.2));
    // sum_visit_length is absent, so no avg_time_on_site column appears.
    assert_eq!(shaped.column_index("avg_time_on_site"), None);
}

#[test]
fn goal_metrics_default_to_the_overview_sentinel() {
    let mut table = DataTable::new(
        metric_schema(),
        vec![metric_row("a", 20, 40, 5)],
    );
    table.ensure_column("revenue", DataType::Float64);
    let revenue_idx = table.column_index("revenue").unwrap();
    table.rows[0].cells[revenue_idx] = Value::Float64(90.0);

    // idGoal is omitted: the catalog default (the overview sentinel) applies.
    let request = Request::from_pairs([("filter_update_columns_when_show_all_goals", "1")]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let shaped = report.as_table().unwrap();
    let idx = shaped.column_index("revenue_per_visit").unwrap();
    assert_eq!(shaped.rows[0].cells[idx], Value::Float64(4.5));
}

#[test]
fn sort_ascending_is_honored_when_requested() {
    let table = DataTable::new(
        metric_schema(),
        vec![
            metric_row("b", 12, 1, 1),
            metric_row("a", 5, 1, 1),
            metric_row("c", 30, 1, 1),
        ],
    );

    let request = Request::from_pairs([
        ("filter_sort_column", "nb_visits"),
        ("filter_sort_order", "asc"),
    ]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let visits: Vec<i64> = report
        .as_table()
        .unwrap()
        .rows
        .iter()
        .map(|r| match r.cells[1] {
            Value::Int64(v) => v,
            _ => panic!("expected integer visits"),
        })
        .collect();
    assert_eq!(visits, vec![5, 12, 30]);
}

#[test]
fn offset_pagination_over_a_sorted_table() {
    let table = DataTable::new(
        metric_schema(),
        (0..10).map(|i| metric_row(&format!("p{i}"), i, 0, 0)).collect(),
    );

    let request = Request::from_pairs([
        ("filter_sort_column", "nb_visits"),
        ("filter_sort_order", "desc"),
        ("filter_offset", "2"),
        ("filter_limit", "3"),
    ]);
    let mut report = ReportTable::Table(table);
    assert!(apply_generic_filters(&mut report, &request));

    let labels: Vec<&str> = report
        .as_table()
        .unwrap()
        .rows
        .iter()
        .map(|r| r.cells[0].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["p7", "p6", "p5"]);
}

#[test]
fn shaped_tables_serialize_for_rendering() {
    let table = DataTable::new(
        Schema::new(vec![
            Field::new("label", DataType::Utf8),
            Field::new("nb_visits", DataType::Int64),
        ]),
        vec![Row::new(vec![
            Value::Utf8("home".to_string()),
            Value::Int64(3),
        ])],
    );
    let report = ReportTable::Table(table);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rows"][0]["cells"], serde_json::json!(["home", 3]));
}
