//! Executor tests against a seeded temporary store.

use super::seeded_store;
use pretty_assertions::assert_eq;
use stockflow_ai::db::{execute_query, Value};

#[tokio::test]
async fn test_count_query_returns_single_record() {
    let (_dir, path) = seeded_store().await;

    let result = execute_query(&path, "SELECT count(*) FROM products")
        .await
        .unwrap();

    assert_eq!(result.columns, vec!["count(*)".to_string()]);
    assert_eq!(result.rows, vec![vec![Value::Int(3)]]);
    assert_eq!(result.render_records(), r#"[{"count(*)":3}]"#);
}

#[tokio::test]
async fn test_projection_order_and_row_order_preserved() {
    let (_dir, path) = seeded_store().await;

    let result = execute_query(
        &path,
        "SELECT name, quantity FROM products ORDER BY quantity DESC",
    )
    .await
    .unwrap();

    assert_eq!(result.columns, vec!["name".to_string(), "quantity".to_string()]);
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.rows[0][0], Value::Text("Flour".to_string()));
    assert_eq!(result.rows[0][1], Value::Int(40));
    assert_eq!(result.rows[2][0], Value::Text("Coffee".to_string()));
}

#[tokio::test]
async fn test_null_values_mapped() {
    let (_dir, path) = seeded_store().await;

    let result = execute_query(
        &path,
        "SELECT name, expiryDate FROM products WHERE id = 2",
    )
    .await
    .unwrap();

    assert_eq!(result.rows[0][1], Value::Null);
    assert_eq!(
        result.render_records(),
        r#"[{"name":"Flour","expiryDate":null}]"#
    );
}

#[tokio::test]
async fn test_aggregate_and_expression_columns_typed_by_value() {
    let (_dir, path) = seeded_store().await;

    // Aggregates and computed fields carry no declared column type; the
    // mapping must follow the storage class of the value itself.
    let result = execute_query(
        &path,
        "SELECT SUM(quantity) AS total, AVG(quantity) AS mean, upper('ok') AS label FROM products",
    )
    .await
    .unwrap();

    assert_eq!(
        result.rows,
        vec![vec![
            Value::Int(57),
            Value::Float(19.0),
            Value::Text("OK".to_string()),
        ]]
    );
    assert_eq!(
        result.render_records(),
        r#"[{"total":57,"mean":19.0,"label":"OK"}]"#
    );
}

#[tokio::test]
async fn test_real_column_mapped_to_float() {
    let (_dir, path) = seeded_store().await;

    let result = execute_query(&path, "SELECT totalAmount FROM orders")
        .await
        .unwrap();

    assert_eq!(result.rows[0][0], Value::Float(99.5));
}

#[tokio::test]
async fn test_empty_result_renders_empty_sequence() {
    let (_dir, path) = seeded_store().await;

    let result = execute_query(&path, "SELECT * FROM suppliers")
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.render_records(), "[]");
}

#[tokio::test]
async fn test_missing_table_is_query_error() {
    let (_dir, path) = seeded_store().await;

    let err = execute_query(&path, "SELECT * FROM missing_table")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("no such table"), "got: {message}");
    assert!(message.contains("missing_table"), "got: {message}");
}

#[tokio::test]
async fn test_malformed_sql_is_query_error() {
    let (_dir, path) = seeded_store().await;

    let err = execute_query(&path, "SELEC name FROM products")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("syntax error"));
}

#[tokio::test]
async fn test_missing_store_file_is_query_error() {
    let err = execute_query(
        std::path::Path::new("/nonexistent/stockflow.db"),
        "SELECT 1",
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Failed to open store"));
}

#[tokio::test]
async fn test_statement_type_not_restricted() {
    // Known gap carried over from the original service: a mutating single
    // statement executes. The generation prompt is the only guard.
    let (_dir, path) = seeded_store().await;

    execute_query(
        &path,
        "INSERT INTO suppliers (companyName) VALUES ('Acme Foods')",
    )
    .await
    .unwrap();

    let result = execute_query(&path, "SELECT count(*) FROM suppliers")
        .await
        .unwrap();
    assert_eq!(result.rows, vec![vec![Value::Int(1)]]);
}
