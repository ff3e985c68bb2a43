//! One-shot statement execution against the StockFlow SQLite file.
//!
//! Each call opens a fresh connection, runs a single statement, and closes
//! the connection before returning. Failures come back as `Query` errors
//! carrying the underlying message; nothing panics across this boundary.
//!
//! The executor does not restrict statement type. Sanitization upstream
//! drops chained statements, but a mutating single statement would run -
//! the generation prompt is the only thing keeping the workload read-only.

use crate::db::{QueryResult, Row, Value};
use crate::error::{Result, StockflowError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Column as SqlxColumn, ConnectOptions, Connection, Row as SqlxRow, TypeInfo, ValueRef};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Statement timeout in seconds.
const QUERY_TIMEOUT_SECS: u64 = 30;

/// Executes a single statement and maps the rows to structured records.
///
/// Column names are taken from the first row's result descriptor; a result
/// with zero rows has no column metadata and renders as an empty sequence.
pub async fn execute_query(path: &Path, sql: &str) -> Result<QueryResult> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false);

    let mut conn = options.connect().await.map_err(|e| {
        StockflowError::query(format!("Failed to open store at {}: {e}", path.display()))
    })?;

    let start = Instant::now();
    let fetched = tokio::time::timeout(
        Duration::from_secs(QUERY_TIMEOUT_SECS),
        sqlx::query(sql).fetch_all(&mut conn),
    )
    .await;
    let execution_time = start.elapsed();

    let result = match fetched {
        Err(_) => Err(StockflowError::query(format!(
            "Query timed out after {QUERY_TIMEOUT_SECS} seconds"
        ))),
        Ok(Err(e)) => Err(StockflowError::query(e.to_string())),
        Ok(Ok(rows)) => {
            let columns: Vec<String> = rows
                .first()
                .map(|row| {
                    row.columns()
                        .iter()
                        .map(|col| col.name().to_string())
                        .collect()
                })
                .unwrap_or_default();

            let mapped: Vec<Row> = rows.iter().map(convert_row).collect();

            debug!(
                rows = mapped.len(),
                duration_ms = execution_time.as_millis() as u64,
                "Statement executed"
            );

            Ok(QueryResult::with_data(columns, mapped).with_execution_time(execution_time))
        }
    };

    // One connection per statement; release it on every exit path.
    if let Err(e) = conn.close().await {
        warn!("Failed to close store connection: {e}");
    }

    result
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    (0..row.len()).map(|i| convert_value(row, i)).collect()
}

/// Converts a single column value from a SqliteRow to our Value type.
///
/// Dispatch goes by the storage class of the value actually present in the
/// row, not the declared column type. Expression columns such as `count(*)`
/// or `SUM(quantity)` have no declared type at all, so the statement
/// metadata reports them as NULL even when the value is an integer.
fn convert_value(row: &SqliteRow, index: usize) -> Value {
    let storage_class = match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(raw) => raw.type_info().name().to_uppercase(),
        Err(_) => return Value::Null,
    };

    match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(index)
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" | "NUMERIC" => row
            .try_get::<f64, _>(index)
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        // TEXT and the date/time classes the store reports as text-like.
        _ => row
            .try_get::<String, _>(index)
            .map(Value::Text)
            .unwrap_or(Value::Null),
    }
}
