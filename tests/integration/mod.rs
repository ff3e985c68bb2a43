//! Integration tests for the StockFlow assistant.
//!
//! Shared seeding helpers for a temporary store carrying the StockFlow
//! schema (the same tables the backend owns in production).

pub mod executor_test;
pub mod pipeline_test;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Statements creating the StockFlow schema.
const SCHEMA: &[&str] = &[
    "CREATE TABLE products (id INTEGER PRIMARY KEY, name TEXT NOT NULL, barcode TEXT, description TEXT, quantity INTEGER NOT NULL DEFAULT 0, category TEXT, expiryDate TEXT)",
    "CREATE TABLE suppliers (id INTEGER PRIMARY KEY, companyName TEXT NOT NULL, contactName TEXT, phone TEXT, email TEXT)",
    "CREATE TABLE product_suppliers (productId INTEGER NOT NULL, supplierId INTEGER NOT NULL)",
    "CREATE TABLE stock_movements (id INTEGER PRIMARY KEY, productId INTEGER NOT NULL, type TEXT NOT NULL, quantity INTEGER NOT NULL, date TEXT NOT NULL)",
    "CREATE TABLE orders (id INTEGER PRIMARY KEY, supplierId INTEGER, status TEXT, date TEXT, totalAmount REAL)",
    "CREATE TABLE order_items (id INTEGER PRIMARY KEY, orderId INTEGER, productId INTEGER, quantity INTEGER, unitPrice REAL)",
];

/// Sample rows: three products, one with a NULL expiry date.
const SEED_ROWS: &[&str] = &[
    "INSERT INTO products (id, name, quantity, category, expiryDate) VALUES (1, 'Milk', 12, 'Dairy', '2026-09-01T00:00:00.000Z')",
    "INSERT INTO products (id, name, quantity, category, expiryDate) VALUES (2, 'Flour', 40, 'Baking', NULL)",
    "INSERT INTO products (id, name, quantity, category, expiryDate) VALUES (3, 'Coffee', 5, 'Beverages', '2027-01-15T00:00:00.000Z')",
    "INSERT INTO stock_movements (productId, type, quantity, date) VALUES (1, 'OUT', 4, '2026-08-20T10:00:00.000Z')",
    "INSERT INTO stock_movements (productId, type, quantity, date) VALUES (3, 'IN', 10, '2026-08-21T09:30:00.000Z')",
    "INSERT INTO orders (supplierId, status, date, totalAmount) VALUES (1, 'PENDING', '2026-08-22T08:00:00.000Z', 99.5)",
];

/// Creates a seeded store in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub async fn seeded_store() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("stockflow.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("open seed connection");

    for statement in SCHEMA.iter().chain(SEED_ROWS) {
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .expect("seed statement");
    }

    conn.close().await.expect("close seed connection");

    (dir, path)
}

/// Counts rows in a table directly, bypassing the pipeline.
pub async fn count_rows(path: &Path, table: &str) -> i64 {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .connect()
        .await
        .expect("open count connection");

    let count: i64 = sqlx::query_scalar(&format!("SELECT count(*) FROM {table}"))
        .fetch_one(&mut conn)
        .await
        .expect("count query");

    conn.close().await.expect("close count connection");

    count
}
