//! SQLite access for the StockFlow store.
//!
//! The store file is owned by the backend; this crate only runs single
//! statements against it and maps the rows back into structured records.

mod sqlite;
mod types;

pub use sqlite::execute_query;
pub use types::{QueryResult, Row, Value};
