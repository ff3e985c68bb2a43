//! StockFlow AI - a natural-language assistant for inventory data.
//!
//! This library exposes the core modules for use in integration tests.

pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod sql;
