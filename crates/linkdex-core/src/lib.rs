// Public fallible APIs in this crate share one concrete error contract (`LinkdexError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod log;
pub mod models;
pub mod state;
pub mod text;

pub use client::{Catalog, CatalogSummary, Snapshot, Visible};
pub use config::AppConfig;
pub use error::{LinkdexError, QueryError, Result};
