//! Tiercache - A lightweight in-memory tiered cache server
//!
//! Stores entries across a count-bounded fast tier and a byte-budgeted
//! secondary tier, with LRU demotion and promotion between them.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
