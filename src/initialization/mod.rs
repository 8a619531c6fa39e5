//! Application initialization.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - Blocking HTTP client for stylesheet fetches

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
