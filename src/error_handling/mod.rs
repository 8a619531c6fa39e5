//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, URL resolution, fetching and checks
//! - Fetch failure categorization for log output

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, FetchFailure};
pub use types::{CheckError, FetchError, InitializationError, ResolveError};
