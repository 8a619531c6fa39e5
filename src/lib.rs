//! fonts_check library: Google Fonts dependency detection
//!
//! This library inspects a page's HTML and its same-domain stylesheets for
//! references to the Google Fonts hosts (`fonts.googleapis.com`,
//! `fonts.gstatic.com`) and reports every occurrence with where it was found.
//!
//! # Example
//!
//! ```no_run
//! use fonts_check::{run_check, Config, HttpFetcher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = std::fs::read_to_string("page.html")?;
//! let fetcher = HttpFetcher::new(&Config::default())?;
//!
//! let result = run_check(&html, "https://example.com/", &fetcher)?;
//! println!(
//!     "{} reference(s) across {} stylesheet(s)",
//!     result.references.len(),
//!     result.stylesheets_checked
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Fetching
//!
//! Stylesheets are fetched sequentially through the [`Fetcher`] trait.
//! [`HttpFetcher`] uses a blocking `reqwest` client; do not call it from
//! inside an async runtime thread (use `spawn_blocking`).

#![warn(missing_docs)]

mod app;
pub mod capture;
pub mod config;
pub mod detection;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod report;
mod run;

// Re-export public API
pub use app::url::{normalize_home_url, resolve, site_domain, stylesheet_name};
pub use capture::{CaptureCache, CapturedPage};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use detection::{extract_stylesheet_urls, scan_html, scan_stylesheet};
pub use error_handling::{
    categorize_fetch_error, CheckError, FetchError, FetchFailure, InitializationError,
    ResolveError,
};
pub use fetch::{Fetcher, HttpFetcher};
pub use models::{CheckResult, Reference, ReferenceKind};
pub use run::{check_captured, run_check};
