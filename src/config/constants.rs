//! Configuration constants.
//!
//! This module defines the constants used throughout the checker, including
//! the font-service host pattern, fetch timeouts and size limits.

/// Host pattern shared by every detection pass.
///
/// Matches both the CSS API host and the font file host. Callers embed it in
/// larger patterns, so it carries no anchors and no flags.
pub const GOOGLE_FONTS_HOST_PATTERN: &str = r"fonts\.(?:googleapis|gstatic)\.com";

/// Per-stylesheet fetch timeout in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 20;

/// Default User-Agent string for stylesheet requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("fonts_check/", env!("CARGO_PKG_VERSION"));

/// Maximum stylesheet body size in bytes (2MB).
/// Bodies larger than this are truncated before scanning.
pub const MAX_STYLESHEET_SIZE: usize = 2 * 1024 * 1024;

/// Lifetime of a pending page capture in seconds (5 minutes).
/// A capture that is never consumed expires after this window.
pub const CAPTURE_TTL_SECS: i64 = 300;

/// Environment variable consulted for the site's home URL.
pub const HOME_URL_ENV: &str = "FONTS_CHECK_HOME_URL";

/// Message placed in `CheckResult::error` when no capture is pending.
pub const NO_CAPTURE_MESSAGE: &str =
    "No captured page is available. Capture a page before running the check.";
