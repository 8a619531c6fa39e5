//! Fetch error categorization.
//!
//! Failed stylesheet fetches are invisible in the report, so the category is
//! only used to make the debug log line useful.

use super::types::FetchError;

/// Coarse reason a stylesheet fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// Request exceeded the configured timeout
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Server answered with a 4xx status
    ClientStatus,
    /// Server answered with a 5xx status
    ServerStatus,
    /// Response body could not be read or decoded
    Body,
    /// Anything else
    Other,
}

impl FetchFailure {
    /// Short label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchFailure::Timeout => "timeout",
            FetchFailure::Connect => "connect",
            FetchFailure::ClientStatus => "client status",
            FetchFailure::ServerStatus => "server status",
            FetchFailure::Body => "body",
            FetchFailure::Other => "other",
        }
    }
}

fn categorize_status(status: u16) -> FetchFailure {
    match status {
        400..=499 => FetchFailure::ClientStatus,
        500..=599 => FetchFailure::ServerStatus,
        _ => FetchFailure::Other,
    }
}

/// Categorizes a `FetchError` into a `FetchFailure`.
pub fn categorize_fetch_error(error: &FetchError) -> FetchFailure {
    match error {
        FetchError::Status { status, .. } => categorize_status(*status),
        FetchError::Request { source, .. } => {
            if let Some(status) = source.status() {
                return categorize_status(status.as_u16());
            }
            if source.is_timeout() {
                FetchFailure::Timeout
            } else if source.is_connect() {
                FetchFailure::Connect
            } else if source.is_body() || source.is_decode() {
                FetchFailure::Body
            } else {
                FetchFailure::Other
            }
        }
        FetchError::Other { .. } => FetchFailure::Other,
    }
}
