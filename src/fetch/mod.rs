//! Stylesheet fetching.
//!
//! The orchestrator only needs "give me the body of this URL", so fetching is
//! a trait: `HttpFetcher` is the real HTTP client, and any
//! `Fn(&str) -> Result<String, FetchError>` closure works as a stand-in.

mod http;
mod request;

pub use http::HttpFetcher;

use crate::error_handling::FetchError;

/// Retrieves a stylesheet body by absolute URL.
///
/// Implementations block until the body is available or the attempt failed.
/// A failure is never fatal to a check.
pub trait Fetcher {
    /// Fetches `url` and returns its body as text.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// Truncates `text` to at most `max` bytes on a char boundary.
pub(crate) fn truncate_body(mut text: String, max: usize) -> String {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}
