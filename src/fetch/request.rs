//! Request header helpers.

use reqwest::blocking::RequestBuilder;
use reqwest::header::ACCEPT;

/// Headers sent with every stylesheet request.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard stylesheet request headers to a blocking request builder.
    pub(crate) fn apply_to_request_builder(builder: RequestBuilder) -> RequestBuilder {
        builder.header(ACCEPT, "text/css,*/*;q=0.1")
    }
}
