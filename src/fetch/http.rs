//! Blocking HTTP fetcher.

use log::debug;

use super::request::RequestHeaders;
use super::{truncate_body, Fetcher};
use crate::config::{Config, MAX_STYLESHEET_SIZE};
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;

/// Fetches stylesheets over HTTP(S) with a blocking `reqwest` client.
///
/// Each request is bounded by the configured timeout. Non-success statuses
/// are reported as `FetchError::Status`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the library configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let request = RequestHeaders::apply_to_request_builder(self.client.get(url));
        let response = request.send().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!("Fetched {} ({} bytes)", url, body.len());

        Ok(truncate_body(body, MAX_STYLESHEET_SIZE))
    }
}
