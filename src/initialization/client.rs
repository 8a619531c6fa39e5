//! HTTP client initialization.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::Config;

/// Initializes the blocking HTTP client used to fetch stylesheets.
///
/// Creates a `reqwest::blocking::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
/// - TLS certificate verification only when `verify_tls` is set
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()
}
