//! Error type definitions.
//!
//! This module defines all error types used throughout the checker.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error resolving a URL found in markup against a base URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The base URL could not be parsed at all.
    #[error("Invalid base URL '{base}': {reason}")]
    InvalidBase {
        /// The offending base URL
        base: String,
        /// Parser message
        reason: String,
    },

    /// The base URL parsed but carries no host to build an origin from.
    #[error("Base URL '{0}' has no host component")]
    MissingHost(String),
}

/// Error fetching a stylesheet.
///
/// Fetch errors never abort a check; the orchestrator counts the attempt and
/// skips the stylesheet.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Failure reported by a caller-supplied fetcher.
    #[error("Fetch of {url} failed: {message}")]
    Other {
        /// Requested URL
        url: String,
        /// Free-text description
        message: String,
    },
}

impl FetchError {
    /// Creates a caller-defined fetch failure.
    pub fn other(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Error aborting a whole check run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The home URL has no usable host, so same-domain filtering is impossible.
    #[error("Invalid home URL '{0}': a scheme and host are required")]
    InvalidHomeUrl(String),

    /// Resolving a stylesheet href against the home URL failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
