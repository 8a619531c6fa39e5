//! URL resolution and normalization utilities.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;
use url::Url;

use crate::error_handling::ResolveError;

/// Maximum URL length (2048 characters) accepted for the home URL.
const MAX_URL_LENGTH: usize = 2048;

static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://").expect("Failed to compile absolute URL pattern - this is a bug")
});

/// Scheme and authority of a base URL, as used to rebuild absolute URLs.
struct Origin {
    scheme: String,
    authority: String,
    path: String,
}

fn parse_origin(base_url: &str) -> Result<Origin, ResolveError> {
    let parsed = Url::parse(base_url).map_err(|e| ResolveError::InvalidBase {
        base: base_url.to_string(),
        reason: e.to_string(),
    })?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ResolveError::MissingHost(base_url.to_string()))?;

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok(Origin {
        scheme: parsed.scheme().to_string(),
        authority,
        path: parsed.path().to_string(),
    })
}

/// Directory part of a path, with POSIX `dirname` semantics.
///
/// Trailing slashes are ignored before dropping the final segment:
/// `/blog/` yields `/`, and `/blog/index.php` yields `/blog`.
fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind('/') {
        None => ".",
        Some(idx) => {
            let dir = trimmed[..idx].trim_end_matches('/');
            if dir.is_empty() {
                "/"
            } else {
                dir
            }
        }
    }
}

/// Resolves a possibly-relative URL found in markup against a base URL.
///
/// - `http(s)://...` (any case) is returned unchanged
/// - `//host/...` gets the base scheme
/// - `/path` gets the base scheme and host
/// - anything else is appended to the directory of the base path
///
/// # Errors
///
/// Returns `ResolveError` when the base URL cannot be parsed or has no host.
/// Already-absolute URLs never touch the base, so they resolve even against
/// a malformed one.
///
/// # Examples
///
/// ```
/// use fonts_check::resolve;
///
/// assert_eq!(
///     resolve("/wp-content/style.css", "https://example.com").unwrap(),
///     "https://example.com/wp-content/style.css"
/// );
/// ```
pub fn resolve(url: &str, base_url: &str) -> Result<String, ResolveError> {
    if ABSOLUTE_URL.is_match(url) {
        return Ok(url.to_string());
    }

    let origin = parse_origin(base_url)?;

    if url.starts_with("//") {
        return Ok(format!("{}:{}", origin.scheme, url));
    }

    if url.starts_with('/') {
        return Ok(format!("{}://{}{}", origin.scheme, origin.authority, url));
    }

    let dir = match dirname(&origin.path) {
        "." => "/",
        other => other,
    };
    let dir = format!("{}/", dir.trim_end_matches('/'));

    Ok(format!("{}://{}{}{}", origin.scheme, origin.authority, dir, url))
}

/// Extracts the host a stylesheet must match to count as same-domain.
///
/// Returns `None` when the URL cannot be parsed or has no host.
pub fn site_domain(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
        .filter(|h| !h.is_empty())
}

/// Display name of a stylesheet: the final path segment of its URL.
///
/// Query strings stay attached (`style.css?ver=6.4`), matching what a reader
/// sees in the page source.
pub fn stylesheet_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Validates and normalizes a home URL supplied on the command line.
///
/// Adds an `https://` prefix if no scheme is present, then requires an
/// http/https URL with a host. Logs a warning and returns `None` otherwise.
pub fn normalize_home_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting home URL exceeding maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
                Some(normalized)
            }
            _ => {
                warn!("Rejecting unsupported home URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid home URL: {url}");
            None
        }
    }
}
