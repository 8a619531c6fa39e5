//! Same-domain stylesheet discovery.

use log::debug;

use super::patterns::{captures_group, STYLESHEET_LINK};
use crate::app::url::{resolve, site_domain};
use crate::error_handling::ResolveError;

/// Extracts the absolute URLs of same-domain stylesheets linked from `html`.
///
/// Only `<link>` tags with `rel="stylesheet"` written before `href` are
/// matched. Each href is resolved against `home_url` and kept when its host
/// equals `site_domain` exactly. Duplicates are dropped, first-seen order is
/// kept.
///
/// # Errors
///
/// Returns `ResolveError` when a relative href has to be resolved against a
/// `home_url` without a host.
pub fn extract_stylesheet_urls(
    html: &str,
    home_url: &str,
    site_domain_name: &str,
) -> Result<Vec<String>, ResolveError> {
    let mut urls: Vec<String> = Vec::new();

    for href in captures_group(&STYLESHEET_LINK, html) {
        let absolute = resolve(href, home_url)?;
        match site_domain(&absolute) {
            Some(host) if host == site_domain_name => {
                if !urls.contains(&absolute) {
                    urls.push(absolute);
                }
            }
            Some(host) => debug!("Skipping third-party stylesheet on {host}: {absolute}"),
            None => debug!("Skipping stylesheet with unparseable URL: {absolute}"),
        }
    }

    debug!("Found {} same-domain stylesheet(s)", urls.len());
    Ok(urls)
}
