//! Check orchestration.
//!
//! Ties the passes together: HTML scan, same-domain stylesheet discovery,
//! sequential fetch and scan of each stylesheet, aggregation.

use log::{debug, info};

use crate::app::url::site_domain;
use crate::capture::CaptureCache;
use crate::config::NO_CAPTURE_MESSAGE;
use crate::detection::{extract_stylesheet_urls, scan_html, scan_stylesheet};
use crate::error_handling::{categorize_fetch_error, CheckError};
use crate::fetch::Fetcher;
use crate::models::CheckResult;

/// Runs a Google Fonts check over captured HTML and its same-domain stylesheets.
///
/// Stylesheets are fetched one at a time, in the order they appear in the
/// markup. Every attempt counts towards `stylesheets_checked`; a failed fetch
/// is logged at debug level and otherwise leaves no trace in the result.
///
/// # Errors
///
/// Returns `CheckError::InvalidHomeUrl` if `home_url` has no host, since
/// same-domain filtering would be meaningless without one.
///
/// # Example
///
/// ```
/// use fonts_check::{run_check, FetchError};
///
/// let html = r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Roboto">"#;
/// let offline = |url: &str| -> Result<String, FetchError> { Err(FetchError::other(url, "offline")) };
///
/// let result = run_check(html, "https://example.com", &offline).unwrap();
/// assert!(result.found);
/// assert_eq!(result.stylesheets_checked, 0);
/// ```
pub fn run_check<F>(html: &str, home_url: &str, fetcher: &F) -> Result<CheckResult, CheckError>
where
    F: Fetcher + ?Sized,
{
    let mut result = CheckResult::new();

    let domain =
        site_domain(home_url).ok_or_else(|| CheckError::InvalidHomeUrl(home_url.to_string()))?;

    result.merge(scan_html(html));

    let stylesheet_urls = extract_stylesheet_urls(html, home_url, &domain)?;
    for stylesheet_url in &stylesheet_urls {
        result.stylesheets_checked += 1;
        match fetcher.fetch(stylesheet_url) {
            Ok(css) => result.merge(scan_stylesheet(&css, stylesheet_url)),
            Err(e) => {
                debug!(
                    "Skipping stylesheet {} ({}): {}",
                    stylesheet_url,
                    categorize_fetch_error(&e).as_str(),
                    e
                );
            }
        }
    }

    info!(
        "Check of {} finished: {} reference(s) across {} stylesheet(s)",
        domain,
        result.references.len(),
        result.stylesheets_checked
    );
    Ok(result)
}

/// Runs a check on the pending capture, consuming it.
///
/// The result records that captured HTML was used and where it came from.
/// When no capture is pending (or it expired) nothing is scanned and the
/// result carries an explanatory `error` instead.
///
/// # Errors
///
/// Same as [`run_check`].
pub fn check_captured<F>(
    cache: &CaptureCache,
    home_url: &str,
    fetcher: &F,
) -> Result<CheckResult, CheckError>
where
    F: Fetcher + ?Sized,
{
    let Some(page) = cache.take() else {
        info!("No captured page available for {}", home_url);
        let mut result = CheckResult::new();
        result.error = NO_CAPTURE_MESSAGE.to_string();
        return Ok(result);
    };

    let mut result = run_check(&page.html, home_url, fetcher)?;
    result.using_captured = Some(true);
    result.captured_url = Some(page.url);
    Ok(result)
}
