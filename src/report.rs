//! Report rendering.
//!
//! Turns a `CheckResult` into the text written to stdout: a short human
//! summary, or the serialized result for machine consumers.

use std::fmt::Write;

use crate::models::CheckResult;

/// Renders a human-readable summary of a check.
///
/// `home_url` names the tested page unless the result carries a
/// `captured_url`, which takes precedence.
///
/// # Example
///
/// ```
/// use fonts_check::{report, CheckResult};
///
/// let text = report::render_plain(&CheckResult::new(), "https://example.com/");
/// assert!(text.starts_with("No Google Fonts detected!"));
/// ```
pub fn render_plain(result: &CheckResult, home_url: &str) -> String {
    let mut out = String::new();
    let tested = result.captured_url.as_deref().unwrap_or(home_url);

    // writeln! into a String cannot fail
    if result.found {
        let _ = writeln!(out, "Google Fonts detected!");
        let _ = writeln!(
            out,
            "Found {} reference(s) across {} stylesheet(s).",
            result.references.len(),
            result.stylesheets_checked
        );
    } else {
        let _ = writeln!(out, "No Google Fonts detected!");
        let _ = writeln!(
            out,
            "Checked {} stylesheet(s) and found no Google Fonts references.",
            result.stylesheets_checked
        );
    }

    if result.using_captured == Some(true) {
        let _ = writeln!(out, "Tested page (captured): {}", tested);
    } else {
        let _ = writeln!(out, "Tested page: {}", tested);
    }

    for (i, reference) in result.references.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} [{}]", i + 1, reference.source, reference.kind);
        let _ = writeln!(out, "   {}", reference.context);
        let _ = writeln!(out, "   {}", reference.url);
    }

    if !result.error.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Error: {}", result.error);
    }

    out
}

/// Serializes the result as pretty-printed JSON.
///
/// # Errors
///
/// Propagates `serde_json` serialization errors.
pub fn render_json(result: &CheckResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reference, ReferenceKind};

    fn found_result() -> CheckResult {
        let mut result = CheckResult::new();
        result.merge(vec![Reference::new(
            ReferenceKind::CssImport,
            "https://fonts.googleapis.com/css?family=Lato",
            "CSS: @import in style.css",
            "Found @import statement in stylesheet: style.css",
        )]);
        result.stylesheets_checked = 2;
        result
    }

    #[test]
    fn test_render_plain_found() {
        let text = render_plain(&found_result(), "https://example.com/");
        assert!(text.starts_with("Google Fonts detected!\n"));
        assert!(text.contains("Found 1 reference(s) across 2 stylesheet(s)."));
        assert!(text.contains("Tested page: https://example.com/"));
        assert!(text.contains("1. CSS: @import in style.css [css_import]"));
        assert!(text.contains("   https://fonts.googleapis.com/css?family=Lato"));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_render_plain_clean() {
        let mut result = CheckResult::new();
        result.stylesheets_checked = 3;
        let text = render_plain(&result, "https://example.com/");
        assert!(text.starts_with("No Google Fonts detected!\n"));
        assert!(text.contains("Checked 3 stylesheet(s) and found no Google Fonts references."));
    }

    #[test]
    fn test_render_plain_prefers_captured_url() {
        let mut result = found_result();
        result.using_captured = Some(true);
        result.captured_url = Some("https://example.com/shop/".into());
        let text = render_plain(&result, "https://example.com/");
        assert!(text.contains("Tested page (captured): https://example.com/shop/"));
    }

    #[test]
    fn test_render_plain_error_line() {
        let mut result = CheckResult::new();
        result.error = "No captured page".into();
        let text = render_plain(&result, "https://example.com/");
        assert!(text.trim_end().ends_with("Error: No captured page"));
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&found_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["references"][0]["type"], "css_import");
    }
}
