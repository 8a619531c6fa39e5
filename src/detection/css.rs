//! Stylesheet scanning.

use log::debug;

use super::patterns::{captures_group, CSS_IMPORT, CSS_URL, HOST_RUN};
use crate::app::url::stylesheet_name;
use crate::models::{Reference, ReferenceKind};

/// Scans the body of a fetched stylesheet for Google Fonts references.
///
/// `stylesheet_url` only supplies the display name embedded in each
/// reference's `source` and `context`.
///
/// The final pass reports bare host occurrences not covered by `@import` or
/// `url()`. Unlike the HTML scanner it dedupes by substring: a candidate is
/// dropped when it contains, or is contained in, any URL already recorded for
/// this stylesheet.
pub fn scan_stylesheet(css: &str, stylesheet_url: &str) -> Vec<Reference> {
    let name = stylesheet_name(stylesheet_url);
    let mut references = Vec::new();

    for import_url in captures_group(&CSS_IMPORT, css) {
        references.push(Reference::new(
            ReferenceKind::CssImport,
            import_url.trim(),
            format!("CSS: @import in {name}"),
            format!("Found @import statement in stylesheet: {name}"),
        ));
    }

    for font_url in captures_group(&CSS_URL, css) {
        references.push(Reference::new(
            ReferenceKind::CssUrl,
            font_url.trim(),
            format!("CSS: url() in {name}"),
            format!("Found url() reference in stylesheet: {name}"),
        ));
    }

    let mut candidates: Vec<&str> = Vec::new();
    for m in HOST_RUN.find_iter(css) {
        if !candidates.contains(&m.as_str()) {
            candidates.push(m.as_str());
        }
    }

    for candidate in candidates {
        let covered = references
            .iter()
            .any(|r| r.url.contains(candidate) || candidate.contains(r.url.as_str()));
        if covered {
            continue;
        }
        references.push(Reference::new(
            ReferenceKind::CssOther,
            candidate,
            format!("CSS: Other reference in {name}"),
            format!("Found Google Fonts reference in stylesheet: {name}"),
        ));
    }

    debug!(
        "Stylesheet {} yielded {} reference(s)",
        stylesheet_url,
        references.len()
    );
    references
}
