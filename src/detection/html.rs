//! Page HTML scanning.
//!
//! Runs four passes over the raw markup, in this order:
//! 1. `<link href>` attributes
//! 2. inline `<style>` blocks (`@font-face`, then any `url()`, then `@import`)
//! 3. inline `<script>` blocks (first host occurrence per block)
//! 4. `<script src>` attributes

use log::debug;

use super::patterns::{
    captures_group, FONT_FACE_URL, HOST_RUN, INLINE_IMPORT, INLINE_URL, LINK_HREF, SCRIPT_BLOCK,
    SCRIPT_SRC, STYLE_BLOCK,
};
use crate::models::{Reference, ReferenceKind};

/// Scans page HTML for Google Fonts references.
///
/// Pure and deterministic; empty input yields an empty vector.
pub fn scan_html(html: &str) -> Vec<Reference> {
    let mut references = Vec::new();

    scan_link_tags(html, &mut references);
    for block in captures_group(&STYLE_BLOCK, html) {
        references.extend(scan_style_block(block));
    }
    scan_inline_scripts(html, &mut references);
    scan_script_sources(html, &mut references);

    debug!("HTML scan found {} reference(s)", references.len());
    references
}

fn scan_link_tags(html: &str, references: &mut Vec<Reference>) {
    for url in captures_group(&LINK_HREF, html) {
        references.push(Reference::new(
            ReferenceKind::HtmlLink,
            url,
            "HTML: Link tag",
            "Found in <link> tag in page HTML",
        ));
    }
}

/// Scans the content of one `<style>` block.
///
/// The generic `url()` and `@import` passes skip a URL already recorded for
/// this block (exact string match). Nothing is shared between blocks, so the
/// same URL in two blocks is reported twice.
fn scan_style_block(content: &str) -> Vec<Reference> {
    let mut block_refs: Vec<Reference> = Vec::new();

    for font_url in captures_group(&FONT_FACE_URL, content).map(str::trim) {
        if font_url.is_empty() {
            continue;
        }
        block_refs.push(Reference::new(
            ReferenceKind::HtmlInlineStyle,
            font_url,
            "HTML: @font-face in inline style",
            "Found in @font-face src: url() declaration in inline <style> tag",
        ));
    }

    for font_url in captures_group(&INLINE_URL, content).map(str::trim) {
        if font_url.is_empty() || already_recorded(&block_refs, font_url) {
            continue;
        }
        block_refs.push(Reference::new(
            ReferenceKind::HtmlInlineStyle,
            font_url,
            "HTML: Inline style tag",
            "Found in url() declaration in inline <style> tag",
        ));
    }

    for import_url in captures_group(&INLINE_IMPORT, content).map(str::trim) {
        if import_url.is_empty() || already_recorded(&block_refs, import_url) {
            continue;
        }
        block_refs.push(Reference::new(
            ReferenceKind::HtmlInlineStyle,
            import_url,
            "HTML: @import in inline style",
            "Found in @import statement in inline <style> tag",
        ));
    }

    block_refs
}

fn already_recorded(references: &[Reference], url: &str) -> bool {
    references.iter().any(|r| r.url == url)
}

fn scan_inline_scripts(html: &str, references: &mut Vec<Reference>) {
    for content in captures_group(&SCRIPT_BLOCK, html) {
        // One reference per block, however many occurrences it holds
        if let Some(m) = HOST_RUN.find(content) {
            references.push(Reference::new(
                ReferenceKind::HtmlJavascript,
                m.as_str(),
                "HTML: JavaScript reference",
                "Found in inline <script> tag in page HTML",
            ));
        }
    }
}

fn scan_script_sources(html: &str, references: &mut Vec<Reference>) {
    for url in captures_group(&SCRIPT_SRC, html) {
        references.push(Reference::new(
            ReferenceKind::HtmlScriptSrc,
            url,
            "HTML: Script src attribute",
            "Found in <script src> attribute in page HTML",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(refs: &[Reference]) -> Vec<ReferenceKind> {
        refs.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_empty_html() {
        assert!(scan_html("").is_empty());
    }

    #[test]
    fn test_link_tag_keeps_full_href() {
        let html = r#"<link href="https://fonts.googleapis.com/css?family=Roboto">"#;
        let refs = scan_html(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::HtmlLink);
        assert_eq!(refs[0].url, "https://fonts.googleapis.com/css?family=Roboto");
        assert_eq!(refs[0].context, "Found in <link> tag in page HTML");
    }

    #[test]
    fn test_link_tag_case_insensitive() {
        let html = r#"<LINK REL='preconnect' HREF='//FONTS.GSTATIC.COM'>"#;
        let refs = scan_html(html);
        assert_eq!(kinds(&refs), vec![ReferenceKind::HtmlLink]);
        assert_eq!(refs[0].url, "//FONTS.GSTATIC.COM");
    }

    #[test]
    fn test_unrelated_link_ignored() {
        let html = r#"<link rel="stylesheet" href="/wp-content/style.css">"#;
        assert!(scan_html(html).is_empty());
    }

    #[test]
    fn test_font_face_not_duplicated_by_url_pass() {
        let html = "<style>@font-face{src:url('https://fonts.gstatic.com/s/x.woff2')}</style>";
        let refs = scan_html(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::HtmlInlineStyle);
        assert_eq!(refs[0].url, "https://fonts.gstatic.com/s/x.woff2");
        assert_eq!(refs[0].source, "HTML: @font-face in inline style");
    }

    #[test]
    fn test_font_face_in_two_blocks_reported_twice() {
        let block = "<style>@font-face{src:url('https://fonts.gstatic.com/s/x.woff2')}</style>";
        let html = format!("{block}\n<p>text</p>\n{block}");
        let refs = scan_html(&html);
        assert_eq!(refs.len(), 2);
        assert!(refs
            .iter()
            .all(|r| r.url == "https://fonts.gstatic.com/s/x.woff2"));
    }

    #[test]
    fn test_url_dedupe_is_per_style_block() {
        let block = "<style>.hero{background:url(https://fonts.gstatic.com/a.png)}</style>";
        let html = format!("{block}\n<p>text</p>\n{block}");
        let refs = scan_html(&html);
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(|r| r.source == "HTML: Inline style tag"
            && r.url == "https://fonts.gstatic.com/a.png"));
    }

    #[test]
    fn test_import_matching_url_in_same_block_skipped() {
        let html = "<style>@import 'https://fonts.googleapis.com/css?family=Lato'; \
                    .x{background:url('https://fonts.googleapis.com/css?family=Lato')}</style>";
        let refs = scan_html(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].source, "HTML: Inline style tag");
        assert_eq!(refs[0].url, "https://fonts.googleapis.com/css?family=Lato");
    }

    #[test]
    fn test_generic_url_in_style_block() {
        let html = r#"<style type="text/css">
            .hero { background: url("https://fonts.gstatic.com/img/bg.png"); }
        </style>"#;
        let refs = scan_html(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].source, "HTML: Inline style tag");
        assert_eq!(refs[0].url, "https://fonts.gstatic.com/img/bg.png");
    }

    #[test]
    fn test_quoted_import_in_style_block() {
        let html =
            "<style>@import 'https://fonts.googleapis.com/css2?family=Lato'; body{}</style>";
        let refs = scan_html(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].source, "HTML: @import in inline style");
        assert_eq!(refs[0].url, "https://fonts.googleapis.com/css2?family=Lato");
    }

    #[test]
    fn test_import_url_form_reports_both_spellings() {
        // The @import capture keeps the url( ) wrapper, so it is a different
        // string from the url() capture and both are kept.
        let html = "<style>@import url(https://fonts.googleapis.com/css2?family=Lato);</style>";
        let refs = scan_html(html);
        let urls: Vec<&str> = refs.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://fonts.googleapis.com/css2?family=Lato",
                "url(https://fonts.googleapis.com/css2?family=Lato)",
            ]
        );
    }

    #[test]
    fn test_one_javascript_reference_per_script_block() {
        let html = r#"<script>
            WebFont.load({ google: { api: 'https://fonts.googleapis.com/css' } });
            var fallback = "https://fonts.gstatic.com/s/roboto.woff2";
        </script>"#;
        let refs = scan_html(html);
        assert_eq!(kinds(&refs), vec![ReferenceKind::HtmlJavascript]);
        assert_eq!(refs[0].url, "fonts.googleapis.com/css");
    }

    #[test]
    fn test_script_src_attribute() {
        let html = r#"<script src="https://fonts.googleapis.com/webfont.js"></script>"#;
        let refs = scan_html(html);
        assert_eq!(kinds(&refs), vec![ReferenceKind::HtmlScriptSrc]);
        assert_eq!(refs[0].url, "https://fonts.googleapis.com/webfont.js");
    }

    #[test]
    fn test_pass_order() {
        let html = r#"<html><head>
            <script src="https://fonts.googleapis.com/loader.js"></script>
            <script>var f = 'fonts.gstatic.com/s/a.woff2';</script>
            <style>body{background:url(https://fonts.gstatic.com/b.png)}</style>
            <link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Inter">
        </head></html>"#;
        let refs = scan_html(html);
        assert_eq!(
            kinds(&refs),
            vec![
                ReferenceKind::HtmlLink,
                ReferenceKind::HtmlInlineStyle,
                ReferenceKind::HtmlJavascript,
                ReferenceKind::HtmlScriptSrc,
            ]
        );
    }
}
