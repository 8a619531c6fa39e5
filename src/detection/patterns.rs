//! Compiled patterns shared by the HTML and stylesheet scanners.
//!
//! Every pattern is case-insensitive and embeds the font host pattern from
//! `config::GOOGLE_FONTS_HOST_PATTERN`. Block patterns (`<style>`, `<script>`,
//! `@font-face`) also let `.` cross newlines.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::GOOGLE_FONTS_HOST_PATTERN as HOST;

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("Failed to compile {name} pattern - this is a bug: {e}"))
}

/// `<link ... href="...">` whose href mentions a font host. Group 1: href.
pub(crate) static LINK_HREF: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "link href",
        &format!(r#"(?i)<link[^>]+href=["']([^"']*{HOST}[^"']*)["'][^>]*>"#),
    )
});

/// `<script ... src="...">` whose src mentions a font host. Group 1: src.
pub(crate) static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "script src",
        &format!(r#"(?i)<script[^>]+src=["']([^"']*{HOST}[^"']*)["'][^>]*>"#),
    )
});

/// Inline `<style>` block. Group 1: block content.
pub(crate) static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile("style block", r"(?is)<style[^>]*>(.*?)</style>"));

/// Inline `<script>` block. Group 1: block content.
pub(crate) static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile("script block", r"(?is)<script[^>]*>(.*?)</script>"));

/// `@font-face { ... src ... url(...) ... }` with a font host target. Group 1: target.
pub(crate) static FONT_FACE_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "font-face",
        &format!(
            r#"(?is)@font-face\s*\{{[^}}]*src[^}}]*url\(["']?([^"')]*{HOST}[^"')]*)["']?\)[^}}]*\}}"#
        ),
    )
});

/// `url(...)` in an inline style block. Group 1: target, may be empty before the host.
pub(crate) static INLINE_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "inline url()",
        &format!(r#"(?i)url\(["']?([^"')]*{HOST}[^"')]*)["']?\)"#),
    )
});

/// `@import` in an inline style block. Group 1: target up to `;` or a quote.
pub(crate) static INLINE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "inline @import",
        &format!(r#"(?i)@import\s+["']?([^"';]*{HOST}[^"';]*)["']?"#),
    )
});

/// `@import` in a fetched stylesheet. Group 1 needs at least one character before the host.
pub(crate) static CSS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "stylesheet @import",
        &format!(r#"(?i)@import\s+["']?([^"';]+{HOST}[^"';]*)["']?"#),
    )
});

/// `url(...)` in a fetched stylesheet. Group 1 needs at least one character before the host.
pub(crate) static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "stylesheet url()",
        &format!(r#"(?i)url\(["']?([^"')]+{HOST}[^"')]*)["']?\)"#),
    )
});

/// Bare host run, stopping at a quote, whitespace or `)`. Whole match is the URL.
pub(crate) static HOST_RUN: LazyLock<Regex> = LazyLock::new(|| {
    compile("host run", &format!(r#"(?i){HOST}[^"'\s)]*"#))
});

/// `<link ... rel="stylesheet" ... href="...">`, `rel` before `href` only. Group 1: href.
pub(crate) static STYLESHEET_LINK: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "stylesheet link",
        r#"(?i)<link[^>]+rel=["']stylesheet["'][^>]+href=["']([^"']+)["'][^>]*>"#,
    )
});

/// Iterates group 1 of every match of `re` in `text`.
pub(crate) fn captures_group<'t>(
    re: &'static Regex,
    text: &'t str,
) -> impl Iterator<Item = &'t str> + 't {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
