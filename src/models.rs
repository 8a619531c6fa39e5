//! Report data structures.
//!
//! - `ReferenceKind`: the detection channel a reference came from
//! - `Reference`: one detected Google Fonts dependency
//! - `CheckResult`: the aggregate report for one check run

use serde::{Deserialize, Serialize};

/// Detection channel of a reference.
///
/// Serialized with the snake_case tags consumers of the report key on
/// (`html_link`, `css_import`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// `href` of a `<link>` tag
    HtmlLink,
    /// `url()` or `@import` inside an inline `<style>` block
    HtmlInlineStyle,
    /// Host occurrence inside an inline `<script>` block
    HtmlJavascript,
    /// `src` of a `<script>` tag
    HtmlScriptSrc,
    /// `@import` in a fetched stylesheet
    CssImport,
    /// `url()` in a fetched stylesheet
    CssUrl,
    /// Any other host occurrence in a fetched stylesheet
    CssOther,
}

impl ReferenceKind {
    /// The serialized tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceKind::HtmlLink => "html_link",
            ReferenceKind::HtmlInlineStyle => "html_inline_style",
            ReferenceKind::HtmlJavascript => "html_javascript",
            ReferenceKind::HtmlScriptSrc => "html_script_src",
            ReferenceKind::CssImport => "css_import",
            ReferenceKind::CssUrl => "css_url",
            ReferenceKind::CssOther => "css_other",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected occurrence of a Google Fonts dependency.
///
/// `url` is whatever the pattern captured and may be partial, e.g. a bare
/// `fonts.gstatic.com/s/...` without scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Detection channel
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    /// The matched font-service URL
    pub url: String,
    /// Short human label
    pub source: String,
    /// Where the match was found
    pub context: String,
}

impl Reference {
    /// Creates a reference.
    pub fn new(
        kind: ReferenceKind,
        url: impl Into<String>,
        source: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            url: url.into(),
            source: source.into(),
            context: context.into(),
        }
    }
}

/// Aggregate report for one check run.
///
/// `found` always equals `!references.is_empty()`; references are only added
/// through [`CheckResult::merge`], which keeps the two in step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether any reference was found
    pub found: bool,
    /// References in discovery order
    pub references: Vec<Reference>,
    /// Same-domain stylesheets the check attempted to fetch
    pub stylesheets_checked: usize,
    /// Caller-supplied explanation, empty when there is none
    pub error: String,
    /// Whether the HTML came from a real-browser capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub using_captured: Option<bool>,
    /// Page the captured HTML was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_url: Option<String>,
}

impl CheckResult {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends references in order and updates `found`.
    pub fn merge(&mut self, references: Vec<Reference>) {
        self.references.extend(references);
        self.found = !self.references.is_empty();
    }

    /// Number of references of the given kind.
    pub fn count_of(&self, kind: ReferenceKind) -> usize {
        self.references.iter().filter(|r| r.kind == kind).count()
    }
}
