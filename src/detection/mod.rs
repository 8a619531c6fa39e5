//! Google Fonts reference detection.
//!
//! Pattern passes over raw text rather than a DOM: recall matters more than
//! precision here, and matches may be partial URLs cut at pattern boundaries.
//!
//! - `html`: references in the page markup itself
//! - `stylesheets`: same-domain stylesheet discovery
//! - `css`: references in fetched stylesheet bodies

mod css;
mod html;
mod patterns;
mod stylesheets;

// Re-export public API
pub use css::scan_stylesheet;
pub use html::scan_html;
pub use stylesheets::extract_stylesheet_urls;
