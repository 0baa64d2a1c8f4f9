//! Markdown rendering for post and comment bodies.
//!
//! DESIGN
//! ======
//! Rendering happens client-side from the raw markdown the backend stores, so
//! post content stays editable as written. The backend sanitizes submitted
//! content; this module only converts it to an HTML fragment.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Options, Parser, html};

/// Render markdown `source` to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
