//! HTML stripping for reference content sourced from markup.
//!
//! Entry text sometimes arrives wrapped in HTML. The concise and detailed
//! views both want the rendered plain text, so the markup is parsed with
//! `html5ever` and the text content collected from the resulting DOM.
//! Malformed markup parses best-effort and still yields text.
//!
//! The renderer is an injected capability behind [`TextRenderer`] so that a
//! caller without a markup renderer can substitute the pass-through
//! implementation and accept unstripped input.

use html5ever::driver::ParseOpts;
use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Renders a string of HTML into its plain-text content.
pub trait TextRenderer {
    fn render_to_text(&self, html: &str) -> String;
}

/// The default renderer: parses markup into a DOM and collects its text.
pub struct DomRenderer;

/// Fallback renderer for environments without markup rendering; returns the
/// input unchanged.
pub struct PassthroughRenderer;

impl TextRenderer for DomRenderer {
    fn render_to_text(&self, html: &str) -> String {
        let dom: RcDom =
            parse_document(RcDom::default(), ParseOpts::default()).one(html.to_string());
        node_text(&dom.document)
    }
}

impl TextRenderer for PassthroughRenderer {
    fn render_to_text(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Extracts the text content of a DOM node, collapsing consecutive
/// whitespace to single spaces.
fn node_text(handle: &Handle) -> String {
    let mut out = String::new();
    let mut last_space = false;
    collect_text(handle, &mut out, &mut last_space);
    out.trim().to_string()
}

/// Recursively appends text nodes from `handle` to `out`, tracking whether
/// the previous output was whitespace. Non-rendered subtrees are skipped.
fn collect_text(handle: &Handle, out: &mut String, last_space: &mut bool) {
    match &handle.data {
        NodeData::Text { contents } => {
            for ch in contents.borrow().chars() {
                if ch.is_whitespace() {
                    *last_space = true;
                } else {
                    if *last_space && !out.is_empty() {
                        out.push(' ');
                    }
                    out.push(ch);
                    *last_space = false;
                }
            }
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            if tag.eq_ignore_ascii_case("script")
                || tag.eq_ignore_ascii_case("style")
                || tag.eq_ignore_ascii_case("noscript")
                || tag.eq_ignore_ascii_case("template")
                || tag.eq_ignore_ascii_case("head")
            {
                return;
            }
            for child in handle.children.borrow().iter() {
                collect_text(child, out, last_space);
            }
        }
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out, last_space);
            }
        }
        _ => {}
    }
}

/// Strip HTML markup from `html`, returning its rendered plain text.
///
/// # Examples
///
/// ```
/// use herbtext::strip_html;
/// assert_eq!(strip_html("<p>Holy <em>basil</em></p>"), "Holy basil");
/// ```
#[must_use]
pub fn strip_html(html: &str) -> String {
    strip_html_with(&DomRenderer, html)
}

/// Strip HTML markup using an explicitly supplied renderer.
#[must_use]
pub fn strip_html_with<R: TextRenderer>(renderer: &R, html: &str) -> String {
    renderer.render_to_text(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_markup() {
        assert_eq!(strip_html("<p>Tulsi tea</p>"), "Tulsi tea");
    }

    #[test]
    fn strips_nested_markup() {
        let html = "<div><strong>Ashwagandha</strong> root, <em>dried</em></div>";
        assert_eq!(strip_html(html), "Ashwagandha root, dried");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(strip_html("Neem &amp; turmeric"), "Neem & turmeric");
    }

    #[test]
    fn skips_script_and_style_content() {
        let html = "<style>p { color: red }</style><p>Ginger</p><script>x()</script>";
        assert_eq!(strip_html(html), "Ginger");
    }

    #[test]
    fn malformed_markup_still_yields_text() {
        assert_eq!(strip_html("<p>Licorice <em>root"), "Licorice root");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }

    #[test]
    fn passthrough_renderer_returns_input_unchanged() {
        let html = "<p>unrendered</p>";
        assert_eq!(strip_html_with(&PassthroughRenderer, html), html);
    }
}
