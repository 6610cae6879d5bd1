//! Integration tests for HTML stripping.

use herbtext::{PassthroughRenderer, strip_html, strip_html_with};

mod prelude;
use prelude::*;

#[rstest]
#[case("<p>Tulsi tea</p>", "Tulsi tea")]
#[case("<div><strong>Neem</strong> leaf <em>extract</em></div>", "Neem leaf extract")]
#[case("plain text", "plain text")]
#[case("", "")]
fn test_strip_html_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(strip_html(input), expected);
}

#[test]
fn test_collapses_whitespace_between_elements() {
    let html = "<p>Amla</p>\n   <p>berry</p>";
    assert_eq!(strip_html(html), "Amla berry");
}

#[test]
fn test_unclosed_tags_render_best_effort() {
    assert_eq!(strip_html("<ul><li>Fennel <b>seed"), "Fennel seed");
}

#[test]
fn test_script_content_is_not_rendered() {
    let html = "<p>Cardamom</p><script>alert('x')</script>";
    assert_eq!(strip_html(html), "Cardamom");
}

/// The render-less fallback returns its input unchanged.
#[test]
fn test_passthrough_renderer_is_a_no_op() {
    let html = "<p>unrendered <em>markup</em></p>";
    assert_eq!(strip_html_with(&PassthroughRenderer, html), html);
}
