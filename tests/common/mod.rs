//! Utility helpers shared across integration tests.

/// Build the anchor markup the expander emits for a literature-database
/// identifier.
#[must_use]
pub fn expected_anchor(url: &str, visible: &str) -> String {
    format!(
        "<a href=\"{url}\" target=\"_blank\" \
         class=\"text-indigo-600 hover:underline\">{visible}</a>"
    )
}
