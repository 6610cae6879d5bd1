//! Concise-mode truncation of annotated reference text.
//!
//! Entries in the herb reference carry editorial annotations: "More info"
//! pointers, bracketed citation numbers, and basis markers (`G:`, `B:`, `R:`)
//! introducing internal notes. The concise display view wants none of these.
//! This module deletes them with an ordered list of rewrite rules; each rule
//! assumes the ones before it have already run, so the order of
//! [`DELETION_RULES`] is load-bearing.

use std::sync::LazyLock;

use regex::Regex;

/// A named deletion applied during truncation.
///
/// Every match of `pattern` is removed from the text. Rules are applied in
/// the order they appear in [`DELETION_RULES`].
pub struct DeletionRule {
    pub name: &'static str,
    pub pattern: Regex,
}

/// The truncation pipeline, in application order.
///
/// 1. `more-info` — drops `(More info ...)` and `[More info ...]` spans. Runs
///    first so a basis marker inside such a span cannot cut the text short.
/// 2. `brackets` — drops any remaining `[...]` span: citation numbers,
///    inline notes, internal codes.
/// 3. `basis-cutoff` — at the first standalone `G:`, `B:` or `R:` marker,
///    drops the marker and everything after it. The marker must sit at the
///    start of the text or follow whitespace, so a trailing colon inside a
///    longer word never matches.
/// 4. `edge-artifacts` — trims punctuation runs left dangling at either end
///    by the earlier deletions.
pub static DELETION_RULES: LazyLock<[DeletionRule; 4]> = LazyLock::new(|| {
    [
        DeletionRule {
            name: "more-info",
            pattern: Regex::new(r"(?i)[(\[]\s*More info.*?[)\]]")
                .expect("valid more-info regex"),
        },
        DeletionRule {
            name: "brackets",
            pattern: Regex::new(r"\[[^\]]*\]").expect("valid bracket regex"),
        },
        DeletionRule {
            name: "basis-cutoff",
            pattern: Regex::new(r"(?i)(\s+|^)[GBR]:[\s\S]*")
                .expect("valid basis cut-off regex"),
        },
        DeletionRule {
            name: "edge-artifacts",
            pattern: Regex::new(r"^[\s.,;:\-]+|[\s.,;:\-]+$")
                .expect("valid edge artifact regex"),
        },
    ]
});

/// Truncate annotated text down to its concise display form.
///
/// Applies the [`DELETION_RULES`] in order and trims the result. Empty input
/// yields an empty string. The function is total: text that matches no rule
/// passes through unchanged.
///
/// # Examples
///
/// ```
/// use herbtext::truncate_text;
/// assert_eq!(
///     truncate_text("Good herb [2] R: see trial data"),
///     "Good herb",
/// );
/// ```
#[must_use]
pub fn truncate_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut clean = text.to_string();
    for rule in DELETION_RULES.iter() {
        clean = rule.pattern.replace_all(&clean, "").into_owned();
    }
    clean.trim().to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn rules_run_in_documented_order() {
        let names: Vec<_> = DELETION_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["more-info", "brackets", "basis-cutoff", "edge-artifacts"],
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(truncate_text(""), "");
    }

    #[rstest]
    #[case("Good herb (More info R: skip) R: cut this", "Good herb")]
    #[case("Good herb [More info: R: skip] R: cut this", "Good herb")]
    #[case("Herb [1] is nice G: internal note", "Herb  is nice")]
    #[case("Category B: is great", "Category")]
    #[case("SUGAR: bad", "SUGAR: bad")]
    #[case("r: leading marker", "")]
    #[case("Plain text stays put", "Plain text stays put")]
    fn truncates_per_pipeline(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_text(input), expected);
    }

    #[test]
    fn marker_inside_more_info_does_not_truncate() {
        let out = truncate_text("Bitter tonic (More info: G: grading) for digestion");
        assert_eq!(out, "Bitter tonic  for digestion");
    }

    #[test]
    fn mid_word_marker_is_ignored_without_boundary() {
        assert_eq!(truncate_text("HERB:AL blend"), "HERB:AL blend");
    }

    #[test]
    fn trims_dangling_punctuation() {
        assert_eq!(truncate_text("Calming herb, [3], B: basis"), "Calming herb");
    }

    #[test]
    fn idempotent_on_clean_output() {
        let once = truncate_text("Warming spice [note] R: studies pending");
        assert_eq!(truncate_text(&once), once);
    }
}
