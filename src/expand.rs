//! Detailed-mode expansion of citation shorthand into HTML fragments.
//!
//! Reference entries abbreviate their sources: book citations as
//! `Lad, p. 42`, research citations as bracketed spans opened by a pin or
//! microscope glyph, and efficacy ratings as compact codes such as `Ayur:E`
//! or `Sci:S`. The detailed display view expands all of these into
//! human-readable markup and links identifiers to their literature
//! databases.
//!
//! The stages run in a fixed order: citation normalisation must precede
//! linkification so identifiers are already in bare `PMCID:`/`PMID:` form
//! when the link rules scan for them, and rating expansion runs before the
//! link rules so `Sci:`/`Ayur:` tokens are never misread as other markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A rating shorthand and its display expansion.
///
/// Keys are unique and matched as whole word-boundary-delimited tokens, so
/// `Sci:S` never matches inside `Sci:Strong`.
pub struct RatingRule {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// Ayurvedic and scientific efficacy ratings.
pub const RATING_RULES: [RatingRule; 7] = [
    RatingRule { key: "Ayur:E", label: "Ayurvedic", value: "Excellent" },
    RatingRule { key: "Ayur:G", label: "Ayurvedic", value: "Good" },
    RatingRule { key: "Ayur:N", label: "Ayurvedic", value: "Nominal" },
    RatingRule {
        key: "Sci:S",
        label: "Scientific studies",
        value: "Strong Clinical Support",
    },
    RatingRule {
        key: "Sci:M",
        label: "Scientific studies",
        value: "Moderate Clinical Support",
    },
    RatingRule { key: "Sci:L", label: "Scientific studies", value: "Limited" },
    RatingRule {
        key: "Sci:N",
        label: "Scientific studies",
        value: "None or Contraindicated",
    },
];

static LAD_RE: LazyLock<Regex> =
    lazy_regex!(r"(?i)Lad,\s*p\.\s*(\d+)", "valid Lad citation regex");

static CCRAS_RE: LazyLock<Regex> =
    lazy_regex!(r"(?i)CCRAS,\s*p\.\s*(\d+)", "valid CCRAS citation regex");

static RESEARCH_RE: LazyLock<Regex> = lazy_regex!(
    r#"(?i)\[(?:📌|🔬)\s*"?(?:[^"]*?)?((?:PMCID:\s*PMC\d+)|(?:PMID:\s*\d+))"?.?\]"#,
    "valid research citation regex",
);

static WRAPPER_OPEN_RE: LazyLock<Regex> =
    lazy_regex!(r"\[(?:📌|🔬)\s*", "valid citation wrapper regex");

// Each link rule also matches whole existing anchors so that identifiers
// already linkified are skipped rather than wrapped twice.
static PMCID_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)<a [^>]*>[^<]*</a>|(PMCID:\s*)(PMC\d+)",
    "valid PMCID link regex",
);

static PMID_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)<a [^>]*>[^<]*</a>|(PMID:\s*)(\d+)",
    "valid PMID link regex",
);

/// Expansion of the rating table into compiled patterns and replacements.
///
/// The key's colon admits optional whitespace (`Ayur: E` is the same rating
/// as `Ayur:E`) and both ends are anchored to word boundaries.
static RATING_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    RATING_RULES
        .iter()
        .map(|rule| {
            let key = rule.key.replace(':', r":\s*");
            let pattern =
                Regex::new(&format!(r"(?i)\b{key}\b")).expect("valid rating regex");
            let replacement = format!(
                "<strong>{}:</strong> <span class=\"font-bold italic\">{}</span>",
                rule.label, rule.value,
            );
            (pattern, replacement)
        })
        .collect()
});

fn expand_book_citations(content: &str) -> String {
    let content = LAD_RE.replace_all(
        content,
        "The Complete Book of Ayurvedic Home Remedies, Vasant Lad (Page ${1})",
    );
    CCRAS_RE
        .replace_all(&content, "CCRA, Ministry of Health (Page ${1})")
        .into_owned()
}

/// Collapse a glyph-wrapped research citation to `Paper: <identifier>`.
///
/// A quoted title, when present, must enclose the identifier for the span to
/// match; the title text is discarded. Spans without a recognisable
/// identifier are left for [`strip_citation_wrappers`].
fn normalise_research_citations(content: &str) -> String {
    RESEARCH_RE.replace_all(content, "Paper: ${1}").into_owned()
}

/// Degrade any remaining glyph-wrapped span to plain inline text.
fn strip_citation_wrappers(content: &str) -> String {
    WRAPPER_OPEN_RE.replace_all(content, "").replace(']', "")
}

fn expand_ratings(content: &str) -> String {
    let mut content = content.to_string();
    for (pattern, replacement) in RATING_PATTERNS.iter() {
        content = pattern
            .replace_all(&content, replacement.as_str())
            .into_owned();
    }
    content
}

/// Wrap matched identifiers in an anchor, leaving existing anchors verbatim.
fn linkify(content: &str, pattern: &Regex, base: &str) -> String {
    pattern
        .replace_all(content, |caps: &Captures<'_>| {
            match (caps.get(1), caps.get(2)) {
                (Some(prefix), Some(id)) => format!(
                    "<a href=\"{base}{id}/\" target=\"_blank\" \
                     class=\"text-indigo-600 hover:underline\">{prefix}{id}</a>",
                    prefix = prefix.as_str(),
                    id = id.as_str(),
                ),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Expand citation shorthand in `text` into a display-ready HTML fragment.
///
/// Book citations are only expanded when `expand_books` is `true`; every
/// other stage always runs. Empty input yields an empty string, and text
/// matching no stage passes through unchanged.
///
/// # Examples
///
/// ```
/// use herbtext::process_medicinal_text;
/// let out = process_medicinal_text("Ayur:E rating", true);
/// assert!(out.contains("<strong>Ayurvedic:</strong>"));
/// ```
#[must_use]
pub fn process_medicinal_text(text: &str, expand_books: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut content = text.to_string();
    if expand_books {
        content = expand_book_citations(&content);
    }
    content = normalise_research_citations(&content);
    content = strip_citation_wrappers(&content);
    content = expand_ratings(&content);
    content = linkify(
        &content,
        &PMCID_RE,
        "https://www.ncbi.nlm.nih.gov/pmc/articles/",
    );
    content = linkify(&content, &PMID_RE, "https://pubmed.ncbi.nlm.nih.gov/");
    content.replace('\n', "<br />")
}

/// [`process_medicinal_text`] with book expansion enabled.
#[must_use]
pub fn expand_medicinal_text(text: &str) -> String {
    process_medicinal_text(text, true)
}
