//! Option-driven orchestration of the cleanup transforms.
//!
//! The display layer combines the transforms: feed content is stripped of
//! markup first, then rendered either concise (truncated) or detailed
//! (expanded). The application order is fixed: strip, then truncate, then
//! expand.

use crate::{expand::process_medicinal_text, strip::strip_html, truncate::truncate_text};

/// Which transforms to apply, and how.
#[derive(Clone, Copy, Debug)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "callers toggle four independent transforms"
)]
pub struct ProcessOpts {
    /// Strip HTML markup before any other transform.
    pub strip: bool,
    /// Truncate annotations down to the concise display form.
    pub concise: bool,
    /// Expand citation shorthand into linked HTML.
    pub expand: bool,
    /// Expand book citation shorthand (only meaningful with `expand`).
    pub books: bool,
}

impl Default for ProcessOpts {
    fn default() -> Self {
        Self {
            strip: false,
            concise: false,
            expand: false,
            books: true,
        }
    }
}

/// Apply the selected transforms to `text` in their fixed order.
#[must_use]
pub fn process_text(text: &str, opts: ProcessOpts) -> String {
    let mut out = text.to_string();
    if opts.strip {
        out = strip_html(&out);
    }
    if opts.concise {
        out = truncate_text(&out);
    }
    if opts.expand {
        out = process_medicinal_text(&out, opts.books);
    }
    out
}
