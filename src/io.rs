//! File helpers for rewriting reference content in place.

use std::{fs, path::Path};

use crate::process::{ProcessOpts, process_text};

/// Rewrite a file in place with the selected transforms applied.
///
/// A single trailing newline is removed before processing and restored on
/// write, so repeated rewrites are stable.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, opts: ProcessOpts) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let trimmed = text.strip_suffix('\n').unwrap_or(&text);
    let fixed = process_text(trimmed, opts);
    fs::write(path, fixed + "\n")
}
