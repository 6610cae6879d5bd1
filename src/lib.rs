//! Text cleanup and citation formatting for herbal reference content.
//!
//! The crate is a set of pure string rewrites for a reference display
//! layer: [`strip_html`] renders markup down to plain text,
//! [`truncate_text`] deletes editorial annotations for the concise view,
//! and [`process_medicinal_text`] expands citation shorthand into
//! link-decorated HTML for the detailed view. Each transform is an ordered
//! pipeline of regular-expression rewrite rules; the ordering within each
//! pipeline is part of the contract and documented in the owning module.

#[macro_use]
pub mod macros;

pub mod expand;
pub mod io;
pub mod process;
pub mod strip;
pub mod truncate;

pub use expand::{RATING_RULES, RatingRule, expand_medicinal_text, process_medicinal_text};
pub use io::rewrite;
pub use process::{ProcessOpts, process_text};
pub use strip::{DomRenderer, PassthroughRenderer, TextRenderer, strip_html, strip_html_with};
pub use truncate::{DELETION_RULES, DeletionRule, truncate_text};
