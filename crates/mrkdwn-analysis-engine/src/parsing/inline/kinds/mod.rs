//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: inline, reference and collapsed links and images
//! - **`Emphasis`**: bold and italic spans, with the intraword underscore rule
//! - **`FootnoteRef`**: `[^id]` references
//! - **`HtmlTag`**: embedded tags, via a structural HTML parse
//!
//! The scanner calls these; it never hardcodes a delimiter or a pattern.

pub mod code_span;
pub mod emphasis;
pub mod footnote;
pub mod html_tag;
pub mod link;

pub use code_span::{CodeSpan, CodeSpanMatch};
pub use emphasis::{Emphasis, EmphasisMatch};
pub use footnote::{FootnoteMatch, FootnoteRef};
pub use html_tag::HtmlTag;
pub use link::{Link, LinkMatch, LinkTarget};
