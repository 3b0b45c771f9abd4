//! # Inline Scanning
//!
//! Extraction of links, images, code spans, emphasis, footnote references
//! and embedded tags from the content of textual blocks.
//!
//! ## Architecture
//!
//! Inline scanning is separate from block tokenizing and operates over the
//! content of inline-eligible tokens (headers, paragraphs, blockquotes).
//! Reference-style links and footnotes resolve against the document-wide
//! tables built before tokenizing.
//!
//! ## Modules
//!
//! - **`types`**: `InlineResult` and its element types
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`scanner`**: `scan_inline()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[not](a-link)` `` yields one code span
//! and no link.

pub mod cursor;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use scanner::{scan_inline, scan_text};
pub use types::{FootnoteUse, ImageLink, InlineResult, TextLink};
