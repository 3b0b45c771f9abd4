//! # Block Kinds
//!
//! Each block type owns its syntax: delimiters, marker constants and the
//! predicates that recognise its lines. The tokenizer calls these; it never
//! hardcodes `#`, `>` or a backtick fence.

pub mod block_quote;
pub mod code_fence;
pub mod frontmatter;
pub mod heading;
pub mod html_block;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceOpen};
pub use frontmatter::Frontmatter;
pub use heading::{AtxHeading, SetextHeading};
pub use html_block::{HtmlBlock, HtmlStart};
pub use indented_code::IndentedCode;
pub use list::{ListKind, ListMarker, TaskMarker};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
