pub mod analyzer;
pub mod document;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use analyzer::*;
pub use document::{DocumentError, MarkdownDocument};
pub use io::IoError;
pub use parsing::{
    BlockMode, FenceMode, ParseError, ParseOptions, ParsedDoc,
    blocks::{BlockKind, BlockToken, CodeType, ListItem, TokenMeta},
    inline::{FootnoteUse, ImageLink, InlineResult, TextLink, scan_inline, scan_text},
    parse, parse_with,
    references::{FootnoteTable, ReferenceTable},
};
