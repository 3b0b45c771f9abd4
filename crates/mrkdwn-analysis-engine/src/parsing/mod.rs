//! # Parsing
//!
//! Text to annotated token stream in three stages:
//!
//! 1. **References** (`references`): one pre-pass over the full text builds
//!    the link-reference and footnote tables, so references resolve to
//!    definitions that appear later in the document.
//! 2. **Blocks** (`blocks`): the line array is tokenized into `BlockToken`s
//!    by a forward-only state machine.
//! 3. **Inline** (`inline`): headers, paragraphs and blockquotes are scanned
//!    for links, images, code spans, emphasis, footnotes and embedded tags.
//!
//! Patterns are compiled once and shared read-only, so independent documents
//! can be parsed from multiple threads.

pub mod blocks;
pub mod error;
pub mod inline;
pub mod lines;
pub mod options;
pub mod references;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use error::ParseError;
pub use options::{BlockMode, FenceMode, ParseOptions};

use blocks::{BlockToken, BlockTokenizer};
use lines::Lines;
use references::{FootnoteTable, ReferenceTable, build_tables};

/// The output of a parse: tokens in document order plus the reference tables
/// they resolve against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDoc {
    pub tokens: Vec<BlockToken>,
    pub references: ReferenceTable,
    pub footnotes: FootnoteTable,
}

impl ParsedDoc {
    /// Fills `inline` on every token that carries inline content.
    pub fn annotate_inline(&mut self) {
        for token in &mut self.tokens {
            if token.kind.carries_inline() {
                token.inline = Some(inline::scan_inline(
                    token,
                    &self.references,
                    &self.footnotes,
                ));
            }
        }
    }
}

/// Parses `text` with the default options (strict fences, full grammar).
pub fn parse(text: &str) -> Result<ParsedDoc, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Parses `text` into tokens without inline annotation.
///
/// # Errors
/// [`ParseError::UnclosedFence`] when a fenced code block never closes and
/// `options.fences` is [`FenceMode::Strict`].
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<ParsedDoc, ParseError> {
    let (references, footnotes) = build_tables(text);
    let lines = Lines::split(text);
    let tokens = BlockTokenizer::new(&lines, *options).run()?;
    Ok(ParsedDoc {
        tokens,
        references,
        footnotes,
    })
}
