//! # Block Tokenizing
//!
//! A single forward pass over the document's lines that emits one
//! `BlockToken` per block.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockToken`, `BlockKind`, `TokenMeta`)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence, Table, ...)
//! - **`open`**: `try_open` precedence dispatch for detecting block openers
//! - **`tokenizer`**: `BlockTokenizer` that consumes lines into tokens
//!
//! ## Key Invariants
//!
//! - The line cursor strictly advances on every step
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Tokens are emitted in document order with 1-based start lines

pub mod kinds;
pub mod open;
pub mod tokenizer;
pub mod types;

pub use tokenizer::BlockTokenizer;
pub use types::{BlockKind, BlockToken, CodeType, ListItem, TokenMeta};
