use serde::Serialize;

use crate::parsing::blocks::{BlockKind, CodeType, ListItem};

/// An inline element paired with the line of the token it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located<T> {
    pub line: usize,
    #[serde(flatten)]
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub level: u8,
    pub text: String,
    pub line: usize,
}

/// Content of a paragraph, blockquote, HTML block or frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEntry {
    pub content: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub language: Option<String>,
    pub code_type: CodeType,
    pub content: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub items: Vec<ListItem>,
    pub line: usize,
}

/// A task item; `line` is the line of the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskEntry {
    pub text: String,
    pub checked: bool,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub line: usize,
    /// Two spaces per level below 1.
    pub indent: String,
}

/// One token flattened to text, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequentialElement {
    pub kind: BlockKind,
    pub line: usize,
    pub content: String,
}

/// Element counts for a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub headers: usize,
    pub paragraphs: usize,
    pub blockquotes: usize,
    pub code_blocks: usize,
    pub ordered_lists: usize,
    pub unordered_lists: usize,
    pub tables: usize,
    pub html_blocks: usize,
    pub thematic_breaks: usize,
    pub task_items: usize,
    pub text_links: usize,
    pub image_links: usize,
    pub footnotes: usize,
}
