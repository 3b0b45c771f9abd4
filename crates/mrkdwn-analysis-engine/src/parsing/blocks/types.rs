use serde::Serialize;

use crate::parsing::inline::InlineResult;

/// The kind of a block token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BlockKind {
    Frontmatter,
    Header,
    Paragraph,
    Blockquote,
    Code,
    OrderedList,
    UnorderedList,
    Table,
    ThematicBreak,
    HtmlBlock,
}

impl BlockKind {
    /// Kinds whose content is scanned for inline elements.
    pub fn carries_inline(self) -> bool {
        matches!(self, Self::Header | Self::Paragraph | Self::Blockquote)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontmatter => "frontmatter",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Blockquote => "blockquote",
            Self::Code => "code",
            Self::OrderedList => "ordered_list",
            Self::UnorderedList => "unordered_list",
            Self::Table => "table",
            Self::ThematicBreak => "thematic_break",
            Self::HtmlBlock => "html_block",
        }
    }
}

/// How a code block was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeType {
    Fenced,
    Indented,
}

/// One entry of an ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Item text with the list marker and any task marker removed.
    pub text: String,
    pub is_task: bool,
    /// `Some` only for task items.
    pub checked: Option<bool>,
}

/// Kind-specific structured payload of a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum TokenMeta {
    #[default]
    None,
    Code {
        language: Option<String>,
        code_type: CodeType,
    },
    /// Rows are kept verbatim: a row may have more or fewer cells than the
    /// header.
    Table {
        header_cells: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    List {
        items: Vec<ListItem>,
    },
}

/// A block-level token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockToken {
    pub kind: BlockKind,
    /// Literal text owned by the token. Empty for tables and lists, which
    /// carry their content in `meta`.
    pub content: String,
    /// Header level (1-6); `None` for every other kind.
    pub level: Option<u8>,
    /// 1-indexed line where the construct begins.
    pub start_line: usize,
    pub meta: TokenMeta,
    /// Filled by inline annotation for headers, paragraphs and blockquotes.
    pub inline: Option<InlineResult>,
}

impl BlockToken {
    pub fn new(kind: BlockKind, content: impl Into<String>, start_line: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            level: None,
            start_line,
            meta: TokenMeta::None,
            inline: None,
        }
    }

    pub fn header(level: u8, content: impl Into<String>, start_line: usize) -> Self {
        Self {
            level: Some(level),
            ..Self::new(BlockKind::Header, content, start_line)
        }
    }

    pub fn with_meta(mut self, meta: TokenMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Language tag of a code token.
    pub fn language(&self) -> Option<&str> {
        match &self.meta {
            TokenMeta::Code { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Items of a list token; empty for every other kind.
    pub fn list_items(&self) -> &[ListItem] {
        match &self.meta {
            TokenMeta::List { items } => items,
            _ => &[],
        }
    }
}
