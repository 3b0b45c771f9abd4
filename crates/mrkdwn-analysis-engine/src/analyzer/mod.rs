//! # Token Index
//!
//! Read-only projections over a finished token sequence: per-kind
//! accessors, inline element listings, counts, a table of contents and
//! search. Every result carries the 1-indexed line of its token.

mod search;
mod types;

pub use search::{ElementKind, SearchHit};
pub use types::{
    CodeEntry, HeaderEntry, ListEntry, Located, SequentialElement, Summary, TableEntry, TaskEntry,
    TextEntry, TocEntry,
};

use crate::parsing::{
    blocks::{BlockKind, BlockToken, TokenMeta},
    inline::{FootnoteUse, ImageLink, InlineResult, TextLink},
};

#[derive(Debug, Clone, Copy)]
pub struct TokenIndex<'a> {
    tokens: &'a [BlockToken],
}

impl<'a> TokenIndex<'a> {
    pub fn new(tokens: &'a [BlockToken]) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &'a [BlockToken] {
        self.tokens
    }

    fn of_kind(&self, kind: BlockKind) -> impl Iterator<Item = &'a BlockToken> {
        self.tokens.iter().filter(move |t| t.kind == kind)
    }

    fn text_entries(&self, kind: BlockKind) -> Vec<TextEntry> {
        self.of_kind(kind)
            .map(|t| TextEntry {
                content: t.content.clone(),
                line: t.start_line,
            })
            .collect()
    }

    pub fn headers(&self) -> Vec<HeaderEntry> {
        self.of_kind(BlockKind::Header)
            .map(|t| HeaderEntry {
                level: t.level.unwrap_or(1),
                text: t.content.clone(),
                line: t.start_line,
            })
            .collect()
    }

    pub fn headers_by_level(&self, level: u8) -> Vec<HeaderEntry> {
        self.headers()
            .into_iter()
            .filter(|h| h.level == level)
            .collect()
    }

    pub fn paragraphs(&self) -> Vec<TextEntry> {
        self.text_entries(BlockKind::Paragraph)
    }

    pub fn blockquotes(&self) -> Vec<TextEntry> {
        self.text_entries(BlockKind::Blockquote)
    }

    pub fn html_blocks(&self) -> Vec<TextEntry> {
        self.text_entries(BlockKind::HtmlBlock)
    }

    pub fn frontmatter(&self) -> Option<TextEntry> {
        self.text_entries(BlockKind::Frontmatter).into_iter().next()
    }

    pub fn thematic_break_count(&self) -> usize {
        self.of_kind(BlockKind::ThematicBreak).count()
    }

    pub fn code_blocks(&self) -> Vec<CodeEntry> {
        self.of_kind(BlockKind::Code)
            .filter_map(|t| match &t.meta {
                TokenMeta::Code {
                    language,
                    code_type,
                } => Some(CodeEntry {
                    language: language.clone(),
                    code_type: *code_type,
                    content: t.content.clone(),
                    line: t.start_line,
                }),
                _ => None,
            })
            .collect()
    }

    /// Code blocks tagged with `language`, compared case-insensitively.
    pub fn code_by_language(&self, language: &str) -> Vec<CodeEntry> {
        self.code_blocks()
            .into_iter()
            .filter(|c| {
                c.language
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(language))
            })
            .collect()
    }

    fn lists(&self, kind: BlockKind) -> Vec<ListEntry> {
        self.of_kind(kind)
            .map(|t| ListEntry {
                items: t.list_items().to_vec(),
                line: t.start_line,
            })
            .collect()
    }

    pub fn ordered_lists(&self) -> Vec<ListEntry> {
        self.lists(BlockKind::OrderedList)
    }

    pub fn unordered_lists(&self) -> Vec<ListEntry> {
        self.lists(BlockKind::UnorderedList)
    }

    /// Task items from every list, in document order.
    pub fn task_items(&self) -> Vec<TaskEntry> {
        self.tokens
            .iter()
            .flat_map(|t| {
                t.list_items().iter().filter_map(|item| {
                    Some(TaskEntry {
                        text: item.text.clone(),
                        checked: item.checked?,
                        line: t.start_line,
                    })
                })
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<TableEntry> {
        self.of_kind(BlockKind::Table)
            .filter_map(|t| match &t.meta {
                TokenMeta::Table { header_cells, rows } => Some(TableEntry {
                    header: header_cells.clone(),
                    rows: rows.clone(),
                    line: t.start_line,
                }),
                _ => None,
            })
            .collect()
    }

    /// Flattens one inline field across all annotated tokens.
    fn inline_items<T: Clone + 'a>(
        &self,
        field: impl Fn(&'a InlineResult) -> &'a [T],
    ) -> Vec<Located<T>> {
        self.tokens
            .iter()
            .filter_map(|t| t.inline.as_ref().map(|inline| (t.start_line, inline)))
            .flat_map(|(line, inline)| {
                field(inline).iter().map(move |item| Located {
                    line,
                    item: item.clone(),
                })
            })
            .collect()
    }

    pub fn text_links(&self) -> Vec<Located<TextLink>> {
        self.inline_items(|i| i.text_links.as_slice())
    }

    pub fn image_links(&self) -> Vec<Located<ImageLink>> {
        self.inline_items(|i| i.image_links.as_slice())
    }

    /// Text links with an `http` or `https` scheme.
    pub fn http_links(&self) -> Vec<Located<TextLink>> {
        self.text_links()
            .into_iter()
            .filter(|l| is_http(&l.item.url))
            .collect()
    }

    pub fn footnotes_used(&self) -> Vec<Located<FootnoteUse>> {
        self.inline_items(|i| i.footnotes_used.as_slice())
    }

    pub fn emphasis(&self) -> Vec<Located<String>> {
        self.inline_items(|i| i.emphasis.as_slice())
    }

    pub fn inline_code(&self) -> Vec<Located<String>> {
        self.inline_items(|i| i.inline_code.as_slice())
    }

    pub fn html_inline(&self) -> Vec<Located<String>> {
        self.inline_items(|i| i.html_inline.as_slice())
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for t in self.tokens {
            match t.kind {
                BlockKind::Header => summary.headers += 1,
                BlockKind::Paragraph => summary.paragraphs += 1,
                BlockKind::Blockquote => summary.blockquotes += 1,
                BlockKind::Code => summary.code_blocks += 1,
                BlockKind::OrderedList => summary.ordered_lists += 1,
                BlockKind::UnorderedList => summary.unordered_lists += 1,
                BlockKind::Table => summary.tables += 1,
                BlockKind::HtmlBlock => summary.html_blocks += 1,
                BlockKind::ThematicBreak => summary.thematic_breaks += 1,
                BlockKind::Frontmatter => {}
            }
            summary.task_items += t.list_items().iter().filter(|i| i.is_task).count();
            if let Some(inline) = &t.inline {
                summary.text_links += inline.text_links.len();
                summary.image_links += inline.image_links.len();
                summary.footnotes += inline.footnotes_used.len();
            }
        }
        summary
    }

    /// Headers up to `max_level`, indented two spaces per level below 1.
    pub fn table_of_contents(&self, max_level: u8) -> Vec<TocEntry> {
        self.headers()
            .into_iter()
            .filter(|h| h.level <= max_level)
            .map(|h| TocEntry {
                indent: "  ".repeat(usize::from(h.level.saturating_sub(1))),
                level: h.level,
                text: h.text,
                line: h.line,
            })
            .collect()
    }

    /// Every token flattened to text in document order.
    pub fn sequential_elements(&self) -> Vec<SequentialElement> {
        self.tokens
            .iter()
            .map(|t| SequentialElement {
                kind: t.kind,
                line: t.start_line,
                content: flatten(t),
            })
            .collect()
    }
}

fn is_http(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Lists render one item per line; tables one row per line with cells
/// joined by ` | `.
fn flatten(token: &BlockToken) -> String {
    match &token.meta {
        TokenMeta::List { items } => items
            .iter()
            .map(|i| i.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        TokenMeta::Table { header_cells, rows } => std::iter::once(header_cells)
            .chain(rows)
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n"),
        TokenMeta::Code { .. } | TokenMeta::None => token.content.clone(),
    }
}
