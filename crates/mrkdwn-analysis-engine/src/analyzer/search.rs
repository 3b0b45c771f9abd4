use serde::Serialize;

use super::TokenIndex;

/// Categories of elements that [`TokenIndex::search`] looks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    Paragraph,
    Blockquote,
    Code,
    ListItem,
    TableCell,
    Link,
    Image,
    InlineCode,
    Emphasis,
    Footnote,
}

impl ElementKind {
    pub const ALL: [ElementKind; 11] = [
        Self::Header,
        Self::Paragraph,
        Self::Blockquote,
        Self::Code,
        Self::ListItem,
        Self::TableCell,
        Self::Link,
        Self::Image,
        Self::InlineCode,
        Self::Emphasis,
        Self::Footnote,
    ];
}

/// A search match: the element category, its line and the matching text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub kind: ElementKind,
    pub line: usize,
    pub text: String,
}

impl TokenIndex<'_> {
    /// Case-insensitive substring search across element categories.
    ///
    /// An empty `kinds` slice searches every category. Hits are grouped by
    /// category in the order of `kinds`, then by line.
    pub fn search(&self, query: &str, kinds: &[ElementKind]) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let all = ElementKind::ALL;
        let kinds = if kinds.is_empty() {
            &all[..]
        } else {
            kinds
        };

        let mut hits = vec![];
        for &kind in kinds {
            for (line, text) in self.texts_of(kind) {
                if text.to_lowercase().contains(&needle) {
                    hits.push(SearchHit { kind, line, text });
                }
            }
        }
        hits
    }

    /// The searchable texts of one category.
    fn texts_of(&self, kind: ElementKind) -> Vec<(usize, String)> {
        match kind {
            ElementKind::Header => self
                .headers()
                .into_iter()
                .map(|h| (h.line, h.text))
                .collect(),
            ElementKind::Paragraph => self
                .paragraphs()
                .into_iter()
                .map(|p| (p.line, p.content))
                .collect(),
            ElementKind::Blockquote => self
                .blockquotes()
                .into_iter()
                .map(|b| (b.line, b.content))
                .collect(),
            ElementKind::Code => self
                .code_blocks()
                .into_iter()
                .map(|c| (c.line, c.content))
                .collect(),
            ElementKind::ListItem => {
                let mut items: Vec<_> = self
                    .ordered_lists()
                    .into_iter()
                    .chain(self.unordered_lists())
                    .flat_map(|list| {
                        let line = list.line;
                        list.items.into_iter().map(move |item| (line, item.text))
                    })
                    .collect();
                items.sort_by_key(|(line, _)| *line);
                items
            }
            ElementKind::TableCell => self
                .tables()
                .into_iter()
                .flat_map(|table| {
                    let line = table.line;
                    table
                        .header
                        .into_iter()
                        .chain(table.rows.into_iter().flatten())
                        .map(move |cell| (line, cell))
                })
                .collect(),
            ElementKind::Link => self
                .text_links()
                .into_iter()
                .map(|l| (l.line, l.item.text))
                .collect(),
            ElementKind::Image => self
                .image_links()
                .into_iter()
                .map(|i| (i.line, i.item.alt_text))
                .collect(),
            ElementKind::InlineCode => self
                .inline_code()
                .into_iter()
                .map(|c| (c.line, c.item))
                .collect(),
            ElementKind::Emphasis => self
                .emphasis()
                .into_iter()
                .map(|e| (e.line, e.item))
                .collect(),
            ElementKind::Footnote => self
                .footnotes_used()
                .into_iter()
                .map(|f| (f.line, f.item.content))
                .collect(),
        }
    }
}
