use std::path::{Path, PathBuf};

use crate::{
    analyzer::{ElementKind, HeaderEntry, Located, SearchHit, Summary, TokenIndex},
    io::{self, IoError},
    parsing::{
        ParseError, ParseOptions, ParsedDoc,
        blocks::BlockToken,
        inline::TextLink,
        parse_with,
        references::{FootnoteTable, ReferenceTable},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A parsed and inline-annotated document.
///
/// The full pipeline runs once at construction; tokens are immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    parsed: ParsedDoc,
    path: Option<PathBuf>,
}

impl MarkdownDocument {
    pub fn from_str(text: &str, options: &ParseOptions) -> Result<Self, DocumentError> {
        let mut parsed = parse_with(text, options)?;
        parsed.annotate_inline();
        log::debug!(
            "parsed document: {} tokens, {} references, {} footnotes",
            parsed.tokens.len(),
            parsed.references.len(),
            parsed.footnotes.len()
        );
        Ok(Self { parsed, path: None })
    }

    pub fn from_path(path: &Path, options: &ParseOptions) -> Result<Self, DocumentError> {
        let text = io::read_file(path)?;
        let mut doc = Self::from_str(&text, options)?;
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// The file this document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn tokens(&self) -> &[BlockToken] {
        &self.parsed.tokens
    }

    pub fn references(&self) -> &ReferenceTable {
        &self.parsed.references
    }

    pub fn footnotes(&self) -> &FootnoteTable {
        &self.parsed.footnotes
    }

    pub fn index(&self) -> TokenIndex<'_> {
        TokenIndex::new(&self.parsed.tokens)
    }

    pub fn headers(&self) -> Vec<HeaderEntry> {
        self.index().headers()
    }

    pub fn text_links(&self) -> Vec<Located<TextLink>> {
        self.index().text_links()
    }

    pub fn summary(&self) -> Summary {
        self.index().summary()
    }

    pub fn search(&self, query: &str, kinds: &[ElementKind]) -> Vec<SearchHit> {
        self.index().search(query, kinds)
    }
}
