/// How the tokenizer treats a fenced code block that never closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceMode {
    /// An unterminated fence is a [`ParseError::UnclosedFence`](super::ParseError).
    #[default]
    Strict,
    /// An unterminated fence absorbs the rest of the document.
    Tolerant,
}

/// Which block rules the tokenizer applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockMode {
    /// The full block grammar.
    #[default]
    Markdown,
    /// Only frontmatter and fenced code are recognised; every other run of
    /// non-blank lines becomes an opaque paragraph. Used for documents with
    /// embedded component markup (MDX and similar).
    FencesOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub fences: FenceMode,
    pub blocks: BlockMode,
}

impl ParseOptions {
    /// Full grammar, unterminated fences absorbed instead of rejected.
    pub fn tolerant() -> Self {
        Self {
            fences: FenceMode::Tolerant,
            blocks: BlockMode::Markdown,
        }
    }

    /// Settings for documents with embedded component markup.
    pub fn mdx() -> Self {
        Self {
            fences: FenceMode::Tolerant,
            blocks: BlockMode::FencesOnly,
        }
    }
}
