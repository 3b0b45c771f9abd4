use serde::Serialize;

/// An inline or resolved reference-style link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLink {
    pub text: String,
    pub url: String,
}

/// An inline or resolved reference-style image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageLink {
    pub alt_text: String,
    pub url: String,
}

/// A footnote reference paired with its definition body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnoteUse {
    pub id: String,
    pub content: String,
}

/// Inline elements extracted from one token's content, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineResult {
    pub text_links: Vec<TextLink>,
    pub image_links: Vec<ImageLink>,
    pub inline_code: Vec<String>,
    /// Bold and italic spans alike.
    pub emphasis: Vec<String>,
    pub footnotes_used: Vec<FootnoteUse>,
    /// Full serialization of every embedded tag, outer tags before inner.
    pub html_inline: Vec<String>,
}

impl InlineResult {
    pub fn is_empty(&self) -> bool {
        self.text_links.is_empty()
            && self.image_links.is_empty()
            && self.inline_code.is_empty()
            && self.emphasis.is_empty()
            && self.footnotes_used.is_empty()
            && self.html_inline.is_empty()
    }
}
