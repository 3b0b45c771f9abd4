use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Inline and reference-style links and images.
///
/// `[text](url)`, `[text][id]` and `[text][]`, each with an optional leading
/// `!` marking an image.
pub struct Link;

/// The target of a matched link before reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Inline(&'a str),
    Reference(&'a str),
}

/// One link or image match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub start: usize,
    pub is_image: bool,
    pub text: &'a str,
    pub target: LinkTarget<'a>,
}

impl Link {
    pub const IMAGE: char = '!';
    pub const ANGLE_OPEN: char = '<';
    pub const ANGLE_CLOSE: char = '>';

    fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| {
            Regex::new(r"(!?)\[([^\]\n]*)\](?:\(([^)\n]*)\)|\[([^\]\n]*)\])")
                .expect("Invalid link regex")
        })
    }

    /// All link and image matches in `text`, in source order.
    ///
    /// Footnote references (`[^id]`) are not links and are skipped.
    pub fn matches(text: &str) -> Vec<LinkMatch<'_>> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| Self::from_captures(&caps))
            .collect()
    }

    fn from_captures<'a>(caps: &Captures<'a>) -> Option<LinkMatch<'a>> {
        let whole = caps.get(0)?;
        let label = caps.get(2)?.as_str();
        if label.starts_with('^') {
            return None;
        }
        let target = match (caps.get(3), caps.get(4)) {
            (Some(dest), _) => LinkTarget::Inline(Self::destination(dest.as_str())),
            (None, Some(id)) => {
                let id = id.as_str().trim();
                LinkTarget::Reference(if id.is_empty() { label.trim() } else { id })
            }
            (None, None) => return None,
        };
        Some(LinkMatch {
            start: whole.start(),
            is_image: !caps.get(1)?.as_str().is_empty(),
            text: label,
            target,
        })
    }

    /// Strips an optional title and surrounding angle brackets from an
    /// inline destination.
    pub fn destination(raw: &str) -> &str {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix(Self::ANGLE_OPEN) {
            if let Some(end) = rest.find(Self::ANGLE_CLOSE) {
                return &rest[..end];
            }
        }
        raw.split_whitespace().next().unwrap_or_default()
    }
}
