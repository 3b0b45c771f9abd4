use std::sync::OnceLock;

use regex::Regex;

/// Footnote references (`[^id]`).
pub struct FootnoteRef;

/// One footnote reference: where it starts and its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteMatch<'a> {
    pub start: usize,
    pub id: &'a str,
}

impl FootnoteRef {
    /// Follows `]` in a footnote definition rather than a reference.
    pub const DEFINITION: char = ':';

    fn pattern() -> &'static Regex {
        static FOOTNOTE: OnceLock<Regex> = OnceLock::new();
        FOOTNOTE.get_or_init(|| {
            Regex::new(r"\[\^([^\]\s]+)\]").expect("Invalid footnote reference regex")
        })
    }

    /// Every footnote reference in `text`, definitions excluded.
    pub fn matches(text: &str) -> Vec<FootnoteMatch<'_>> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if text[whole.end()..].starts_with(Self::DEFINITION) {
                    return None;
                }
                Some(FootnoteMatch {
                    start: whole.start(),
                    id: caps.get(1)?.as_str(),
                })
            })
            .collect()
    }
}
