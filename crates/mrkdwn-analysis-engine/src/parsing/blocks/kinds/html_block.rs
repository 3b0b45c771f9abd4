use std::sync::OnceLock;

use regex::Regex;

/// How an HTML block opens, which decides how it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlStart {
    /// `<!--` runs through the line containing `-->`.
    Comment,
    /// An opening tag runs until a blank line.
    Tag,
}

pub struct HtmlBlock;

impl HtmlBlock {
    pub const COMMENT_OPEN: &'static str = "<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";

    fn open_tag() -> &'static Regex {
        static OPEN_TAG: OnceLock<Regex> = OnceLock::new();
        OPEN_TAG.get_or_init(|| {
            Regex::new(r"^\s*<[A-Za-z][A-Za-z0-9-]*(?:\s|/?>|$)")
                .expect("Invalid HTML open tag regex")
        })
    }

    pub fn opens(line: &str) -> Option<HtmlStart> {
        if line.trim_start().starts_with(Self::COMMENT_OPEN) {
            Some(HtmlStart::Comment)
        } else if Self::open_tag().is_match(line) {
            Some(HtmlStart::Tag)
        } else {
            None
        }
    }

    /// Whether `line` ends a comment block. On the opening line only the text
    /// after `<!--` counts, so `<!-->` does not close itself.
    pub fn closes_comment(line: &str, is_opening_line: bool) -> bool {
        let searched = if is_opening_line {
            line.split_once(Self::COMMENT_OPEN)
                .map_or(line, |(_, after)| after)
        } else {
            line
        };
        searched.contains(Self::COMMENT_CLOSE)
    }
}
