use std::sync::OnceLock;

use regex::Regex;

/// Bold (`**t**`, `__t__`) and italic (`*t*`, `_t_`) spans.
///
/// Bold alternatives are tried first at each position, so `**t**` yields a
/// single span rather than an italic one nested inside it. A bold span may
/// contain italic runs (`**a *b* c**`); they stay part of its inner text.
pub struct Emphasis;

/// One emphasis match: where it starts and its inner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisMatch<'a> {
    pub start: usize,
    pub inner: &'a str,
}

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    fn pattern() -> &'static Regex {
        static EMPHASIS: OnceLock<Regex> = OnceLock::new();
        EMPHASIS.get_or_init(|| {
            Regex::new(concat!(
                // Bold may hold nested `*italic*` runs.
                r"\*\*((?:[^*\s]|\*[^*\s](?:[^*\n]*[^*\s])?\*)",
                r"(?:(?:[^*\n]|\*[^*\s](?:[^*\n]*[^*\s])?\*)*",
                r"(?:[^*\s]|\*[^*\s](?:[^*\n]*[^*\s])?\*))?)\*\*",
                r"|__([^_\s](?:[^_\n]*[^_\s])?)__",
                r"|\*([^*\s](?:[^*\n]*[^*\s])?)\*",
                r"|_([^_\s](?:[^_\n]*[^_\s])?)_",
            ))
            .expect("Invalid emphasis regex")
        })
    }

    /// All emphasis spans in `text` whose start is accepted by `allowed`.
    ///
    /// Underscore spans touching a letter or digit on either side are
    /// intraword (`snake_case_name`) and rejected. A rejected candidate only
    /// skips its opening delimiter, so a later span can still match.
    pub fn matches(text: &str, allowed: impl Fn(usize) -> bool) -> Vec<EmphasisMatch<'_>> {
        let mut out = vec![];
        let mut at = 0;
        while let Some(caps) = Self::pattern().captures_at(text, at) {
            let Some(whole) = caps.get(0) else { break };
            let inner = (1..=4).find_map(|g| caps.get(g).map(|m| (g, m.as_str())));
            let Some((group, inner)) = inner else { break };

            let underscore = group == 2 || group == 4;
            let accepted = allowed(whole.start())
                && !(underscore && Self::is_intraword(text, whole.start(), whole.end()));

            if accepted {
                out.push(EmphasisMatch {
                    start: whole.start(),
                    inner,
                });
                at = whole.end();
            } else {
                // The delimiter is ASCII, so start + 1 is a char boundary.
                at = whole.start() + 1;
            }
        }
        out
    }

    fn is_intraword(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        before.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric)
    }
}
