/// The line array of a document.
///
/// Lines are split on `\n`; a trailing `\r` is dropped from each line so CRLF
/// input tokenizes the same as LF input. No line is added or removed: a text
/// ending in `\n` yields a final empty line, which the tokenizer treats as
/// blank.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Lines<'a> {
    pub fn split(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at `pos`, or `None` past the end.
    pub fn get(&self, pos: usize) -> Option<&'a str> {
        self.lines.get(pos).copied()
    }

    /// Whitespace-only lines and positions past the end are blank.
    pub fn is_blank(&self, pos: usize) -> bool {
        self.get(pos).is_none_or(|line| line.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        let lines = Lines::split("a\nb\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(2), Some(""));
    }

    #[test]
    fn crlf_is_stripped() {
        let lines = Lines::split("a\r\nb");
        assert_eq!(lines.get(0), Some("a"));
        assert_eq!(lines.get(1), Some("b"));
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        let lines = Lines::split("");
        assert_eq!(lines.len(), 1);
        assert!(lines.is_blank(0));
    }

    #[test]
    fn past_the_end_is_blank() {
        let lines = Lines::split("text");
        assert!(!lines.is_blank(0));
        assert!(lines.is_blank(1));
        assert_eq!(lines.get(1), None);
    }
}
