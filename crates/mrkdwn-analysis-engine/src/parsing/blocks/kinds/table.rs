use std::sync::OnceLock;

use regex::Regex;

/// Pipe table: a header row, a separator row, then data rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    fn separator() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR.get_or_init(|| {
            Regex::new(r"^\s*\|?\s*:?-+:?\s*(?:\|\s*:?-+:?\s*)*\|?\s*$")
                .expect("Invalid table separator regex")
        })
    }

    /// A separator row holds only dashes, optional alignment colons and pipes.
    pub fn is_separator(line: &str) -> bool {
        Self::separator().is_match(line)
    }

    /// A table starts on a line containing a pipe followed by a separator.
    pub fn opens(line: &str, next: Option<&str>) -> bool {
        line.contains(Self::PIPE) && next.is_some_and(Self::is_separator)
    }

    /// Splits a row into trimmed cells.
    ///
    /// The empty cell produced by a leading or trailing pipe is dropped;
    /// interior empty cells are kept, so `||x|` is `["", "x"]`.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let mut cells: Vec<&str> = t.split(Self::PIPE).map(str::trim).collect();
        if t.starts_with(Self::PIPE) && !cells.is_empty() {
            cells.remove(0);
        }
        if t.len() > 1 && t.ends_with(Self::PIPE) {
            cells.pop();
        }
        cells.into_iter().map(str::to_string).collect()
    }
}
