use std::ops::Range;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline element may start inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

/// A matched code span as byte ranges into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpanMatch {
    /// Full range including the backtick runs.
    pub full: Range<usize>,
    /// Content between the backtick runs.
    pub inner: Range<usize>,
}

impl CodeSpanMatch {
    pub fn contains(&self, pos: usize) -> bool {
        self.full.contains(&pos)
    }
}
