/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// tokenizer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote marker and at most one following space.
    ///
    /// Returns `None` if the line is not a blockquote line. Nested markers
    /// (`> > text`) are only stripped once, leaving `> text`.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
