/// Code block written with a four-space or tab indent.
pub struct IndentedCode;

impl IndentedCode {
    pub const SPACES: &'static str = "    ";
    pub const TAB: char = '\t';

    /// Strips exactly one indent unit, or returns `None` if the line is not
    /// indented.
    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::SPACES)
            .or_else(|| line.strip_prefix(Self::TAB))
    }
}
