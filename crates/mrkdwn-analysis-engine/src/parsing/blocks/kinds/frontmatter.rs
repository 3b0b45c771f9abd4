/// Leading metadata block delimited by `---` lines.
pub struct Frontmatter;

impl Frontmatter {
    pub const DELIMITER: &'static str = "---";

    pub fn is_delimiter(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }
}
