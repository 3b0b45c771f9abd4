/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback block when no
/// other block opener matches. Inline scanning is applied to paragraph
/// content.
pub struct Paragraph;

impl Paragraph {
    /// Joins paragraph lines, trimming each one.
    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_trims_lines() {
        assert_eq!(Paragraph::join(["  one ", "two  "]), "one\ntwo");
    }
}
