/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    /// The trimmed info string, `None` when the fence has no tag.
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Recognises a line made of exactly three backticks and an optional tag.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        if rest.contains('`') {
            return None;
        }
        let tag = rest.trim();
        Some(FenceOpen {
            language: (!tag.is_empty()).then(|| tag.to_string()),
        })
    }

    pub fn closes(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }
}
