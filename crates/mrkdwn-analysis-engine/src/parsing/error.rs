/// Structural parse failures.
///
/// Irregular input (unclosed HTML blocks, ragged tables, mixed list markers)
/// never produces an error; the tokenizer emits a best-effort token instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unclosed fenced code block starting at line {line}")]
    UnclosedFence {
        /// 1-indexed line of the opening fence.
        line: usize,
    },
}
