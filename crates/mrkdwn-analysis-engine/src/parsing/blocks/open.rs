use crate::parsing::{lines::Lines, options::BlockMode};

use super::kinds::{
    AtxHeading, BlockQuote, CodeFence, Frontmatter, HtmlBlock, HtmlStart, IndentedCode, ListKind,
    ListMarker, SetextHeading, Table, ThematicBreak,
};

/// The block rule that applies at a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Frontmatter,
    IndentedCode,
    Table,
    HtmlBlock(HtmlStart),
    AtxHeading,
    SetextHeading { level: u8 },
    ThematicBreak,
    FencedCode,
    BlockQuote,
    ListItem(ListKind),
}

/// Decides which block starts at `pos`, applying rules in precedence order.
///
/// Returns `None` for blank lines and for lines that can only be paragraph
/// text. The same decision is used both to dispatch at the start of a token
/// and to detect where a paragraph, table or list is interrupted.
pub fn try_open(lines: &Lines<'_>, pos: usize, mode: BlockMode) -> Option<BlockOpen> {
    if lines.is_blank(pos) {
        return None;
    }
    let line = lines.get(pos)?;

    if pos == 0 && Frontmatter::is_delimiter(line) {
        return Some(BlockOpen::Frontmatter);
    }
    if mode == BlockMode::FencesOnly {
        return CodeFence::open(line).map(|_| BlockOpen::FencedCode);
    }
    if IndentedCode::strip_indent(line).is_some() {
        return Some(BlockOpen::IndentedCode);
    }
    if Table::opens(line, lines.get(pos + 1)) {
        return Some(BlockOpen::Table);
    }
    if let Some(start) = HtmlBlock::opens(line) {
        return Some(BlockOpen::HtmlBlock(start));
    }
    // A valid ATX line is never reread as setext header text.
    if AtxHeading::parse(line).is_some() {
        return Some(BlockOpen::AtxHeading);
    }
    // A fence opener followed by `---` starts a fence, not a setext header.
    if CodeFence::open(line).is_none() {
        if let Some(level) = lines.get(pos + 1).and_then(SetextHeading::underline_level) {
            return Some(BlockOpen::SetextHeading { level });
        }
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if CodeFence::open(line).is_some() {
        return Some(BlockOpen::FencedCode);
    }
    if BlockQuote::strip_marker(line).is_some() {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some((kind, _)) = ListMarker::parse(line) {
        return Some(BlockOpen::ListItem(kind));
    }
    None
}
