use crate::parsing::{
    error::ParseError,
    lines::Lines,
    options::{FenceMode, ParseOptions},
};

use super::{
    kinds::{
        AtxHeading, BlockQuote, CodeFence, Frontmatter, HtmlBlock, HtmlStart, IndentedCode,
        ListKind, ListMarker, Paragraph, Table, TaskMarker,
    },
    open::{BlockOpen, try_open},
    types::{BlockKind, BlockToken, CodeType, ListItem, TokenMeta},
};

/// Line-by-line block tokenizer.
///
/// The cursor only moves forward: every step either skips a blank line or
/// consumes at least one line into a token, so a document of `n` lines is
/// tokenized in at most `n` steps.
pub struct BlockTokenizer<'a> {
    lines: &'a Lines<'a>,
    options: ParseOptions,
    pos: usize,
    out: Vec<BlockToken>,
}

impl<'a> BlockTokenizer<'a> {
    pub fn new(lines: &'a Lines<'a>, options: ParseOptions) -> Self {
        Self {
            lines,
            options,
            pos: 0,
            out: vec![],
        }
    }

    pub fn run(mut self) -> Result<Vec<BlockToken>, ParseError> {
        while self.pos < self.lines.len() {
            let before = self.pos;
            self.step()?;
            debug_assert!(self.pos > before, "tokenizer stalled at line {}", before + 1);
        }
        log::debug!(
            "tokenized {} lines into {} tokens",
            self.lines.len(),
            self.out.len()
        );
        Ok(self.out)
    }

    fn step(&mut self) -> Result<(), ParseError> {
        if self.lines.is_blank(self.pos) {
            self.pos += 1;
            return Ok(());
        }

        let open = try_open(self.lines, self.pos, self.options.blocks);
        log::trace!("line {}: {:?}", self.pos + 1, open);

        match open {
            Some(BlockOpen::Frontmatter) => self.consume_frontmatter(),
            Some(BlockOpen::IndentedCode) => self.consume_indented_code(),
            Some(BlockOpen::Table) => self.consume_table(),
            Some(BlockOpen::HtmlBlock(start)) => self.consume_html_block(start),
            Some(BlockOpen::AtxHeading) => self.emit_atx_heading(),
            Some(BlockOpen::SetextHeading { level }) => self.emit_setext_heading(level),
            Some(BlockOpen::ThematicBreak) => {
                self.push(BlockToken::new(BlockKind::ThematicBreak, "", self.pos + 1));
                self.pos += 1;
            }
            Some(BlockOpen::FencedCode) => self.consume_fence()?,
            Some(BlockOpen::BlockQuote) => self.consume_blockquote(),
            Some(BlockOpen::ListItem(kind)) => self.consume_list(kind),
            None => self.consume_paragraph(),
        }
        Ok(())
    }

    fn push(&mut self, token: BlockToken) {
        log::debug!("{:?} at line {}", token.kind, token.start_line);
        self.out.push(token);
    }

    fn line(&self, pos: usize) -> &'a str {
        self.lines.get(pos).unwrap_or_default()
    }

    /// Whether the line at `pos` starts a block other than a paragraph.
    fn interrupts(&self, pos: usize) -> bool {
        try_open(self.lines, pos, self.options.blocks).is_some()
    }

    fn consume_frontmatter(&mut self) {
        let start = self.pos;
        self.pos += 1;
        let mut body = vec![];
        while self.pos < self.lines.len() {
            let line = self.line(self.pos);
            self.pos += 1;
            if Frontmatter::is_delimiter(line) {
                break;
            }
            body.push(line);
        }
        self.push(BlockToken::new(
            BlockKind::Frontmatter,
            body.join("\n"),
            start + 1,
        ));
    }

    fn consume_indented_code(&mut self) {
        let start = self.pos;
        let mut body = vec![];
        while !self.lines.is_blank(self.pos) {
            match IndentedCode::strip_indent(self.line(self.pos)) {
                Some(stripped) => body.push(stripped),
                None => break,
            }
            self.pos += 1;
        }
        if body.is_empty() {
            return;
        }
        self.push(
            BlockToken::new(BlockKind::Code, body.join("\n"), start + 1).with_meta(
                TokenMeta::Code {
                    language: None,
                    code_type: CodeType::Indented,
                },
            ),
        );
    }

    fn consume_table(&mut self) {
        let start = self.pos;
        let header_cells = Table::split_row(self.line(start));
        // header + separator
        self.pos += 2;

        let mut rows = vec![];
        while !self.lines.is_blank(self.pos) && !self.interrupts(self.pos) {
            rows.push(Table::split_row(self.line(self.pos)));
            self.pos += 1;
        }
        self.push(
            BlockToken::new(BlockKind::Table, "", start + 1)
                .with_meta(TokenMeta::Table { header_cells, rows }),
        );
    }

    fn consume_html_block(&mut self, start_kind: HtmlStart) {
        let start = self.pos;
        let mut body = vec![];
        match start_kind {
            HtmlStart::Comment => {
                while self.pos < self.lines.len() {
                    let line = self.line(self.pos);
                    body.push(line);
                    self.pos += 1;
                    if HtmlBlock::closes_comment(line, self.pos - 1 == start) {
                        break;
                    }
                }
            }
            HtmlStart::Tag => {
                while !self.lines.is_blank(self.pos) {
                    body.push(self.line(self.pos));
                    self.pos += 1;
                }
            }
        }
        self.push(BlockToken::new(
            BlockKind::HtmlBlock,
            body.join("\n"),
            start + 1,
        ));
    }

    fn emit_atx_heading(&mut self) {
        if let Some((level, text)) = AtxHeading::parse(self.line(self.pos)) {
            self.push(BlockToken::header(level, text, self.pos + 1));
        }
        self.pos += 1;
    }

    fn emit_setext_heading(&mut self, level: u8) {
        let text = self.line(self.pos).trim();
        self.push(BlockToken::header(level, text, self.pos + 1));
        self.pos += 2;
    }

    fn consume_fence(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let language = CodeFence::open(self.line(start)).and_then(|open| open.language);
        self.pos += 1;

        let mut body = vec![];
        let mut closed = false;
        while self.pos < self.lines.len() {
            let line = self.line(self.pos);
            self.pos += 1;
            if CodeFence::closes(line) {
                closed = true;
                break;
            }
            body.push(line);
        }

        if !closed {
            match self.options.fences {
                FenceMode::Strict => return Err(ParseError::UnclosedFence { line: start + 1 }),
                FenceMode::Tolerant => log::warn!(
                    "unclosed fenced code block at line {}, absorbed to end of document",
                    start + 1
                ),
            }
        }

        self.push(
            BlockToken::new(BlockKind::Code, body.join("\n"), start + 1).with_meta(
                TokenMeta::Code {
                    language,
                    code_type: CodeType::Fenced,
                },
            ),
        );
        Ok(())
    }

    fn consume_blockquote(&mut self) {
        let start = self.pos;
        let mut body = vec![];
        while let Some(stripped) = self.lines.get(self.pos).and_then(BlockQuote::strip_marker) {
            body.push(stripped);
            self.pos += 1;
        }
        self.push(BlockToken::new(
            BlockKind::Blockquote,
            body.join("\n"),
            start + 1,
        ));
    }

    fn consume_list(&mut self, kind: ListKind) {
        let start = self.pos;
        let mut texts: Vec<String> = vec![];
        let mut current: Option<String> = None;

        while self.pos < self.lines.len() {
            let line = self.line(self.pos);

            if self.lines.is_blank(self.pos) {
                texts.extend(current.take());
                self.pos += 1;
                continue;
            }
            // Indented lines continue the open item rather than starting code.
            match try_open(self.lines, self.pos, self.options.blocks) {
                None | Some(BlockOpen::IndentedCode) | Some(BlockOpen::ListItem(_)) => {}
                Some(_) => break,
            }
            if let Some((_, text)) = ListMarker::parse(line) {
                texts.extend(current.replace(text.to_string()));
                self.pos += 1;
                continue;
            }
            match current.as_mut() {
                Some(text) => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(line.trim());
                    self.pos += 1;
                }
                // After a blank line only a new item continues the list.
                None => break,
            }
        }
        texts.extend(current);

        let items = texts.into_iter().map(classify_item).collect();
        let block_kind = match kind {
            ListKind::Ordered => BlockKind::OrderedList,
            ListKind::Unordered => BlockKind::UnorderedList,
        };
        self.push(
            BlockToken::new(block_kind, "", start + 1).with_meta(TokenMeta::List { items }),
        );
    }

    fn consume_paragraph(&mut self) {
        let start = self.pos;
        while !self.lines.is_blank(self.pos) && (self.pos == start || !self.interrupts(self.pos))
        {
            self.pos += 1;
        }
        // Progress guarantee: never leave the cursor where it started.
        if self.pos == start {
            self.pos += 1;
            return;
        }
        let content = Paragraph::join((start..self.pos).map(|p| self.line(p)));
        self.push(BlockToken::new(BlockKind::Paragraph, content, start + 1));
    }
}

fn classify_item(text: String) -> ListItem {
    match TaskMarker::parse(&text) {
        Some((checked, rest)) => ListItem {
            text: rest.to_string(),
            is_task: true,
            checked: Some(checked),
        },
        None => ListItem {
            text,
            is_task: false,
            checked: None,
        },
    }
}
