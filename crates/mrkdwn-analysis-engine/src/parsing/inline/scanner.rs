use std::collections::HashSet;

use crate::parsing::{
    blocks::BlockToken,
    references::{FootnoteTable, ReferenceTable},
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, CodeSpanMatch, Emphasis, FootnoteRef, HtmlTag, Link, LinkTarget},
    types::{FootnoteUse, ImageLink, InlineResult, TextLink},
};

/// Extracts inline elements from a token's content.
///
/// Only headers, paragraphs and blockquotes carry inline content; every
/// other kind yields an empty result. Never fails.
pub fn scan_inline(
    token: &BlockToken,
    references: &ReferenceTable,
    footnotes: &FootnoteTable,
) -> InlineResult {
    if !token.kind.carries_inline() {
        return InlineResult::default();
    }
    scan_text(&token.content, references, footnotes)
}

/// Extracts inline elements from arbitrary text.
///
/// # Raw Zone Precedence
/// Code spans are located first. Links, emphasis and footnote references
/// starting inside a code span are ignored, and code spans are blanked out
/// before the HTML parse.
pub fn scan_text(
    text: &str,
    references: &ReferenceTable,
    footnotes: &FootnoteTable,
) -> InlineResult {
    let spans = find_code_spans(text);
    let outside = |pos: usize| !spans.iter().any(|span| span.contains(pos));

    let mut result = InlineResult {
        inline_code: spans
            .iter()
            .map(|span| text[span.inner.clone()].to_string())
            .collect(),
        ..InlineResult::default()
    };

    for link in Link::matches(text) {
        if !outside(link.start) {
            continue;
        }
        let url = match link.target {
            LinkTarget::Inline(url) => url,
            LinkTarget::Reference(id) => match references.resolve(id) {
                Some(url) => url,
                None => {
                    log::trace!("unresolved reference [{id}]");
                    continue;
                }
            },
        };
        if link.is_image {
            result.image_links.push(ImageLink {
                alt_text: link.text.to_string(),
                url: url.to_string(),
            });
        } else {
            result.text_links.push(TextLink {
                text: link.text.to_string(),
                url: url.to_string(),
            });
        }
    }

    result.emphasis = Emphasis::matches(text, outside)
        .into_iter()
        .map(|m| m.inner.to_string())
        .collect();

    let mut seen = HashSet::new();
    for reference in FootnoteRef::matches(text) {
        if !outside(reference.start) || !seen.insert(reference.id) {
            continue;
        }
        if let Some(content) = footnotes.get(reference.id) {
            result.footnotes_used.push(FootnoteUse {
                id: reference.id.to_string(),
                content: content.to_string(),
            });
        }
    }

    result.html_inline = HtmlTag::extract(&blank_out(text, &spans));
    result
}

/// Finds every closed code span, left to right.
fn find_code_spans(text: &str) -> Vec<CodeSpanMatch> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    while !cur.eof() {
        let before = cur.pos();
        if let Some(span) = try_parse_code_span(&mut cur) {
            out.push(span);
            continue;
        }
        if cur.pos() == before {
            cur.bump();
        }
    }
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// An opening run of `n` backticks is closed by the next run of exactly `n`.
/// Returns `None` if not at a backtick or if the span isn't closed; the
/// cursor is then moved past the opening run so it is not retried as a
/// closer.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<CodeSpanMatch> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let start = cur.pos();
    let ticks = cur.run_of(CodeSpan::TICK);
    cur.bump_n(ticks);
    let inner_start = cur.pos();

    let mut probe = cur.clone();
    while !probe.eof() {
        let run = probe.run_of(CodeSpan::TICK);
        if run == ticks {
            let inner = inner_start..probe.pos();
            probe.bump_n(run);
            *cur = probe;
            return Some(CodeSpanMatch {
                full: start..cur.pos(),
                inner,
            });
        }
        if run > 0 {
            probe.bump_n(run);
        } else {
            probe.bump();
        }
    }
    None
}

/// Replaces code spans with spaces of the same byte length.
fn blank_out(text: &str, spans: &[CodeSpanMatch]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.full.start]);
        out.extend(std::iter::repeat_n(' ', span.full.len()));
        last = span.full.end;
    }
    out.push_str(&text[last..]);
    out
}
