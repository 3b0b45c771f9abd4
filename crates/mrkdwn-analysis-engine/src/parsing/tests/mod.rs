//! Scenario tests for the parsing pipeline.
//!
//! Every scenario runs the invariant checker over its output.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseError, ParseOptions, ParsedDoc,
    blocks::{BlockKind, BlockToken, CodeType, TokenMeta},
    inline::TextLink,
    parse, parse_with,
};

fn parse_checked(text: &str) -> ParsedDoc {
    parse_checked_with(text, &ParseOptions::default())
}

fn parse_checked_with(text: &str, options: &ParseOptions) -> ParsedDoc {
    let mut doc = parse_with(text, options).unwrap();
    invariants::check(text, &doc.tokens, false);
    doc.annotate_inline();
    invariants::check(text, &doc.tokens, true);
    doc
}

fn kinds(tokens: &[BlockToken]) -> Vec<BlockKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn table_rows(token: &BlockToken) -> (&[String], &[Vec<String>]) {
    match &token.meta {
        TokenMeta::Table { header_cells, rows } => (header_cells, rows),
        other => panic!("expected table meta, got {other:?}"),
    }
}

// Termination

#[rstest]
#[case("===")]
#[case("===\n")]
#[case("\n===\n")]
#[case("---\n")]
#[case("---")]
#[case("Titre\n===")]
#[case("\n\n\n")]
#[case("")]
#[case("- \n-\n")]
#[case("|\n|")]
#[case("<!--")]
#[case(">")]
fn degenerate_inputs_terminate(#[case] text: &str) {
    parse_checked(text);
}

#[test]
fn empty_document() {
    assert!(parse_checked("").tokens.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_checked("\n\n\n").tokens.is_empty());
}

#[test]
fn lone_equals_line_is_paragraph() {
    let doc = parse_checked("\n===\n");
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Paragraph]);
    assert_eq!(doc.tokens[0].content, "===");
    assert_eq!(doc.tokens[0].start_line, 2);
}

#[test]
fn lone_dashes_at_start_is_empty_frontmatter() {
    let doc = parse_checked("---\n");
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Frontmatter]);
    assert_eq!(doc.tokens[0].content, "");
}

// Headers

#[test]
fn setext_header_round_trip() {
    let doc = parse_checked("Title\n===");
    assert_eq!(doc.tokens, vec![{
        let mut t = BlockToken::header(1, "Title", 1);
        t.inline = Some(Default::default());
        t
    }]);
}

#[test]
fn atx_header_is_never_setext() {
    let doc = parse_checked("# Heading\n");
    assert_eq!(doc.tokens.len(), 1);
    assert_eq!(doc.tokens[0].level, Some(1));
    assert_eq!(doc.tokens[0].content, "Heading");

    let doc = parse_checked("# Heading\n---");
    assert_eq!(
        kinds(&doc.tokens),
        vec![BlockKind::Header, BlockKind::ThematicBreak]
    );
}

#[rstest]
#[case("# One", 1, "One")]
#[case("###### Six", 6, "Six")]
#[case("Two\n---", 2, "Two")]
#[case("  ## Padded  ", 2, "Padded")]
fn header_levels(#[case] text: &str, #[case] level: u8, #[case] content: &str) {
    let doc = parse_checked(text);
    assert_eq!(doc.tokens[0].level, Some(level));
    assert_eq!(doc.tokens[0].content, content);
}

#[test]
fn seven_hashes_is_paragraph() {
    let doc = parse_checked("####### Seven");
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Paragraph]);
}

// Tables

#[test]
fn table_preserves_interior_empty_cells() {
    let doc = parse_checked("|Col1|Col2|\n|---|---|\n||ttt|");
    let (header, rows) = table_rows(&doc.tokens[0]);
    assert_eq!(header, ["Col1", "Col2"]);
    assert_eq!(rows, [vec!["".to_string(), "ttt".to_string()]]);
}

#[test]
fn ten_column_table() {
    let text = "|C1|C2|C3|C4|C5|C6|C7|C8|C9|C10|\n\
                |---|---|---|---|---|---|---|---|---|---|\n\
                |||ttt|ttt|ttt|ttt|ttt|ttt|ttt|ttt|";
    let doc = parse_checked(text);
    let (header, rows) = table_rows(&doc.tokens[0]);
    assert_eq!(header.len(), 10);
    let expected: Vec<String> = ["", "", "ttt", "ttt", "ttt", "ttt", "ttt", "ttt", "ttt", "ttt"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(rows, [expected]);
}

#[test]
fn table_header_with_list_text_is_still_table() {
    let doc = parse_checked("- a | # b\n|---|---|\n1 | 2\n\nafter");
    assert_eq!(
        kinds(&doc.tokens),
        vec![BlockKind::Table, BlockKind::Paragraph]
    );
    let (header, rows) = table_rows(&doc.tokens[0]);
    assert_eq!(header, ["- a", "# b"]);
    assert_eq!(rows.len(), 1);
}

#[test]
fn table_ends_at_new_block() {
    let doc = parse_checked("a|b\n-|-\n1|2\n# Next");
    assert_eq!(
        kinds(&doc.tokens),
        vec![BlockKind::Table, BlockKind::Header]
    );
    assert_eq!(doc.tokens[1].start_line, 4);
}

// Inline resolution

#[test]
fn reference_link_resolves_from_later_definition() {
    let doc = parse_checked("See [text][g].\n\n[g]: https://example.com");
    let inline = doc.tokens[0].inline.as_ref().unwrap();
    assert_eq!(
        inline.text_links,
        vec![TextLink {
            text: "text".to_string(),
            url: "https://example.com".to_string()
        }]
    );
}

#[test]
fn unresolved_reference_yields_nothing() {
    let doc = parse_checked("See [text][nope].");
    assert!(doc.tokens[0].inline.as_ref().unwrap().text_links.is_empty());
}

#[test]
fn footnote_used_twice_listed_once() {
    let doc = parse_checked("One[^1] and again[^1].\n\n[^1]: body");
    let used = &doc.tokens[0].inline.as_ref().unwrap().footnotes_used;
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].id, "1");
    assert_eq!(used[0].content, "body");
}

#[test]
fn blockquote_and_header_are_scanned() {
    let doc = parse_checked("# A *b*\n\n> quote with `code`");
    assert_eq!(doc.tokens[0].inline.as_ref().unwrap().emphasis, vec!["b"]);
    assert_eq!(
        doc.tokens[1].inline.as_ref().unwrap().inline_code,
        vec!["code"]
    );
}

// Fences

#[test]
fn unclosed_fence_is_an_error_with_line() {
    let err = parse("Intro\n\n```rust\nfn main() {}\n").unwrap_err();
    assert_eq!(err, ParseError::UnclosedFence { line: 3 });
    assert_eq!(
        err.to_string(),
        "Unclosed fenced code block starting at line 3"
    );
}

#[test]
fn fence_body_starting_with_underline_stays_code() {
    let doc = parse_checked("Config:\n\n```yaml\n---\nkey: v\n```\n");
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Paragraph, BlockKind::Code]);
    let code = &doc.tokens[1];
    assert_eq!(code.start_line, 3);
    assert_eq!(code.language(), Some("yaml"));
    assert_eq!(code.content, "---\nkey: v");
    assert!(matches!(
        code.meta,
        TokenMeta::Code {
            code_type: CodeType::Fenced,
            ..
        }
    ));

    let doc = parse_checked_with("```\n===\n```", &ParseOptions::tolerant());
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Code]);
    assert_eq!(doc.tokens[0].content, "===");
}

#[test]
fn tolerant_mode_absorbs_unclosed_fence() {
    let doc = parse_checked_with("Intro\n\n```\nbody\n# still code", &ParseOptions::tolerant());
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::Paragraph, BlockKind::Code]);
    assert_eq!(doc.tokens[1].language(), None);
    assert_eq!(doc.tokens[1].content, "body\n# still code");
}

#[test]
fn mixed_code_blocks() {
    let text = r#"
Here's a fenced code block:
```python
def hello():
    print("Hello")
```

Here's an indented code block:
    def world():
        print("World")
        return True

    for i in range(3):
        world()

Mixed block:
```python
def mixed():
    print("test")
```
    def indented():
        return True
"#;
    let doc = parse_checked(text);
    let code: Vec<_> = doc
        .tokens
        .iter()
        .filter_map(|t| match &t.meta {
            TokenMeta::Code { language, code_type } => {
                Some((t.start_line, language.as_deref(), *code_type))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        code,
        vec![
            (3, Some("python"), CodeType::Fenced),
            (9, None, CodeType::Indented),
            (13, None, CodeType::Indented),
            (17, Some("python"), CodeType::Fenced),
            (21, None, CodeType::Indented),
        ]
    );
    assert_eq!(doc.tokens[3].content, "def world():\n    print(\"World\")\n    return True");
}

// Modes

#[test]
fn fences_only_mode_keeps_component_markup_opaque() {
    let text = "---\ntitle: x\n---\nimport Chart from './chart'\n\n<Chart data={[1, 2]} />\n\n```js\nlet a = 1;\n```\n\n```";
    let doc = parse_checked_with(text, &ParseOptions::mdx());
    assert_eq!(
        kinds(&doc.tokens),
        vec![
            BlockKind::Frontmatter,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Code,
            BlockKind::Code,
        ]
    );
    assert_eq!(doc.tokens[2].content, "<Chart data={[1, 2]} />");
}

// Lists

#[test]
fn task_list_items() {
    let doc = parse_checked("- [ ] todo\n- [x] done\n- plain");
    let items = doc.tokens[0].list_items();
    assert_eq!(items.len(), 3);
    assert_eq!((items[0].is_task, items[0].checked), (true, Some(false)));
    assert_eq!(items[0].text, "todo");
    assert_eq!((items[1].is_task, items[1].checked), (true, Some(true)));
    assert_eq!((items[2].is_task, items[2].checked), (false, None));
}

#[test]
fn nested_items_fold_into_parent_list() {
    let doc = parse_checked("- Item 1\n- Item 2\n  - Sub A\n  - Sub B\n\n## Next");
    assert_eq!(
        kinds(&doc.tokens),
        vec![BlockKind::UnorderedList, BlockKind::Header]
    );
    assert_eq!(doc.tokens[0].list_items().len(), 4);
}

#[test]
fn list_kind_follows_first_item() {
    let doc = parse_checked("1. one\n2. two");
    assert_eq!(kinds(&doc.tokens), vec![BlockKind::OrderedList]);
}

// Determinism

#[test]
fn reparsing_is_idempotent() {
    let text = "# T\n\npara [a](b) *c*\n\n- x\n\n|a|b|\n|-|-|\n|1|2|\n\n[^1]: n";
    assert_eq!(parse_checked(text), parse_checked(text));
}

#[test]
fn crlf_line_endings() {
    let doc = parse_checked("# Title\r\n\r\ntext\r\n");
    assert_eq!(doc.tokens[0].content, "Title");
    assert_eq!(doc.tokens[1].content, "text");
    assert_eq!(doc.tokens[1].start_line, 3);
}
