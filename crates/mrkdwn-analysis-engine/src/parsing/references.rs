//! Document-wide reference tables, built in a single pre-pass over the full
//! text so that references can resolve to definitions appearing later.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Link reference definitions: lower-cased id -> URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceTable(BTreeMap<String, String>);

impl ReferenceTable {
    /// Looks up `id` case-insensitively.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.0.get(&id.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Footnote definitions: id (case-sensitive) -> body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FootnoteTable(BTreeMap<String, String>);

impl FootnoteTable {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn link_definition() -> &'static Regex {
    static LINK_DEF: OnceLock<Regex> = OnceLock::new();
    LINK_DEF.get_or_init(|| {
        Regex::new(r"(?m)^[ ]{0,3}\[([^\]\^\n][^\]\n]*)\]:[ \t]*<?([^\s>]+)>?")
            .expect("Invalid link definition regex")
    })
}

fn footnote_definition() -> &'static Regex {
    static FOOTNOTE_DEF: OnceLock<Regex> = OnceLock::new();
    FOOTNOTE_DEF.get_or_init(|| {
        Regex::new(r"(?m)^[ ]{0,3}\[\^([^\]\n]+)\]:[ \t]*(.*)$")
            .expect("Invalid footnote definition regex")
    })
}

/// Scans `text` for `[id]: url` and `[^id]: body` lines.
///
/// Later definitions of the same id replace earlier ones. Lines that do not
/// match either form are ignored.
pub fn build_tables(text: &str) -> (ReferenceTable, FootnoteTable) {
    let mut references = ReferenceTable::default();
    for caps in link_definition().captures_iter(text) {
        references
            .0
            .insert(caps[1].trim().to_lowercase(), caps[2].to_string());
    }

    let mut footnotes = FootnoteTable::default();
    for caps in footnote_definition().captures_iter(text) {
        footnotes
            .0
            .insert(caps[1].to_string(), caps[2].trim().to_string());
    }

    log::debug!(
        "reference tables: {} link definitions, {} footnotes",
        references.len(),
        footnotes.len()
    );
    (references, footnotes)
}
