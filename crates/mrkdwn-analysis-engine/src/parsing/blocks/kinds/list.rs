use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// List item markers: `1.` for ordered, `-`, `+` or `*` for unordered.
pub struct ListMarker;

impl ListMarker {
    fn item() -> &'static Regex {
        static ITEM: OnceLock<Regex> = OnceLock::new();
        ITEM.get_or_init(|| {
            Regex::new(r"^\s*(?:(\d+)\.|[-+*])\s+(.*)$").expect("Invalid list item regex")
        })
    }

    /// Returns the list kind and trimmed item text of a list item line.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        let caps = Self::item().captures(line)?;
        let kind = if caps.get(1).is_some() {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        };
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        Some((kind, text))
    }
}

/// `[ ]` / `[x]` prefix of a task item.
pub struct TaskMarker;

impl TaskMarker {
    fn task() -> &'static Regex {
        static TASK: OnceLock<Regex> = OnceLock::new();
        TASK.get_or_init(|| {
            Regex::new(r"^\[([ xX])\](?:\s+(.*))?$").expect("Invalid task marker regex")
        })
    }

    /// Returns `(checked, text)` for a task item, `None` for a plain item.
    pub fn parse(text: &str) -> Option<(bool, &str)> {
        let caps = Self::task().captures(text)?;
        let checked = !caps[1].trim().is_empty();
        let rest = caps.get(2).map_or("", |m| m.as_str().trim());
        Some((checked, rest))
    }
}
