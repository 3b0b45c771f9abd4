use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html};

/// Embedded markup tags inside textual blocks.
///
/// A cheap pattern check gates the HTML parser, which then yields one entry
/// per element in document order.
pub struct HtmlTag;

impl HtmlTag {
    fn pattern() -> &'static Regex {
        static TAG: OnceLock<Regex> = OnceLock::new();
        TAG.get_or_init(|| {
            Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").expect("Invalid HTML tag regex")
        })
    }

    /// Serialized HTML of every element found in `text`.
    pub fn extract(text: &str) -> Vec<String> {
        if !Self::pattern().is_match(text) {
            return vec![];
        }
        let fragment = Html::parse_fragment(text);
        fragment
            .root_element()
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|element| element.html())
            .collect()
    }
}
