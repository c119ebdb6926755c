use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::{
    document::PageDocument,
    model::{ColorSignals, MAX_COLOR_SIGNALS},
};

static COLOR_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"bg-|text-|color-").unwrap());

const STYLE_MARKERS: [&str; 3] = ["color", "background-color", "background"];

/// Raw colour hints: first class token of utility-styled elements, then
/// colour-bearing inline styles. No colour parsing happens here.
pub fn extract_colors(doc: &PageDocument) -> ColorSignals {
    let mut signals = ColorSignals::new();

    let class_tokens = doc.elements().filter_map(|element| {
        let class = element.value().attr("class")?;
        if !COLOR_CLASS.is_match(class) {
            return None;
        }
        class.split_whitespace().next().map(str::to_string)
    });

    let styles = doc.elements().filter_map(|element| {
        let style = element.value().attr("style")?.trim().to_lowercase();
        STYLE_MARKERS
            .iter()
            .any(|marker| style.contains(marker))
            .then_some(style)
    });

    for signal in class_tokens.chain(styles) {
        if signals.len() == MAX_COLOR_SIGNALS {
            break;
        }
        if !signals.contains(&signal) {
            signals.push(signal);
        }
    }

    signals
}
