use scraper::{ElementRef, Html, Selector, element_ref::Select};
use std::sync::LazyLock;

use crate::extractor::model::collapse_whitespace;

// html5ever parses with scripting enabled, so `<noscript>` bodies arrive as
// raw markup text.
static NON_CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script, style, noscript, template").unwrap());

/// A leniently parsed page with `<script>`, `<style>`, `<noscript>` and
/// `<template>` subtrees removed.
///
/// Every query walks down from the root element, so detached nodes left in
/// the arena by the cleanup pass are never visited.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parse arbitrary markup. html5ever recovers from any input, so this
    /// cannot fail.
    pub fn parse(source: &str) -> Self {
        let mut html = Html::parse_document(source);
        strip_non_content(&mut html);
        Self { html }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Matching elements in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.root().select(selector)
    }

    /// Every element in document order, the root included.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.root().descendants().filter_map(ElementRef::wrap)
    }

    /// All remaining text nodes concatenated, whitespace collapsed. Inline
    /// markup never splits a word.
    pub fn visible_text(&self) -> String {
        collapse_whitespace(&self.root().text().collect::<String>())
    }
}

/// Trimmed text content of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn strip_non_content(html: &mut Html) {
    let ids: Vec<_> = html
        .root_element()
        .select(&NON_CONTENT_SELECTOR)
        .map(|element| element.id())
        .collect();

    for id in ids {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }
}
