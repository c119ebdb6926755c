use scraper::Selector;
use std::sync::LazyLock;

use crate::extractor::{
    document::{PageDocument, element_text},
    model::{
        ContentDigest, MAX_HEADINGS_PER_LEVEL, MAX_NAV_LINKS, MAX_PARAGRAPHS, MIN_PARAGRAPH_CHARS,
    },
};

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static H2_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static NAV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"nav, [role="navigation"]"#).unwrap());
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

pub fn extract_content(doc: &PageDocument) -> ContentDigest {
    ContentDigest {
        headings: extract_headings(doc),
        main_content: extract_main_content(doc),
        links: extract_nav_links(doc),
    }
}

/// First two `<h1>` then first two `<h2>`.
fn extract_headings(doc: &PageDocument) -> Vec<String> {
    [&*H1_SELECTOR, &*H2_SELECTOR]
        .into_iter()
        .flat_map(|selector| {
            doc.select(selector)
                .take(MAX_HEADINGS_PER_LEVEL)
                .map(element_text)
        })
        .collect()
}

/// The first paragraphs of the page, keeping only the substantial ones.
fn extract_main_content(doc: &PageDocument) -> Vec<String> {
    doc.select(&PARAGRAPH_SELECTOR)
        .take(MAX_PARAGRAPHS)
        .map(element_text)
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect()
}

fn extract_nav_links(doc: &PageDocument) -> Vec<String> {
    let Some(nav) = doc.select(&NAV_SELECTOR).next() else {
        return Vec::new();
    };

    nav.select(&LINK_SELECTOR)
        .take(MAX_NAV_LINKS)
        .map(element_text)
        .collect()
}
