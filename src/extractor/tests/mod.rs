use std::fs;

use crate::extractor::{Summarizer, WebsiteCategory, analyze, model::CONTENT_SAMPLE_CHARS};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_analyze_ecommerce_page() {
    let digest = analyze(&fixture("ecommerce.html"), &Summarizer::default());

    assert_eq!(digest.category, WebsiteCategory::Ecommerce);
    assert_eq!(digest.category.label(), "E-commerce Website");
    assert_eq!(
        digest.colors,
        vec!["hero", "btn", "background-color: #fff8e1"]
    );
    assert_eq!(
        digest.content.headings,
        vec!["Handmade Mugs for Every Morning", "Speckled Stoneware Mug"]
    );
    assert_eq!(digest.content.main_content.len(), 3);
    assert_eq!(digest.content.links, vec!["Home", "Mugs", "Teapots", "Cart"]);

    assert_eq!(digest.type_specific.category, WebsiteCategory::Ecommerce);
    assert_eq!(digest.type_specific.elements.len(), 3);
    assert_eq!(digest.type_specific.elements[2], "Celadon Tea Bowl");

    assert_eq!(digest.summary_sentences.len(), 3);
    assert!(digest.summary_sentences[0].starts_with("Mug Emporium"));
    assert!(digest.summary_sentences[1].starts_with("We ship worldwide"));
}

#[test]
fn test_scripts_and_styles_never_leak() {
    let digest = analyze(&fixture("ecommerce.html"), &Summarizer::default());
    let sample = digest.content_sample();

    assert!(!sample.contains("analytics"));
    assert!(!sample.contains("#fafafa"));
}

#[test]
fn test_analyze_blog_page() {
    let digest = analyze(&fixture("blog.html"), &Summarizer::default());

    assert_eq!(digest.category, WebsiteCategory::Blog);
    assert_eq!(digest.colors, vec!["text-muted"]);
    assert_eq!(
        digest.content.headings,
        vec![
            "Notes on Software",
            "Why Small Functions Matter",
            "Reading Code Out Loud"
        ]
    );
    assert_eq!(digest.content.main_content.len(), 2);
    assert_eq!(digest.content.links, vec!["Home", "Archive", "About"]);
    assert_eq!(
        digest.type_specific.elements,
        vec!["Why Small Functions Matter", "Reading Code Out Loud"]
    );
}

#[test]
fn test_analyze_portfolio_page() {
    let digest = analyze(&fixture("portfolio.html"), &Summarizer::default());

    assert_eq!(digest.category, WebsiteCategory::Portfolio);
    assert!(digest.colors.is_empty());
    assert!(digest.content.main_content.is_empty());
    assert!(digest.content.links.is_empty());
    assert_eq!(
        digest.type_specific.elements,
        vec![
            "Transit App Redesign",
            "Transit App Redesign",
            "Museum Wayfinding"
        ]
    );
}

#[test]
fn test_analyze_unmarked_page() {
    let digest = analyze(&fixture("general.html"), &Summarizer::default());

    assert_eq!(digest.category, WebsiteCategory::General);
    assert_eq!(digest.category.label(), "General Website");
    assert!(digest.colors.is_empty());
    assert!(digest.content.headings.is_empty());
    assert!(digest.content.main_content.is_empty());
    assert!(digest.content.links.is_empty());
    assert!(digest.type_specific.elements.is_empty());
    assert_eq!(digest.summary_sentences, vec!["Hello"]);
}

#[test]
fn test_tag_manager_noscript_never_summarized() {
    let html = fixture("tag_manager.html");

    for summarizer in [
        Summarizer::default(),
        Summarizer::from_kind(crate::extractor::SegmenterKind::Period),
    ] {
        let digest = analyze(&html, &summarizer);
        let sample = digest.content_sample();

        assert!(!sample.contains("iframe"), "{sample}");
        assert!(!sample.contains("googletagmanager"), "{sample}");
        assert!(digest.colors.is_empty());
    }

    let digest = analyze(&html, &Summarizer::default());
    assert_eq!(
        digest.summary_sentences,
        vec!["Acme Rockets Welcome We build rockets.", "They fly high.", "Launches every Friday."]
    );
}

#[test]
fn test_buy_button_with_long_paragraphs() {
    let paragraph = "This paragraph comfortably exceeds the fifty character minimum length.";
    let html = format!(
        "<html><body><button>Buy Now</button><p>{p}</p><p>{p}</p><p>{p}</p></body></html>",
        p = paragraph
    );
    let digest = analyze(&html, &Summarizer::default());

    assert_eq!(digest.category.label(), "E-commerce Website");
    assert_eq!(digest.content.main_content.len(), 3);
}

#[test]
fn test_empty_page() {
    let digest = analyze("", &Summarizer::default());
    assert_eq!(digest.category, WebsiteCategory::General);
    assert!(digest.summary_sentences.is_empty());
    assert_eq!(digest.content_sample(), "");

    let digest = analyze("", &Summarizer::from_kind(crate::extractor::SegmenterKind::Period));
    assert!(digest.summary_sentences.is_empty());
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><article><p>Unclosed tags<div>More content";
    let digest = analyze(html, &Summarizer::default());

    assert_eq!(digest.category, WebsiteCategory::Blog);
    assert!(digest.content_sample().contains("Unclosed tags"));
}

#[test]
fn test_content_sample_bounded() {
    let sentence = format!("{}. ", "Long sentence text ".repeat(40).trim());
    let html = format!("<p>{}</p>", sentence.repeat(5));
    let digest = analyze(&html, &Summarizer::default());

    assert_eq!(digest.summary_sentences.len(), 3);
    assert_eq!(digest.content_sample().chars().count(), CONTENT_SAMPLE_CHARS);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_analyze_never_panics(html in ".*") {
            let _ = analyze(&html, &Summarizer::default());
        }

        #[test]
        fn test_caps_always_hold(
            html in "(<(p|h1|h2|nav|a|button|div class=\"bg-x post product\")>[a-zA-Z .]{0,80}){0,40}",
        ) {
            let digest = analyze(&html, &Summarizer::default());
            prop_assert!(digest.colors.len() <= 5);
            prop_assert!(digest.content.headings.len() <= 4);
            prop_assert!(digest.content.main_content.iter().all(|p| p.chars().count() > 50));
            prop_assert!(digest.content.links.len() <= 5);
            prop_assert!(digest.type_specific.elements.len() <= 3);
            prop_assert!(digest.summary_sentences.len() <= 3);
            prop_assert!(digest.content_sample().chars().count() <= CONTENT_SAMPLE_CHARS);
        }
    }
}
