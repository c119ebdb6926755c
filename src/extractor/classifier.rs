use regex::Regex;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use utoipa::ToSchema;

use crate::extractor::document::PageDocument;

static ACTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("button, a").unwrap());
static ARTICLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());

static COMMERCE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cart|buy|shop|price").unwrap());
static BLOG_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)post|blog|article").unwrap());
static PORTFOLIO_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)portfolio|project|work").unwrap());

/// Coarse site category. Serialized as the human label the frontend shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum WebsiteCategory {
    #[serde(rename = "E-commerce Website")]
    Ecommerce,
    #[serde(rename = "Blog")]
    Blog,
    #[serde(rename = "Portfolio")]
    Portfolio,
    #[serde(rename = "General Website")]
    General,
}

impl WebsiteCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce Website",
            Self::Blog => "Blog",
            Self::Portfolio => "Portfolio",
            Self::General => "General Website",
        }
    }
}

impl fmt::Display for WebsiteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = fn(&PageDocument) -> bool;

/// Evaluated top to bottom, first match wins.
const RULES: &[(WebsiteCategory, Rule)] = &[
    (WebsiteCategory::Ecommerce, has_commerce_action),
    (WebsiteCategory::Blog, has_blog_markup),
    (WebsiteCategory::Portfolio, has_portfolio_markup),
];

pub fn classify(doc: &PageDocument) -> WebsiteCategory {
    RULES
        .iter()
        .find(|(_, rule)| rule(doc))
        .map(|(category, _)| *category)
        .unwrap_or(WebsiteCategory::General)
}

fn has_commerce_action(doc: &PageDocument) -> bool {
    doc.select(&ACTION_SELECTOR)
        .any(|element| COMMERCE_TEXT.is_match(&element.text().collect::<String>()))
}

fn has_blog_markup(doc: &PageDocument) -> bool {
    doc.select(&ARTICLE_SELECTOR).next().is_some() || any_class_matches(doc, &BLOG_CLASS)
}

fn has_portfolio_markup(doc: &PageDocument) -> bool {
    any_class_matches(doc, &PORTFOLIO_CLASS)
}

fn any_class_matches(doc: &PageDocument, pattern: &Regex) -> bool {
    doc.elements()
        .filter_map(|element| element.value().attr("class"))
        .any(|class| pattern.is_match(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_html(html: &str) -> WebsiteCategory {
        classify(&PageDocument::parse(html))
    }

    #[test]
    fn test_commerce_button() {
        assert_eq!(
            classify_html("<button>Add to Cart</button>"),
            WebsiteCategory::Ecommerce
        );
        assert_eq!(
            classify_html(r#"<a href="/pricing">See PRICES</a>"#),
            WebsiteCategory::Ecommerce
        );
    }

    #[test]
    fn test_commerce_wins_over_blog() {
        let html = "<article><h1>Review</h1><button>Buy now</button></article>";
        assert_eq!(classify_html(html), WebsiteCategory::Ecommerce);
    }

    #[test]
    fn test_commerce_text_outside_actions_ignored() {
        assert_eq!(
            classify_html("<p>Buy low, sell high.</p>"),
            WebsiteCategory::General
        );
    }

    #[test]
    fn test_blog_by_article_tag() {
        assert_eq!(
            classify_html("<article><p>Hello</p></article>"),
            WebsiteCategory::Blog
        );
    }

    #[test]
    fn test_blog_by_class_case_insensitive() {
        assert_eq!(
            classify_html(r#"<div class="Latest-Posts">x</div>"#),
            WebsiteCategory::Blog
        );
    }

    #[test]
    fn test_blog_wins_over_portfolio() {
        let html = r#"<div class="portfolio"><div class="blog-entry">x</div></div>"#;
        assert_eq!(classify_html(html), WebsiteCategory::Blog);
    }

    #[test]
    fn test_portfolio_by_class() {
        assert_eq!(
            classify_html(r#"<section class="my-projects">x</section>"#),
            WebsiteCategory::Portfolio
        );
        assert_eq!(
            classify_html(r#"<div class="selected WORK">x</div>"#),
            WebsiteCategory::Portfolio
        );
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify_html("<div>Hello</div>"), WebsiteCategory::General);
        assert_eq!(classify_html(""), WebsiteCategory::General);
    }

    #[test]
    fn test_script_text_does_not_classify() {
        let html = r#"<script>document.write("<button>buy</button>")</script><div>Hi</div>"#;
        assert_eq!(classify_html(html), WebsiteCategory::General);
    }

    #[test]
    fn test_deterministic() {
        let html = r#"<div class="project"><a>Shop</a></div>"#;
        let doc = PageDocument::parse(html);
        assert_eq!(classify(&doc), classify(&doc));
        assert_eq!(classify(&doc), WebsiteCategory::Ecommerce);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WebsiteCategory::Ecommerce.to_string(), "E-commerce Website");
        assert_eq!(WebsiteCategory::General.label(), "General Website");
        assert_eq!(
            serde_json::to_string(&WebsiteCategory::Portfolio).unwrap(),
            "\"Portfolio\""
        );
    }
}
