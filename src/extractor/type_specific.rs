use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use crate::extractor::{
    classifier::WebsiteCategory,
    document::{PageDocument, element_text},
    model::{MAX_TYPE_ELEMENTS, TypeSpecificInfo},
};

/// Where to look for category-specific items and which heading names them.
struct ContainerRule {
    containers: Selector,
    class_pattern: Regex,
    title: Selector,
}

impl ContainerRule {
    fn new(containers: &str, class_pattern: &str, title: &str) -> Self {
        Self {
            containers: Selector::parse(containers).unwrap(),
            class_pattern: Regex::new(class_pattern).unwrap(),
            title: Selector::parse(title).unwrap(),
        }
    }
}

static PORTFOLIO_RULE: LazyLock<ContainerRule> =
    LazyLock::new(|| ContainerRule::new("section, div", "project|portfolio|work|skill", "h2, h3, h4"));
static BLOG_RULE: LazyLock<ContainerRule> =
    LazyLock::new(|| ContainerRule::new("article, div", "post|article", "h1, h2, h3"));
static ECOMMERCE_RULE: LazyLock<ContainerRule> =
    LazyLock::new(|| ContainerRule::new("div, article", "product|item", "h2, h3, h4"));

fn rule_for(category: WebsiteCategory) -> Option<&'static ContainerRule> {
    match category {
        WebsiteCategory::Portfolio => Some(&*PORTFOLIO_RULE),
        WebsiteCategory::Blog => Some(&*BLOG_RULE),
        WebsiteCategory::Ecommerce => Some(&*ECOMMERCE_RULE),
        WebsiteCategory::General => None,
    }
}

/// Titles of the first few category-specific containers. A container
/// without a title heading contributes nothing.
pub fn extract_type_specific(doc: &PageDocument, category: WebsiteCategory) -> TypeSpecificInfo {
    let elements = rule_for(category)
        .map(|rule| {
            doc.select(&rule.containers)
                .filter(|container| {
                    container
                        .value()
                        .attr("class")
                        .is_some_and(|class| rule.class_pattern.is_match(class))
                })
                .take(MAX_TYPE_ELEMENTS)
                .filter_map(|container| container.select(&rule.title).next())
                .map(element_text)
                .collect()
        })
        .unwrap_or_default();

    TypeSpecificInfo { category, elements }
}
