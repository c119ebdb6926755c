pub mod classifier;
pub mod colors;
pub mod content;
pub mod digest;
pub mod document;
pub mod model;
pub mod summarizer;
pub mod type_specific;

#[cfg(test)]
mod tests;

pub use classifier::WebsiteCategory;
pub use document::PageDocument;
pub use model::{ColorSignals, ContentDigest, Digest, TypeSpecificInfo};
pub use summarizer::{SegmenterKind, SentenceSegmenter, Summarizer};

use tracing::{debug, instrument};

/// Parse a page and derive its full digest.
///
/// The parsed tree is not `Send`, so async callers
/// run this on the blocking pool and only the owned [`Digest`] crosses back.
#[instrument(skip_all, fields(html_len = html.len()))]
pub fn analyze(html: &str, summarizer: &Summarizer) -> Digest {
    // 1. Parse and strip scripts/styles
    let doc = PageDocument::parse(html);

    // 2. Category first; only the type-specific pass depends on it
    let category = classifier::classify(&doc);

    // 3. Independent extractors over the same tree
    let colors = colors::extract_colors(&doc);
    let content = content::extract_content(&doc);
    let type_specific = type_specific::extract_type_specific(&doc, category);

    // 4. Positional summary of the visible text
    let summary = summarizer.summarize(&doc.visible_text());

    debug!(
        category = %category,
        colors = colors.len(),
        headings = content.headings.len(),
        paragraphs = content.main_content.len(),
        links = content.links.len(),
        type_elements = type_specific.elements.len(),
        sentences = summary.len(),
        "page analyzed"
    );

    digest::assemble(summary, category, colors, content, type_specific)
}
