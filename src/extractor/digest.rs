use crate::extractor::{
    classifier::WebsiteCategory,
    model::{CONTENT_SAMPLE_CHARS, ColorSignals, ContentDigest, Digest, TypeSpecificInfo, truncate_chars},
};

/// Bundle the independent extraction results. No transformation happens here.
pub fn assemble(
    summary_sentences: Vec<String>,
    category: WebsiteCategory,
    colors: ColorSignals,
    content: ContentDigest,
    type_specific: TypeSpecificInfo,
) -> Digest {
    Digest {
        summary_sentences,
        category,
        colors,
        content,
        type_specific,
    }
}

impl Digest {
    /// Summary sentences as one flat string, capped for the prompt.
    pub fn content_sample(&self) -> String {
        let joined = self.summary_sentences.join(" ");
        truncate_chars(&joined, CONTENT_SAMPLE_CHARS).to_string()
    }
}
