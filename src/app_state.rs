use std::sync::Arc;

use crate::{
    commentary::{CommentaryGenerator, OpenAiGenerator},
    config::Config,
    extractor::Summarizer,
    fetcher::FetchOptions,
};

/// Read-only per-process state. Nothing in here is mutated by requests, and
/// outbound clients are created per call rather than stored.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn CommentaryGenerator>,
    pub summarizer: Summarizer,
    pub fetch_options: FetchOptions,
}

impl AppState {
    pub fn new(generator: Arc<dyn CommentaryGenerator>) -> Self {
        Self {
            generator,
            summarizer: Summarizer::default(),
            fetch_options: FetchOptions::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let generator = OpenAiGenerator::new(config.openai_api_key())
            .with_base_url(config.openai_base_url())
            .with_model(config.openai_model());

        Self {
            generator: Arc::new(generator),
            summarizer: Summarizer::from_kind(config.segmenter()),
            fetch_options: FetchOptions::default(),
        }
    }
}
