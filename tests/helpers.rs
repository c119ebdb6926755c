#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};

use commentary_box::{
    app,
    app_state::AppState,
    commentary::{CommentaryGenerator, CommentaryRequest, GenerationError},
};

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Generator double that records every request it sees.
pub struct StubGenerator {
    reply: Result<String, fn() -> GenerationError>,
    pub seen: Mutex<Vec<CommentaryRequest>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(make_error: fn() -> GenerationError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(make_error),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentaryGenerator for StubGenerator {
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, GenerationError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn test_app(generator: Arc<StubGenerator>) -> Router {
    let state = AppState::new(generator);
    app::router(state, &[TEST_ORIGIN.to_string()])
}
