pub mod analyze;
pub mod app;
pub mod app_state;
pub mod commentary;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
