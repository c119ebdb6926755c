//! Configuration handling for the service.
//!
//! Everything comes from environment variables. Only the generative-service
//! credential is mandatory; the process refuses to start without it.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::commentary::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::extractor::SegmenterKind;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
pub const ENV_SENTENCE_SEGMENTER: &str = "SENTENCE_SEGMENTER";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

/// Load a `.env` file from the working directory or its parents, if any.
/// Variables already present in the process environment are left alone.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Same as [`load_dotenv`] for an explicit file. Returns false when the file
/// is missing or unreadable.
pub fn load_dotenv_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    openai_api_key: String,
    openai_base_url: String,
    openai_model: String,
    bind_addr: String,
    allowed_origins: Vec<String>,
    segmenter: SegmenterKind,
}

impl Config {
    /// Create a config with defaults for everything but the credential.
    pub fn new(openai_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            segmenter: SegmenterKind::default(),
        }
    }

    /// Load from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai_api_key = env::var(ENV_OPENAI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_OPENAI_API_KEY))?;

        let mut config = Self::new(openai_api_key);

        if let Ok(base_url) = env::var(ENV_OPENAI_BASE_URL) {
            url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
                field: ENV_OPENAI_BASE_URL,
                reason: e.to_string(),
            })?;
            config.openai_base_url = base_url;
        }
        if let Ok(model) = env::var(ENV_OPENAI_MODEL) {
            config.openai_model = model;
        }
        if let Ok(bind_addr) = env::var(ENV_BIND_ADDR) {
            config.bind_addr = bind_addr;
        }
        if let Ok(origins) = env::var(ENV_ALLOWED_ORIGINS) {
            config.allowed_origins = parse_origins(&origins);
        }
        if let Ok(segmenter) = env::var(ENV_SENTENCE_SEGMENTER) {
            config.segmenter = segmenter
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    field: ENV_SENTENCE_SEGMENTER,
                    reason,
                })?;
        }

        Ok(config)
    }

    /// Credential for the generative-text service.
    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }
    pub fn openai_base_url(&self) -> &str {
        &self.openai_base_url
    }
    pub fn openai_model(&self) -> &str {
        &self.openai_model
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Origins allowed by CORS.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
    pub fn segmenter(&self) -> SegmenterKind {
        self.segmenter
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("bind_addr", &self.bind_addr)
            .field("allowed_origins", &self.allowed_origins)
            .field("segmenter", &self.segmenter)
            .finish()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Errors that can occur while building a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    Missing(&'static str),
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(field) => {
                write!(f, "{} environment variable is not set", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
