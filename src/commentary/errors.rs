use thiserror::Error;

/// Failure talking to the generative-text service. Never retried.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("generation timed out")]
    Timeout,

    #[error("service returned {status}: {body}")]
    Service {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode service response: {0}")]
    Decode(String),

    #[error("service returned no commentary")]
    EmptyResponse,
}

impl GenerationError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
