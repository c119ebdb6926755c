use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{analyze::dtos::ErrorResponse, commentary::GenerationError, fetcher::FetchError};

/// Every way an analysis request can fail, mapped onto an HTTP status.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("{0}")]
    Validation(String),

    #[error("Error fetching website content: {0}")]
    Fetch(#[from] FetchError),

    #[error("Error generating commentary: {0}")]
    Generation(#[from] GenerationError),

    #[error("Error analyzing website content: {0}")]
    Extraction(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Fetch(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(message) => info!(%message, "rejected analyze request"),
            Self::Fetch(err) => warn!(
                error = %err,
                upstream_status = ?err.status().map(|status| status.as_u16()),
                "page fetch failed"
            ),
            Self::Generation(err) => error!(error = %err, "commentary generation failed"),
            Self::Extraction(message) => error!(%message, "page analysis task failed"),
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
