use axum::{Json, extract::State};
use tracing::{debug, info, instrument};
use url::Url;

use crate::{
    analyze::{
        dtos::{AnalyzeRequest, AnalyzeResponse, ErrorResponse},
        errors::AnalyzeError,
    },
    app_state::AppState,
    commentary::{CommentaryRequest, Persona},
    extractor,
    fetcher::fetch,
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Commentary generated", body = AnalyzeResponse),
        (status = 400, description = "Invalid input or page could not be fetched", body = ErrorResponse),
        (status = 500, description = "Commentary generation failed", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    let (url, persona) = payload.validate().map_err(AnalyzeError::Validation)?;
    info!(%url, %persona, "analyzing website");

    let response = run_analysis(&state, &url, persona).await?;
    Ok(Json(response))
}

/// fetch -> parse/extract/summarize -> generate. Any stage failing stops the
/// pipeline; no partial digest ever reaches the generator.
#[instrument(skip_all, fields(url = %url, persona = %persona))]
pub async fn run_analysis(
    state: &AppState,
    url: &Url,
    persona: Persona,
) -> Result<AnalyzeResponse, AnalyzeError> {
    let page = fetch(url.as_str(), &state.fetch_options).await?;
    debug!(
        final_url = %page.url_final,
        status = %page.status,
        charset = ?page.charset,
        "page fetched"
    );

    let summarizer = state.summarizer.clone();
    let body = page.body_utf8;
    let digest = tokio::task::spawn_blocking(move || extractor::analyze(&body, &summarizer))
        .await
        .map_err(|e| AnalyzeError::Extraction(e.to_string()))?;

    let website_type = digest.category.label().to_string();
    info!(website_type = %website_type, "page classified");

    let request = CommentaryRequest::new(persona, digest);
    let commentary = state.generator.generate(&request).await?;

    Ok(AnalyzeResponse {
        commentary,
        website_type,
    })
}
