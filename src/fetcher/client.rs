use crate::fetcher::{
    errors::FetchError,
    pipeline::process_response,
    types::{FetchOptions, PageResponse, USER_AGENT},
};
use reqwest::{Client, ClientBuilder, header};
use tracing::{debug, instrument};

/// Build a client for exactly one fetch. Nothing is pooled across calls, so
/// concurrent requests never share connection state; the client and its
/// connections are dropped when the fetch returns.
fn build_client(options: &FetchOptions) -> Result<Client, FetchError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );

    ClientBuilder::new()
        .timeout(options.timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// Single GET with a bounded timeout. Non-2xx answers are errors.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str, options: &FetchOptions) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;
    let client = build_client(options)?;

    let response = client
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    if let Some(content_length) = response.content_length()
        && content_length > options.max_body_size
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    let body_bytes = response
        .bytes()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Content-Length may be missing or wrong
    if body_bytes.len() as u64 > options.max_body_size {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    debug!(
        status = %status,
        size = body_bytes.len(),
        content_type = %content_type,
        "page downloaded"
    );

    Ok(process_response(final_url, status, &body_bytes, &content_type))
}
