use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::commentary::Persona;

pub const INVALID_URL: &str = "Invalid URL format";
pub const INVALID_COMMENTATOR: &str = "Invalid commentator selection";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Absolute http(s) URL of the page to review.
    pub url: String,
    /// One of `ravi`, `harsha`, `jatin`.
    pub commentator: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub commentary: String,
    pub website_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AnalyzeRequest {
    /// URL first, then commentator; the first failure wins.
    pub fn validate(&self) -> Result<(Url, Persona), String> {
        let url = parse_page_url(&self.url).ok_or_else(|| INVALID_URL.to_string())?;
        let persona = self
            .commentator
            .parse::<Persona>()
            .map_err(|_| INVALID_COMMENTATOR.to_string())?;
        Ok((url, persona))
    }
}

fn parse_page_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?;
    let is_ip = matches!(url.host(), Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)));
    if !is_ip && host != "localhost" && !host.contains('.') {
        return None;
    }

    Some(url)
}
