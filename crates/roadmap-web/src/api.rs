//! Client for the roadmap generation backend

use roadmap_core::{ErrorBody, GenerateRequest, LabelUpdate};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
}

#[derive(Clone)]
pub struct RoadmapApi {
    client: reqwest::Client,
    base_url: String,
}

impl RoadmapApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Backend URL baked in at build time through `ROADMAP_API_URL`.
    pub fn from_env() -> Self {
        Self::new(option_env!("ROADMAP_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<Vec<LabelUpdate>, ApiError> {
        let response = self
            .client
            .post(format!("{}/generate_roadmap", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
