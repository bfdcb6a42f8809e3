//! Roadmap advisor backed by the Gemini generateContent API

use crate::error::{ApiError, ApiResult};
use crate::prompt::{response_schema, RoadmapPrompt};
use async_trait::async_trait;
use roadmap_core::LabelUpdate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Produces node labels for a roadmap prompt.
#[async_trait]
pub trait RoadmapAdvisor: Send + Sync {
    async fn generate(&self, prompt: &RoadmapPrompt) -> ApiResult<Vec<LabelUpdate>>;
}

pub struct GeminiAdvisor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiAdvisor {
    pub fn new(api_key: String, model: String, temperature: f32) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
            temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }

    fn request_body(&self, prompt: &RoadmapPrompt) -> Value {
        let contents: Vec<Value> = prompt
            .user_parts
            .iter()
            .map(|text| json!({ "role": "user", "parts": [{ "text": text }] }))
            .collect();

        json!({
            "systemInstruction": { "parts": [{ "text": prompt.system_instruction }] },
            "contents": contents,
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": self.temperature,
            }
        })
    }
}

#[async_trait]
impl RoadmapAdvisor for GeminiAdvisor {
    async fn generate(&self, prompt: &RoadmapPrompt) -> ApiResult<Vec<LabelUpdate>> {
        debug!("Calling {} with {} prompt parts", self.model, prompt.user_parts.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Advisor(format!("{} returned {}: {}", self.model, status, body)));
        }

        parse_response(&body)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Extract the structured label array from a generateContent response.
pub fn parse_response(body: &str) -> ApiResult<Vec<LabelUpdate>> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| ApiError::Advisor("response contained no candidates".to_string()))?;

    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    debug!("Advisor returned {} bytes", text.len());
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor() -> GeminiAdvisor {
        GeminiAdvisor::new("key".to_string(), DEFAULT_MODEL.to_string(), 0.8).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let prompt = RoadmapPrompt {
            system_instruction: "advise".to_string(),
            user_parts: vec!["one".to_string(), "two".to_string()],
        };
        let body = advisor().request_body(&prompt);

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "advise");
        assert_eq!(body["contents"].as_array().unwrap().len(), 2);
        assert_eq!(body["contents"][1]["role"], "user");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "two");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            advisor().endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_parse_response_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "[{\"id\":\"1\",\"newLabel\":" },
                        { "text": "\"BS Computer Science\"}]" }
                    ]
                }
            }]
        })
        .to_string();

        let labels = parse_response(&body).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].new_label, "BS Computer Science");
    }

    #[test]
    fn test_parse_response_without_candidates() {
        let err = parse_response("{\"candidates\": []}").unwrap_err();
        assert!(matches!(err, ApiError::Advisor(_)));

        let err = parse_response("{\"candidates\": [{\"content\": {\"parts\": [{\"text\": \"oops\"}]}}]}")
            .unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
