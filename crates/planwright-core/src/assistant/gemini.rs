//! Google Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_refinements, Assistant, RefinementRequest, RefinementResponse};
use crate::{
    config::AssistantConfig,
    error::{HttpResultExt, PlanwrightError, Result},
    models::Refinements,
    prompt::compile_refinement_prompt,
};

/// Assistant backed by the Generative Language API.
pub struct GeminiAssistant {
    config: AssistantConfig,
    client: reqwest::Client,
}

impl GeminiAssistant {
    /// Create a client for the configured model.
    pub fn new(config: AssistantConfig) -> Result<Self> {
        if config.api_key().is_none() {
            return Err(PlanwrightError::Configuration {
                message: "Gemini assistant requires an API key".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .http_context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body. `schema` switches on JSON structured output.
    fn build_request_body(prompt: &str, schema: Option<Value>) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });
        if let Some(schema) = schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseJsonSchema": schema
            });
        }
        body
    }

    async fn generate(&self, body: &Value) -> Result<String> {
        let api_key = self.config.api_key().unwrap_or_default();
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .http_context("request to Gemini failed")?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .http_context("failed to read Gemini response")?;

        if !(200..300).contains(&status) {
            warn!("Gemini returned status {status}");
            return Err(PlanwrightError::Provider {
                status,
                message: error_message(&text),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| PlanwrightError::MalformedResponse {
                message: format!("unexpected Gemini payload: {e}"),
            })?;
        extract_text(parsed)
    }
}

#[async_trait]
impl Assistant for GeminiAssistant {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn refine(&self, request: &RefinementRequest) -> Result<Refinements> {
        debug!("Requesting refinement from {}", self.config.model);
        let prompt = compile_refinement_prompt(request);
        let body = Self::build_request_body(&prompt, Some(RefinementResponse::json_schema()));
        let text = self.generate(&body).await?;
        parse_refinements(&text)
    }

    async fn generate_scoring_prompt(&self, compiled: &str) -> Result<String> {
        debug!("Requesting scoring prompt from {}", self.config.model);
        let body = Self::build_request_body(compiled, None);
        let text = self.generate(&body).await?;
        if text.trim().is_empty() {
            return Err(PlanwrightError::MalformedResponse {
                message: "Gemini returned an empty scoring prompt".to_string(),
            });
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PlanwrightError::MalformedResponse {
            message: "Gemini returned no candidates".to_string(),
        })?;

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

/// Pull `error.message` out of an error payload, falling back to the body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AssistantConfig {
        AssistantConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://localhost:9/v1beta/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        let result = GeminiAssistant::new(AssistantConfig::default());
        assert!(matches!(result, Err(PlanwrightError::Configuration { .. })));
    }

    #[test]
    fn test_endpoint_shape() {
        let assistant = GeminiAssistant::new(config()).unwrap();
        assert_eq!(
            assistant.endpoint(),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_plain_request_body() {
        let body = GeminiAssistant::build_request_body("hello", None);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_structured_request_body() {
        let body =
            GeminiAssistant::build_request_body("refine", Some(RefinementResponse::json_schema()));
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert!(config["responseJsonSchema"]["properties"]["refinedDescription"].is_object());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Score " }, { "text": "this." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Score this.");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, PlanwrightError::MalformedResponse { .. }));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":403,"message":"API key not valid"}}"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message(" upstream timeout \n"), "upstream timeout");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_retryable_http_error() {
        let assistant = GeminiAssistant::new(config()).unwrap();
        let err = assistant.generate_scoring_prompt("prompt").await.unwrap_err();
        assert!(matches!(err, PlanwrightError::Http { .. }));
        assert!(err.is_retryable());
    }
}
