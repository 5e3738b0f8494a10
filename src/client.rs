use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmSettings;

/// Thin wrapper over the Google Generative Language REST API. A fresh client
/// is built per submission with the credential for that submission; nothing
/// about the credential is shared process-wide.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(settings: &LlmSettings, api_key: String) -> Result<Self> {
        Self::new_with_url(api_key, settings.timeout_secs, settings.base_url.clone())
    }

    pub fn new_with_url(
        api_key: String,
        timeout_secs: u64,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let sanitized_base = base_url.into().trim_end_matches('/').to_string();
        if sanitized_base.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        let timeout = Duration::from_secs(timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self {
            http,
            base_url: sanitized_base,
            api_key,
            user_agent: format!("stackgenius/{}", env!("CARGO_PKG_VERSION")),
            verbose: false,
        })
    }

    /// Dump raw request/response JSON to stderr for each call.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub async fn generate_text(
        &self,
        model: &str,
        request: GenerateTextRequest,
    ) -> Result<TextCompletion> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        if self.verbose {
            eprintln!(
                "===== DEBUG: REQUEST JSON =====\n{}\n",
                serde_json::to_string_pretty(&request).unwrap_or_default()
            );
        }

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("User-Agent", &self.user_agent)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini generateContent endpoint")?;

        let status = response.status();
        match status {
            reqwest::StatusCode::OK => {
                let body = response.text().await.context("Failed to read Gemini response body")?;
                if self.verbose {
                    eprintln!("===== DEBUG: RESPONSE JSON =====\n{}\n", body);
                }
                let parsed: GenerateContentResponse = serde_json::from_str(&body)
                    .context("Failed to parse Gemini generateContent response JSON")?;
                Ok(TextCompletion {
                    result: parsed.first_candidate_text(),
                    status_code: status.as_u16(),
                })
            }
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(anyhow!("Invalid API key. Please check your Gemini API key configuration."))
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!(
                    "Rate limit exceeded. Please wait a moment and try again. (API response: {})",
                    error_text
                ))
            }
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                Err(anyhow!("Gemini service is temporarily unavailable. Please try again later."))
            }
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("Gemini API error (status {}): {}", status, error_text))
            }
        }
    }
}

/// The external contract the pipeline consumes: one text result plus the
/// HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCompletion {
    pub result: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateTextRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateTextRequest {
    /// Single-turn user prompt, the only shape stackgenius sends.
    pub fn from_prompt(prompt: &str, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(max_output_tokens),
                temperature: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn generate_text_returns_first_candidate_text_and_status() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent")
                    .header("x-goog-api-key", "test-key")
                    .json_body(json!({
                        "contents": [
                            {"parts": [{"text": "Hello"}]}
                        ],
                        "generationConfig": {"maxOutputTokens": 256}
                    }));

                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "candidates": [
                            {
                                "content": {
                                    "parts": [{"text": "Hi "}, {"text": "there!"}],
                                    "role": "model"
                                },
                                "finishReason": "STOP"
                            }
                        ]
                    }));
            })
            .await;

        let client =
            GeminiClient::new_with_url("test-key".to_string(), 30, server.base_url()).unwrap();

        let completion = client
            .generate_text(
                "gemini-2.0-flash",
                GenerateTextRequest::from_prompt("Hello", 256),
            )
            .await
            .unwrap();

        assert_eq!(completion.result, "Hi there!");
        assert_eq!(completion.status_code, 200);

        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_text_maps_unauthorized_to_key_error() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent");
                then.status(401)
                    .header("Content-Type", "application/json")
                    .body(r#"{"error":{"status":"UNAUTHENTICATED"}}"#);
            })
            .await;

        let client =
            GeminiClient::new_with_url("bad-key".to_string(), 30, server.base_url()).unwrap();

        let err = client
            .generate_text(
                "gemini-2.0-flash",
                GenerateTextRequest::from_prompt("Hello", 256),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid API key"));
        _mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_text_returns_empty_result_when_no_candidates() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.0-flash:generateContent");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"candidates": []}));
            })
            .await;

        let client =
            GeminiClient::new_with_url("test-key".to_string(), 30, server.base_url()).unwrap();

        let completion = client
            .generate_text(
                "gemini-2.0-flash",
                GenerateTextRequest::from_prompt("Hello", 256),
            )
            .await
            .unwrap();

        assert_eq!(completion.result, "");
        assert_eq!(completion.status_code, 200);
    }

    #[test]
    fn new_with_url_rejects_empty_base_url() {
        let err = GeminiClient::new_with_url("key".to_string(), 30, "").unwrap_err();
        assert!(err.to_string().contains("Base URL cannot be empty"));
    }
}
