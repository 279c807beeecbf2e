use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::traits::{OracleError, SoilOracle};
use crate::config::OracleConfig;
use crate::error::AppError;

// --- Constants ---
const API_KEY_HEADER: &str = "x-goog-api-key";

// --- Wire Types ---
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<String>>()
                    .join("")
            })
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Oracle adapter for a Gemini-style `generateContent` endpoint.
///
/// One request per call, no retries. A request timeout is only applied when
/// the configuration asks for one.
#[derive(Debug, Clone)]
pub struct GeminiOracle {
    client: Client,
    endpoint: Url,
    api_key: String,
    temperature: Option<f32>,
}

impl GeminiOracle {
    /// Creates an adapter from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the configuration carries no API key,
    /// and propagates URL or HTTP client construction failures.
    pub fn new(config: &OracleConfig) -> Result<Self, AppError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::Config("Oracle API key is required for the Gemini adapter".to_string())
        })?;

        let endpoint = config
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", config.model))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("Gemini oracle configured for model {}", config.model);

        Ok(Self {
            client,
            endpoint,
            api_key,
            temperature: config.temperature,
        })
    }

    /// The fully-resolved `generateContent` URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, prompt: &str) -> reqwest::RequestBuilder {
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        };

        self.client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
    }
}

#[async_trait]
impl SoilOracle for GeminiOracle {
    async fn generate(&self, prompt: String) -> Result<String, OracleError> {
        debug!("Oracle generating for prompt of {} chars", prompt.len());

        let res = self
            .build_request(&prompt)
            .send()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = res
            .json()
            .await
            .map_err(|e| OracleError::Decode(e.to_string()))?;

        let text = payload.into_text();
        if text.is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server_url: &str) -> OracleConfig {
        OracleConfig::new(Some("test-key".to_string()), "gemini-test", server_url).unwrap()
    }

    fn text_response(parts: &[&str]) -> serde_json::Value {
        let parts: Vec<serde_json::Value> = parts.iter().map(|t| json!({ "text": t })).collect();
        json!({
            "candidates": [
                { "content": { "role": "model", "parts": parts }, "finishReason": "STOP" }
            ]
        })
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = OracleConfig::new(None, "gemini-test", "http://localhost:9").unwrap();
        let result = GeminiOracle::new(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config =
            OracleConfig::new(Some("k".to_string()), "gemini-2.0-flash", "https://proxy.local/google")
                .unwrap();
        let oracle = GeminiOracle::new(&config).unwrap();
        assert_eq!(
            oracle.endpoint().as_str(),
            "https://proxy.local/google/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_success_joins_parts() {
        // 1. Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [ { "parts": [ { "text": "classify this" } ] } ]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response(&["{\"soilType\":", "\"clay\"}\n"])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let oracle = GeminiOracle::new(&test_config(&mock_server.uri())).unwrap();

        // 2. Act
        let result = oracle.generate("classify this".to_string()).await;

        // 3. Assert
        assert_eq!(result.unwrap(), "{\"soilType\":\"clay\"}");
    }

    #[tokio::test]
    async fn test_generate_sends_temperature_when_configured() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "generationConfig": { "temperature": 0.5 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&["silt"])))
            .expect(1)
            .mount(&mock_server)
            .await;
        let config = test_config(&mock_server.uri()).with_temperature(0.5);
        let oracle = GeminiOracle::new(&config).unwrap();

        let result = oracle.generate("prompt".to_string()).await;

        assert_eq!(result.unwrap(), "silt");
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Quota exceeded"))
            .mount(&mock_server)
            .await;
        let oracle = GeminiOracle::new(&test_config(&mock_server.uri())).unwrap();

        let result = oracle.generate("prompt".to_string()).await;

        if let Err(OracleError::Status { status, body }) = result {
            assert_eq!(status, 429);
            assert!(body.contains("Quota exceeded"));
        } else {
            panic!("Expected OracleError::Status, got {:?}", result);
        }
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_empty_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;
        let oracle = GeminiOracle::new(&test_config(&mock_server.uri())).unwrap();

        let result = oracle.generate("prompt".to_string()).await;

        assert_eq!(result, Err(OracleError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&mock_server)
            .await;
        let oracle = GeminiOracle::new(&test_config(&mock_server.uri())).unwrap();

        let result = oracle.generate("prompt".to_string()).await;

        assert!(matches!(result, Err(OracleError::Decode(_))));
    }

    #[tokio::test]
    async fn test_generate_honours_configured_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(text_response(&["loamy"]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;
        let config = test_config(&mock_server.uri()).with_request_timeout(Duration::from_millis(50));
        let oracle = GeminiOracle::new(&config).unwrap();

        let result = oracle.generate("prompt".to_string()).await;

        assert!(matches!(result, Err(OracleError::Transport(_))));
    }
}
