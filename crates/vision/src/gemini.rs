use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::analysis::SafetyAnalysis;
use crate::analyzer::SafetyAnalyzer;
use crate::error::{Result, VisionError};
use crate::image::detect_image_format;
use crate::prompt::{SYSTEM_PROMPT, USER_PROMPT};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: &str, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini generateContent API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    /// * `base_url` - API base (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `model` - Model name (e.g., "gemini-2.5-pro")
    /// * `api_key` - May be empty; `analyze` then fails with a configuration error
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl SafetyAnalyzer for GeminiClient {
    async fn analyze(&self, image: &[u8]) -> Result<SafetyAnalysis> {
        if self.api_key.is_empty() {
            return Err(VisionError::Configuration(
                "Gemini API key is not set, set the GEMINI_API_KEY environment variable"
                    .to_string(),
            ));
        }

        let mime_type = detect_image_format(image)?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part::text(SYSTEM_PROMPT)],
            },
            contents: vec![Content {
                parts: vec![
                    Part::inline_data(mime_type, STANDARD.encode(image)),
                    Part::text(USER_PROMPT),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        tracing::info!(
            "Sending judgement request to Gemini (model: {}, image: {} bytes, {})",
            self.model,
            image.len(),
            mime_type
        );

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(VisionError::QuotaExceeded(message));
            }
            return Err(VisionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let raw = extract_text(&body)?;

        tracing::info!("Gemini judgement received ({} chars)", raw.len());

        parse_analysis(&raw)
    }
}

fn extract_text(response: &GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|part| part.text.clone()))
        .ok_or_else(|| VisionError::InvalidResponse("empty response from model".to_string()))
}

fn parse_analysis(raw: &str) -> Result<SafetyAnalysis> {
    let mut analysis: SafetyAnalysis = serde_json::from_str(raw)?;
    analysis.confidence = analysis.confidence.clamp(0.0, 100.0);
    Ok(analysis)
}
