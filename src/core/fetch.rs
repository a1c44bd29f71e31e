use crate::utils::error::{FortuneError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini generateContent 端點
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini API 客戶端：單發 POST，金鑰走 query 參數，不重試、不設額外逾時
#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 把提示文字送給 Gemini，回傳產生的文字內容。
    /// 金鑰為空時直接失敗，不發出任何請求。
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        if api_key.trim().is_empty() {
            return Err(FortuneError::MissingApiKey);
        }

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!("📡 Gemini request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Gemini response status: {}", status);

        if !status.is_success() {
            return Err(FortuneError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let envelope: GenerateResponse = response.json().await?;
        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            tracing::warn!("⚠️ Gemini 回覆沒有任何文字內容");
        }

        Ok(text)
    }
}
