use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::config::Config;

/// Google Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            config.api_base.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    async fn call(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GEMINI_API_KEY is not configured"))?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiErrorEnvelope>(&error_text) {
                Ok(envelope) => bail!("{}", envelope.error.message),
                Err(_) => bail!("Gemini API error ({}): {}", status, error_text),
            }
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        extract_text(body)
    }
}

fn extract_text(body: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = body.candidates.into_iter().next() else {
        let reason = body.prompt_feedback.and_then(|f| f.block_reason);
        return match reason {
            Some(reason) => Err(anyhow!("Gemini blocked the prompt: {reason}")),
            None => Err(anyhow!("No response content from Gemini")),
        };
    };

    // Anything but a normal stop means the answer was cut off or withheld.
    match candidate.finish_reason.as_deref() {
        None | Some("STOP") | Some("MAX_TOKENS") => {}
        Some(reason) => bail!("Gemini stopped generating: {reason}"),
    }

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    Ok(text)
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        self.call(system_instruction, prompt).await.map_err(|e| {
            tracing::error!(model = %self.model, "Gemini API error: {e:#}");
            e
        })
    }
}
