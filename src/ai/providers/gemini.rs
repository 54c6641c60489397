use crate::ai::client::{GenerationBackend, GenerationError, GenerationResult};
use crate::ai::request::{ProviderRequest, RequestTurn};
use crate::config::Config;
use crate::constants::EMPTY_RESPONSE_FALLBACK;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiBackend {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [RequestTurn],
    system_instruction: SystemInstruction<'a>,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: [SystemPart<'a>; 1],
}

#[derive(Serialize)]
struct SystemPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Reasoning summaries are not part of the answer.
    #[serde(default)]
    pub thought: bool,
}

impl GeminiBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

/// Concatenate the text parts of the first candidate. A well-formed reply with
/// no text falls back to a fixed apology.
pub fn parse_generate_response(body: &str) -> GenerationResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Ok(EMPTY_RESPONSE_FALLBACK.to_string())
    } else {
        Ok(text)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(
        &self,
        request: &ProviderRequest,
        system_instruction: &str,
    ) -> GenerationResult<String> {
        debug!(
            model = %self.model,
            turns = request.len(),
            images = request.inline_part_count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest {
                contents: &request.contents,
                system_instruction: SystemInstruction {
                    parts: [SystemPart {
                        text: system_instruction,
                    }],
                },
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        parse_generate_response(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
