//! OpenAI-compatible chat-completions provider.
//!
//! `POST {base}/chat/completions` with a single user message. One attempt per
//! call; an error status, an unparsable body, or blank content is a failure.

use std::time::Duration;

use careerlens_core::errors::{CareerResult, GenerationError};
use careerlens_core::traits::IGenerationProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct ApiGenerationProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ApiGenerationProvider {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout_secs: u64,
    ) -> CareerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GenerationError::Unavailable {
                reason: format!("HTTP client error: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IGenerationProvider for ApiGenerationProvider {
    fn generate(&self, prompt: &str) -> CareerResult<String> {
        let failed = |reason: String| GenerationError::RequestFailed { reason };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: [ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .map_err(|e| failed(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%status, "generation API returned an error status");
            return Err(failed(format!("API returned {status}: {body}")).into());
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| failed(format!("JSON parse error: {e}")))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        debug!(model = %self.model, chars = text.len(), "generation complete");
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
