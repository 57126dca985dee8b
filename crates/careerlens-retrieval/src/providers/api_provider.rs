//! OpenAI-compatible HTTP embedding provider.
//!
//! `POST {base}/embeddings` with `{"model", "input": [...]}` and a bearer
//! credential. One attempt per call: a failed request is reported to the
//! caller, which falls back to lexical ranking for that query.

use std::time::Duration;

use careerlens_core::errors::{CareerResult, RetrievalError};
use careerlens_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Embedding provider backed by an OpenAI-compatible `/embeddings` endpoint.
pub struct ApiEmbeddingProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiEmbeddingProvider {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout_secs: u64,
    ) -> CareerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RetrievalError::Unavailable {
                reason: format!("HTTP client error: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            api_key,
            model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_embeddings(&self, texts: &[String]) -> CareerResult<Vec<Vec<f32>>> {
        let unavailable = |reason: String| RetrievalError::Unavailable { reason };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| unavailable(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%status, "embedding API returned an error status");
            return Err(unavailable(format!("API returned {status}: {body}")).into());
        }

        let mut parsed: EmbedResponse = response
            .json()
            .map_err(|e| unavailable(format!("JSON parse error: {e}")))?;

        if parsed.data.len() != texts.len() {
            return Err(unavailable(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                parsed.data.len()
            ))
            .into());
        }

        // Some servers return entries out of order; `index` restores input order.
        if parsed.data.iter().all(|d| d.index.is_some()) {
            parsed.data.sort_by_key(|d| d.index);
        }

        debug!(count = parsed.data.len(), model = %self.model, "embeddings received");
        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }
}

impl IEmbeddingProvider for ApiEmbeddingProvider {
    fn embed(&self, text: &str) -> CareerResult<Vec<f32>> {
        let mut results = self.request_embeddings(&[text.to_string()])?;
        results.pop().ok_or_else(|| {
            RetrievalError::Unavailable {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> CareerResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
