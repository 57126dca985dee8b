use serde::{Deserialize, Serialize};

use super::defaults;

/// External embedding/generation provider configuration.
///
/// Credentials are usually supplied through the environment rather than the
/// config file; see `CareerConfig::apply_env_overrides`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub hf_api_token: Option<String>,
    /// Base URL of an OpenAI-compatible API.
    pub api_base_url: String,
    pub embeddings_model: String,
    pub generation_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// True iff any external credential is configured.
    pub fn online_mode(&self) -> bool {
        self.api_key().is_some()
    }

    /// First non-empty credential, in OpenAI, Google, Hugging Face order.
    pub fn api_key(&self) -> Option<&str> {
        [&self.openai_api_key, &self.google_api_key, &self.hf_api_token]
            .into_iter()
            .filter_map(|k| k.as_deref())
            .map(str::trim)
            .find(|k| !k.is_empty())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            google_api_key: None,
            hf_api_token: None,
            api_base_url: defaults::DEFAULT_API_BASE_URL.to_string(),
            embeddings_model: defaults::DEFAULT_EMBEDDINGS_MODEL.to_string(),
            generation_model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}
