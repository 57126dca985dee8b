//! Configuration: one serde section per subsystem, defaults in `defaults`.

mod cache_config;
mod data_config;
pub mod defaults;
mod insight_config;
mod observability_config;
mod provider_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use data_config::DataConfig;
pub use insight_config::InsightConfig;
pub use observability_config::ObservabilityConfig;
pub use provider_config::ProviderConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerConfig {
    pub data: DataConfig,
    pub cache: CacheConfig,
    pub retrieval: RetrievalConfig,
    pub insight: InsightConfig,
    pub providers: ProviderConfig,
    pub observability: ObservabilityConfig,
}

impl CareerConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&source).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = get("DATA_DIR") {
            self.data.data_dir = dir;
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.providers.openai_api_key = Some(key);
        }
        if let Some(key) = get("GOOGLE_API_KEY") {
            self.providers.google_api_key = Some(key);
        }
        if let Some(token) = get("HUGGINGFACEHUB_API_TOKEN") {
            self.providers.hf_api_token = Some(token);
        }
        if let Some(model) = get("EMBEDDINGS_MODEL") {
            self.providers.embeddings_model = model;
        }
        if let Some(model) = get("GENERATION_MODEL") {
            self.providers.generation_model = model;
        }
        if let Some(base) = get("CAREERLENS_API_BASE") {
            self.providers.api_base_url = base;
        }
        if let Some(ttl) = get("CAREERLENS_CACHE_TTL_SECS") {
            self.cache.ttl_secs = ttl.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "CAREERLENS_CACHE_TTL_SECS".to_string(),
                message: format!("expected whole seconds, got {ttl:?}"),
            })?;
        }
        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, message: String| ConfigError::InvalidValue {
            field: field.to_string(),
            message,
        };

        if self.cache.ttl_secs == 0 {
            return Err(invalid("cache.ttl_secs", "must be positive".to_string()));
        }
        if self.retrieval.max_top_k == 0 {
            return Err(invalid("retrieval.max_top_k", "must be positive".to_string()));
        }
        if self.retrieval.default_top_k == 0
            || self.retrieval.default_top_k > self.retrieval.max_top_k
        {
            return Err(invalid(
                "retrieval.default_top_k",
                format!("must be in 1..={}", self.retrieval.max_top_k),
            ));
        }
        if !(self.retrieval.bm25_k1.is_finite() && self.retrieval.bm25_k1 >= 0.0) {
            return Err(invalid(
                "retrieval.bm25_k1",
                "must be finite and non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.retrieval.bm25_b) {
            return Err(invalid("retrieval.bm25_b", "must be in [0, 1]".to_string()));
        }
        if self.insight.summary_sentences == 0 {
            return Err(invalid(
                "insight.summary_sentences",
                "must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
