//! Embedding provider construction.
//!
//! Only credentialed HTTP providers are supported. Without a credential there
//! is no semantic path and retrieval runs lexical-only.

pub mod api_provider;

pub use api_provider::ApiEmbeddingProvider;

use std::sync::Arc;

use careerlens_core::config::ProviderConfig;
use careerlens_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Build the configured embedding provider, or `None` when offline.
pub fn create_embedding_provider(config: &ProviderConfig) -> Option<Arc<dyn IEmbeddingProvider>> {
    let Some(api_key) = config.api_key() else {
        info!("no provider credential configured, semantic retrieval disabled");
        return None;
    };

    match ApiEmbeddingProvider::new(
        config.api_base_url.clone(),
        api_key.to_string(),
        config.embeddings_model.clone(),
        config.timeout_secs,
    ) {
        Ok(provider) => {
            info!(
                provider = "api",
                model = %config.embeddings_model,
                "embedding provider configured"
            );
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "embedding provider could not be created, semantic retrieval disabled");
            None
        }
    }
}
