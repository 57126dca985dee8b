//! Generation provider construction.

pub mod api_provider;

pub use api_provider::ApiGenerationProvider;

use std::sync::Arc;

use careerlens_core::config::ProviderConfig;
use careerlens_core::traits::IGenerationProvider;
use tracing::{info, warn};

/// Build the configured generation provider, or `None` when offline.
pub fn create_generation_provider(config: &ProviderConfig) -> Option<Arc<dyn IGenerationProvider>> {
    let api_key = config.api_key()?;
    match ApiGenerationProvider::new(
        config.api_base_url.clone(),
        api_key.to_string(),
        config.generation_model.clone(),
        config.timeout_secs,
    ) {
        Ok(provider) => {
            info!(model = %config.generation_model, "generation provider configured");
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "generation provider could not be created, using local composition");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_has_no_generator() {
        assert!(create_generation_provider(&ProviderConfig::default()).is_none());
    }

    #[test]
    fn hf_token_enables_generator() {
        let config = ProviderConfig {
            hf_api_token: Some("hf_x".to_string()),
            ..ProviderConfig::default()
        };
        assert!(create_generation_provider(&config).is_some());
    }
}
