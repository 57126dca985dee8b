//! InsightComposer: generation first, local composition on any failure.

use std::sync::Arc;

use careerlens_core::config::InsightConfig;
use careerlens_core::models::{DegradationEvent, Document};
use careerlens_core::traits::IGenerationProvider;
use careerlens_core::Availability;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::local::{bullet_report, extractive_summary};
use crate::prompts::{insights_prompt, summary_prompt};

/// Which path composed a narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMethod {
    /// Written by the external generation provider.
    AiGenerated,
    /// Composed locally from retrieved text or bullets.
    Statistical,
}

impl ProcessingMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::AiGenerated => "AI-generated",
            Self::Statistical => "Statistical analysis",
        }
    }
}

/// A narrative plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub text: String,
    pub method: ProcessingMethod,
    #[serde(skip)]
    pub degradation: Option<DegradationEvent>,
}

pub struct InsightComposer {
    provider: Option<Arc<dyn IGenerationProvider>>,
    summary_sentences: usize,
}

impl InsightComposer {
    pub fn new(provider: Option<Arc<dyn IGenerationProvider>>, summary_sentences: usize) -> Self {
        Self {
            provider,
            summary_sentences,
        }
    }

    pub fn from_config(config: &InsightConfig, provider: Option<Arc<dyn IGenerationProvider>>) -> Self {
        Self::new(provider, config.summary_sentences)
    }

    /// Local composition only.
    pub fn offline(summary_sentences: usize) -> Self {
        Self::new(None, summary_sentences)
    }

    pub fn generation_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Answer `question` from the retrieved documents.
    pub fn summarize(&self, question: &str, documents: &[Document]) -> Composition {
        let context = documents
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        self.compose(
            "summarize",
            || summary_prompt(question, &context),
            || extractive_summary(&context, self.summary_sentences),
        )
    }

    /// Turn analytics bullets into a report.
    pub fn synthesize(&self, bullets: &[String], context: &str) -> Composition {
        self.compose(
            "synthesize",
            || insights_prompt(bullets, context),
            || bullet_report(bullets),
        )
    }

    fn compose(
        &self,
        operation: &str,
        prompt: impl FnOnce() -> String,
        local: impl FnOnce() -> String,
    ) -> Composition {
        let mut degradation = None;

        if let Some(provider) = &self.provider {
            match self.generate(provider.as_ref(), &prompt()) {
                Availability::Ready(text) => {
                    debug!(operation, provider = provider.name(), "narrative generated");
                    return Composition {
                        text,
                        method: ProcessingMethod::AiGenerated,
                        degradation: None,
                    };
                }
                Availability::Unavailable { reason } => {
                    warn!(
                        operation,
                        provider = provider.name(),
                        error = %reason,
                        "generation failed, using local composition"
                    );
                    degradation = Some(DegradationEvent::new(
                        "insight",
                        reason,
                        "local_composition",
                        Utc::now(),
                    ));
                }
            }
        }

        Composition {
            text: local(),
            method: ProcessingMethod::Statistical,
            degradation,
        }
    }

    fn generate(&self, provider: &dyn IGenerationProvider, prompt: &str) -> Availability<String> {
        match provider.generate(prompt) {
            Ok(text) if !text.trim().is_empty() => Availability::Ready(text.trim().to_string()),
            Ok(_) => Availability::unavailable("provider returned blank text"),
            Err(e) => Availability::unavailable(e),
        }
    }
}
