//! Scripted embedding and generation providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use careerlens_core::errors::{CareerResult, GenerationError, RetrievalError};
use careerlens_core::traits::{IEmbeddingProvider, IGenerationProvider};

const DEFAULT_VOCABULARY: &[&str] = &[
    "employment",
    "salary",
    "career",
    "counseling",
    "internships",
    "engineering",
    "growth",
    "graduates",
];

fn keyword_vector(vocabulary: &[&str], text: &str) -> Vec<f32> {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();
    vocabulary
        .iter()
        .map(|word| tokens.iter().filter(|t| t.as_str() == *word).count() as f32)
        .collect()
}

/// Deterministic embedder: one dimension per vocabulary word, valued by count.
pub struct KeywordEmbedder {
    vocabulary: Vec<&'static str>,
    query_calls: AtomicUsize,
    batch_calls: AtomicUsize,
}

impl Default for KeywordEmbedder {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.to_vec(),
            query_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
        }
    }
}

impl KeywordEmbedder {
    /// Calls to `embed` (query embeddings).
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Calls to `embed_batch` (corpus indexing).
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for KeywordEmbedder {
    fn embed(&self, text: &str) -> CareerResult<Vec<f32>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        Ok(keyword_vector(&self.vocabulary, text))
    }

    fn embed_batch(&self, texts: &[String]) -> CareerResult<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts
            .iter()
            .map(|t| keyword_vector(&self.vocabulary, t))
            .collect())
    }

    fn name(&self) -> &str {
        "keyword"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Embedder that fails on demand.
pub struct FailingEmbedder {
    fail_batch: bool,
    query_calls: AtomicUsize,
}

impl FailingEmbedder {
    /// Fails every call, so indexing never succeeds.
    pub fn new() -> Self {
        Self {
            fail_batch: true,
            query_calls: AtomicUsize::new(0),
        }
    }

    /// Indexes the corpus, then fails every query embedding.
    pub fn failing_queries_only() -> Self {
        Self {
            fail_batch: false,
            query_calls: AtomicUsize::new(0),
        }
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

impl Default for FailingEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> CareerResult<Vec<f32>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        Err(RetrievalError::Unavailable {
            reason: "scripted query failure".to_string(),
        }
        .into())
    }

    fn embed_batch(&self, texts: &[String]) -> CareerResult<Vec<Vec<f32>>> {
        if self.fail_batch {
            return Err(RetrievalError::Unavailable {
                reason: "scripted batch failure".to_string(),
            }
            .into());
        }
        Ok(texts
            .iter()
            .map(|t| keyword_vector(DEFAULT_VOCABULARY, t))
            .collect())
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

enum Script {
    Reply(String),
    Fail,
}

/// Generation provider with a fixed reply (or failure) and a call log.
pub struct ScriptedGenerator {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: Script::Fail,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Prompts received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl IGenerationProvider for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> CareerResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail => Err(GenerationError::RequestFailed {
                reason: "scripted generation failure".to_string(),
            }
            .into()),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
