//! In-memory cosine-similarity index over one corpus.

use careerlens_core::errors::{CareerResult, RetrievalError};
use careerlens_core::models::Document;
use careerlens_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Document embeddings in corpus order.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    vectors: Vec<Vec<f32>>,
    dimensions: usize,
}

impl VectorIndex {
    /// Embed every document through `provider` and index the vectors.
    ///
    /// # Errors
    /// `RetrievalError::IndexFailed` if the provider fails or returns the
    /// wrong number of vectors, `DimensionMismatch` if vector widths differ.
    pub fn build(corpus: &[Document], provider: &dyn IEmbeddingProvider) -> CareerResult<Self> {
        if corpus.is_empty() {
            return Ok(Self {
                vectors: Vec::new(),
                dimensions: 0,
            });
        }

        let texts: Vec<String> = corpus.iter().map(|d| d.text.clone()).collect();
        let vectors = provider
            .embed_batch(&texts)
            .map_err(|e| RetrievalError::IndexFailed {
                reason: e.to_string(),
            })?;

        if vectors.len() != corpus.len() {
            return Err(RetrievalError::IndexFailed {
                reason: format!(
                    "provider returned {} vectors for {} documents",
                    vectors.len(),
                    corpus.len()
                ),
            }
            .into());
        }

        let dimensions = vectors[0].len();
        if dimensions == 0 {
            return Err(RetrievalError::IndexFailed {
                reason: "provider returned empty vectors".to_string(),
            }
            .into());
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
            return Err(RetrievalError::DimensionMismatch {
                expected: dimensions,
                actual: bad.len(),
            }
            .into());
        }

        debug!(
            provider = provider.name(),
            documents = vectors.len(),
            dims = dimensions,
            "vector index built"
        );

        Ok(Self {
            vectors,
            dimensions,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Top `k` (corpus index, cosine) pairs, non-increasing, ties in corpus order.
    pub fn search(&self, query: &[f32], k: usize) -> CareerResult<Vec<(usize, f64)>> {
        if !self.is_empty() && query.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            }
            .into());
        }

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, v)| (idx, cosine_similarity(query, v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);
        Ok(scored)
    }
}

/// Cosine similarity; 0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        let cos = dot / (norm_a * norm_b);
        if cos.is_finite() {
            cos
        } else {
            0.0
        }
    } else {
        0.0
    }
}
