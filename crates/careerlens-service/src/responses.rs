//! Upward response records that are not analytics results.

use careerlens_insight::ProcessingMethod;
use careerlens_retrieval::RetrievalMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

/// Answer to a free-text question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub question: String,
    pub summary: String,
    /// One entry per retrieved document, in retrieval order.
    pub sources: Vec<String>,
    pub confidence: Confidence,
    pub llm_enabled: bool,
    pub processing_method: ProcessingMethod,
    pub retrieval_method: RetrievalMethod,
}

/// Narrative report for families, built from employment and support data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentReport {
    pub report: String,
    pub bullets: Vec<String>,
    pub context: String,
    pub processing_method: ProcessingMethod,
}
