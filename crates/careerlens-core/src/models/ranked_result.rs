use serde::{Deserialize, Serialize};

use super::Document;

/// A document paired with its relevance score under one ranker.
///
/// Sequences of `RankedResult` are non-increasing by score, ties kept in
/// corpus order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub document: Document,
    pub score: f64,
}
