use std::collections::HashMap;

use careerlens_core::models::{Document, RankedResult};

use super::tokenizer::tokenize;

/// BM25 tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length normalization in [0, 1].
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Term statistics for one corpus.
pub struct Bm25Index<'a> {
    corpus: &'a [Document],
    term_freqs: Vec<HashMap<String, u32>>,
    doc_lens: Vec<usize>,
    avg_doc_len: f64,
    doc_freqs: HashMap<String, usize>,
    params: Bm25Params,
}

impl<'a> Bm25Index<'a> {
    pub fn build(corpus: &'a [Document], params: Bm25Params) -> Self {
        let mut term_freqs = Vec::with_capacity(corpus.len());
        let mut doc_lens = Vec::with_capacity(corpus.len());
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();

        for doc in corpus {
            let tokens = tokenize(&doc.text);
            doc_lens.push(tokens.len());

            let mut tf: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *tf.entry(token).or_default() += 1;
            }
            for term in tf.keys() {
                *doc_freqs.entry(term.clone()).or_default() += 1;
            }
            term_freqs.push(tf);
        }

        let total_len: usize = doc_lens.iter().sum();
        let avg_doc_len = if corpus.is_empty() {
            0.0
        } else {
            total_len as f64 / corpus.len() as f64
        };

        Self {
            corpus,
            term_freqs,
            doc_lens,
            avg_doc_len,
            doc_freqs,
            params,
        }
    }

    /// Non-negative inverse document frequency.
    fn idf(&self, term: &str) -> f64 {
        let n = self.corpus.len() as f64;
        let df = self.doc_freqs.get(term).copied().unwrap_or(0) as f64;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    /// Score one document. Query terms are summed in query order.
    fn score(&self, query_terms: &[(String, f64)], doc_idx: usize) -> f64 {
        let tf_map = &self.term_freqs[doc_idx];
        let doc_len = self.doc_lens[doc_idx] as f64;
        let Bm25Params { k1, b } = self.params;

        let mut score = 0.0;
        for (term, idf) in query_terms {
            let Some(&tf) = tf_map.get(term) else {
                continue;
            };
            let tf = tf as f64;
            // tf > 0 implies doc_len > 0, so avg_doc_len > 0 here.
            let norm = 1.0 - b + b * doc_len / self.avg_doc_len;
            score += idf * (tf * (k1 + 1.0)) / (tf + k1 * norm);
        }
        score
    }

    /// All documents scored, non-increasing by score, ties in corpus order,
    /// truncated to `k`.
    pub fn rank(&self, query: &str, k: usize) -> Vec<RankedResult> {
        let query_terms: Vec<(String, f64)> = tokenize(query)
            .into_iter()
            .map(|term| {
                let idf = self.idf(&term);
                (term, idf)
            })
            .collect();

        let mut scored: Vec<(usize, f64)> = (0..self.corpus.len())
            .map(|idx| (idx, self.score(&query_terms, idx)))
            .collect();

        // Stable sort keeps corpus order among equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(idx, score)| RankedResult {
                document: self.corpus[idx].clone(),
                score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_is_positive_for_ubiquitous_terms() {
        let corpus = vec![
            Document::new("a", "graduates salary"),
            Document::new("b", "graduates employment"),
        ];
        let index = Bm25Index::build(&corpus, Bm25Params::default());
        assert!(index.idf("graduates") > 0.0);
        assert!(index.idf("salary") > index.idf("graduates"));
    }

    #[test]
    fn repeated_term_scores_higher() {
        let corpus = vec![
            Document::new("once", "salary report for graduates this year"),
            Document::new("twice", "salary salary report for graduates this"),
        ];
        let index = Bm25Index::build(&corpus, Bm25Params::default());
        let ranked = index.rank("salary", 2);
        assert_eq!(ranked[0].document.id, "twice");
    }

    #[test]
    fn scoring_is_deterministic() {
        let corpus = vec![
            Document::new("a", "internships mentorship alumni network"),
            Document::new("b", "mentorship job fairs"),
            Document::new("c", "alumni network mock interviews"),
        ];
        let index = Bm25Index::build(&corpus, Bm25Params::default());
        let first = index.rank("alumni mentorship", 3);
        let second = index.rank("alumni mentorship", 3);
        assert_eq!(first, second);
    }
}
