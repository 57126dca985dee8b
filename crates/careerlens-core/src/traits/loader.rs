use crate::errors::CareerResult;
use crate::models::{Corpus, Tables};

/// Dataset loader collaborator. Owns all I/O and data sourcing.
pub trait IDatasetLoader: Send + Sync {
    /// Load the outcome, salary, and support tables.
    fn load_tables(&self) -> CareerResult<Tables>;

    /// Load the retrieval corpus.
    fn load_documents(&self) -> CareerResult<Corpus>;
}
