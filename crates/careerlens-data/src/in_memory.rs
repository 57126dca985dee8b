use careerlens_core::errors::CareerResult;
use careerlens_core::models::{Corpus, Tables};
use careerlens_core::traits::IDatasetLoader;

/// Loader over fixed tables and documents. Every load returns a copy.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    tables: Tables,
    corpus: Corpus,
}

impl InMemoryLoader {
    pub fn new(tables: Tables, corpus: Corpus) -> Self {
        Self { tables, corpus }
    }

    /// Fixed tables with the built-in briefs as the corpus.
    pub fn with_briefs(tables: Tables) -> Self {
        Self::new(tables, crate::briefs::builtin_briefs())
    }
}

impl IDatasetLoader for InMemoryLoader {
    fn load_tables(&self) -> CareerResult<Tables> {
        Ok(self.tables.clone())
    }

    fn load_documents(&self) -> CareerResult<Corpus> {
        crate::ensure_unique_ids(&self.corpus)?;
        Ok(self.corpus.clone())
    }
}
