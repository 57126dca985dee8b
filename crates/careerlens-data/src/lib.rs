//! # careerlens-data
//!
//! [`IDatasetLoader`](careerlens_core::traits::IDatasetLoader)
//! implementations. All file I/O in the workspace lives here.

use std::collections::HashSet;

use careerlens_core::errors::{CareerResult, DataError};
use careerlens_core::models::Document;

pub mod briefs;
pub mod in_memory;
pub mod json_dir;

pub use briefs::builtin_briefs;
pub use in_memory::InMemoryLoader;
pub use json_dir::JsonDatasetLoader;

/// Metadata key for a document's kind.
pub const TYPE_METADATA_KEY: &str = "type";

/// Fails on the first id seen twice. Retrieval keys documents by id.
pub(crate) fn ensure_unique_ids(corpus: &[Document]) -> CareerResult<()> {
    let mut seen = HashSet::with_capacity(corpus.len());
    for document in corpus {
        if !seen.insert(document.id.as_str()) {
            return Err(DataError::DuplicateDocument {
                id: document.id.clone(),
            }
            .into());
        }
    }
    Ok(())
}
