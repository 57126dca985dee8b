/// Dataset loading errors. These are fatal: no answer is possible without data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to load {source_name}: {reason}")]
    LoadFailed { source_name: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("data directory not found: {path}")]
    MissingDirectory { path: String },

    #[error("duplicate document id: {id}")]
    DuplicateDocument { id: String },

    #[error("dataset is empty")]
    EmptyDataset,
}
