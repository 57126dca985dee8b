mod clock;
mod embedding;
mod generation;
mod loader;

pub use clock::{IClock, SystemClock};
pub use embedding::IEmbeddingProvider;
pub use generation::IGenerationProvider;
pub use loader::IDatasetLoader;
