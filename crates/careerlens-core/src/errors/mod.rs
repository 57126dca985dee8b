mod career_error;
mod config_error;
mod data_error;
mod generation_error;
mod retrieval_error;

pub use career_error::CareerError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;

/// Crate-wide result alias.
pub type CareerResult<T> = Result<T, CareerError>;
