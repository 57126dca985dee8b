//! # careerlens-core
//!
//! Foundation crate for the careerlens outcomes engine.
//! Defines the data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod availability;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod sanitize;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use availability::Availability;
pub use config::CareerConfig;
pub use errors::{CareerError, CareerResult};
pub use models::{
    Corpus, DegradationEvent, Document, OutcomeRecord, RankedResult, SalaryRecord,
    SupportRecord, Tables,
};
