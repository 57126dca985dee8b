//! # careerlens-insight
//!
//! Turns retrieved text and analytics bullets into narrative answers.
//!
//! Each operation has two paths: an external generation provider, and a
//! deterministic local composition used when the provider is absent or fails.
//! The path taken is reported as a [`ProcessingMethod`].

pub mod composer;
pub mod local;
pub mod prompts;
pub mod providers;

pub use composer::{Composition, InsightComposer, ProcessingMethod};
pub use providers::{create_generation_provider, ApiGenerationProvider};
