//! # careerlens-service
//!
//! [`CareerService`] is the one object request handlers talk to. Construct it
//! once at startup and pass it by reference. Every operation starts by taking
//! a fresh cache generation and reads only from it.

pub mod degradation;
pub mod responses;
pub mod service;
pub mod validation;

pub use degradation::DegradationLog;
pub use responses::{Confidence, ParentReport, SummaryResponse};
pub use service::CareerService;
