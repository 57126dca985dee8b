//! # careerlens-analytics
//!
//! Pure computations over one generation's tables: employment analysis,
//! institution comparison, support-index scoring, and ROI estimation.
//!
//! Every float in a result has passed through
//! [`careerlens_core::sanitize`], so results always serialize.

pub mod comparison;
pub mod employment;
pub mod engine;
pub mod format;
pub mod roi;
pub mod stats;
pub mod support_index;

pub use comparison::{ComparisonStats, InstitutionComparison, Leaders};
pub use employment::{EmploymentAnalysis, InstitutionStats, Trend};
pub use engine::{AnalyticsEngine, EmploymentSnapshot, SalarySnapshot};
pub use roi::{RiskLevel, RoiEstimate, RoiReport};
pub use support_index::{score_support_index, SupportIndexEntry};

/// Case-insensitive equality after trimming, used for every name filter.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
