/// careerlens version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of institutions reported in `top_institutions`.
pub const TOP_INSTITUTIONS_LIMIT: usize = 5;

/// Annual salary growth used for cumulative income projections.
pub const SALARY_GROWTH_RATE: f64 = 0.03;

/// Floor applied to first-year income before computing break-even years.
pub const MIN_FIRST_YEAR_INCOME: f64 = 1.0;

/// Retrieved-document count at or above which a summary is "High" confidence.
pub const HIGH_CONFIDENCE_MIN_DOCUMENTS: usize = 3;

/// Bounds accepted for a cohort year.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Maximum number of degradation events retained by the service.
pub const MAX_DEGRADATION_EVENTS: usize = 256;

/// Metadata key that names a document's origin.
pub const SOURCE_METADATA_KEY: &str = "source";
