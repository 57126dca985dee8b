//! In-code datasets and loaders with call counting.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use careerlens_core::errors::{CareerResult, DataError};
use careerlens_core::models::{
    Corpus, Document, OutcomeRecord, SalaryRecord, SupportRecord, Tables,
};
use careerlens_core::traits::IDatasetLoader;

pub fn outcome(institution: &str, degree: &str, year: i32, rate: f64, salary: f64) -> OutcomeRecord {
    OutcomeRecord {
        institution: institution.to_string(),
        degree: degree.to_string(),
        year,
        employment_rate: rate,
        median_salary: salary,
        data_source: "fixture".to_string(),
        last_updated: "2025-06-01".to_string(),
    }
}

pub fn salary(institution: &str, degree: &str, year: i32, median: f64) -> SalaryRecord {
    SalaryRecord {
        institution: institution.to_string(),
        degree: degree.to_string(),
        year,
        median_salary: median,
        employment_rate: 90.0,
        salary_percentile_25: None,
        salary_percentile_75: None,
        data_source: "fixture".to_string(),
        last_updated: "2025-06-01".to_string(),
    }
}

pub fn support(institution: &str, services: &[&str]) -> SupportRecord {
    SupportRecord {
        institution: institution.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
        career_services_rating: 4.0,
        alumni_network_strength: 3.5,
        data_source: "fixture".to_string(),
        last_updated: "2025-06-01".to_string(),
    }
}

/// Two institutions, one CS cohort each in 2025.
pub fn two_institution_tables() -> Tables {
    Tables {
        outcomes: vec![
            outcome("A", "CS", 2025, 90.0, 80_000.0),
            outcome("B", "CS", 2025, 80.0, 70_000.0),
        ],
        salaries: vec![salary("A", "CS", 2025, 80_000.0), salary("B", "CS", 2025, 70_000.0)],
        support: vec![
            support("A", &["career counseling", "internships"]),
            support("B", &["resume workshops"]),
        ],
    }
}

/// A small report corpus covering employment, salary, and support topics.
pub fn sample_corpus() -> Corpus {
    vec![
        Document::new("emp", "Employment rates for engineering graduates rose this year.")
            .with_metadata("source", "reports/employment.txt"),
        Document::new("sal", "Salary trends show salary growth for computer science graduates.")
            .with_metadata("source", "reports/salary.txt"),
        Document::new("sup", "Career counseling and internships improve graduate outcomes.")
            .with_metadata("source", "reports/support.txt"),
    ]
}

/// Loader over fixed data that counts loads and can be switched to fail.
#[derive(Default)]
pub struct CountingLoader {
    tables: Tables,
    corpus: Corpus,
    loads: AtomicUsize,
    failing: AtomicBool,
}

impl CountingLoader {
    pub fn new(tables: Tables, corpus: Corpus) -> Self {
        Self {
            tables,
            corpus,
            loads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn sample() -> Self {
        Self::new(two_institution_tables(), sample_corpus())
    }

    /// Number of completed `load_tables` calls, successful or not.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl IDatasetLoader for CountingLoader {
    fn load_tables(&self) -> CareerResult<Tables> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DataError::LoadFailed {
                source_name: "fixture".to_string(),
                reason: "scripted load failure".to_string(),
            }
            .into());
        }
        Ok(self.tables.clone())
    }

    fn load_documents(&self) -> CareerResult<Corpus> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DataError::LoadFailed {
                source_name: "fixture".to_string(),
                reason: "scripted load failure".to_string(),
            }
            .into());
        }
        Ok(self.corpus.clone())
    }
}
