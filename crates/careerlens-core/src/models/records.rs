use serde::{Deserialize, Serialize};

fn unknown() -> String {
    "Unknown".to_string()
}

/// One employment outcome row: an institution/degree cohort in a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub institution: String,
    pub degree: String,
    pub year: i32,
    /// Percentage in [0, 100].
    pub employment_rate: f64,
    pub median_salary: f64,
    #[serde(default = "unknown")]
    pub data_source: String,
    #[serde(default = "unknown")]
    pub last_updated: String,
}

/// One salary survey row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub institution: String,
    pub degree: String,
    pub year: i32,
    pub median_salary: f64,
    pub employment_rate: f64,
    #[serde(default)]
    pub salary_percentile_25: Option<f64>,
    #[serde(default)]
    pub salary_percentile_75: Option<f64>,
    #[serde(default = "unknown")]
    pub data_source: String,
    #[serde(default = "unknown")]
    pub last_updated: String,
}

/// Career support services advertised by one institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRecord {
    pub institution: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub career_services_rating: f64,
    #[serde(default)]
    pub alumni_network_strength: f64,
    #[serde(default = "unknown")]
    pub data_source: String,
    #[serde(default = "unknown")]
    pub last_updated: String,
}
