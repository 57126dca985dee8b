//! AnalyticsEngine: every analysis over one generation's tables.

use std::collections::BTreeMap;

use careerlens_core::models::Tables;
use careerlens_core::sanitize::finite_or_zero;
use serde::{Deserialize, Serialize};

use crate::comparison::{compare_institutions, InstitutionComparison};
use crate::employment::{analyze_employment, EmploymentAnalysis};
use crate::roi::{roi_estimate, RoiEstimate};
use crate::stats::{mean, median};
use crate::support_index::{support_services_index, SupportIndexEntry};

/// Employment picture for the latest year in the outcome table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentSnapshot {
    pub year: i32,
    pub average_employment_rate: f64,
    pub leading_degree: String,
    pub leading_degree_rate: f64,
}

/// Salary picture for the latest year in the salary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySnapshot {
    pub year: i32,
    pub median_salary: f64,
    pub top_paying_degree: String,
}

/// Borrowed view over one generation's tables. Cheap to construct per request.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine<'a> {
    tables: &'a Tables,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(tables: &'a Tables) -> Self {
        Self { tables }
    }

    pub fn analyze_employment(&self, degree: Option<&str>, year: Option<i32>) -> EmploymentAnalysis {
        analyze_employment(&self.tables.outcomes, degree, year)
    }

    pub fn compare_institutions(&self, a: &str, b: &str, year: Option<i32>) -> InstitutionComparison {
        compare_institutions(&self.tables.outcomes, a, b, year)
    }

    pub fn support_services_index(&self) -> Vec<SupportIndexEntry> {
        support_services_index(&self.tables.support)
    }

    pub fn roi_estimate(
        &self,
        institution: &str,
        degree: &str,
        tuition_total: f64,
        years: u32,
    ) -> RoiEstimate {
        roi_estimate(&self.tables.salaries, institution, degree, tuition_total, years)
    }

    /// Mean rate at the latest outcome year and the degree leading it.
    pub fn latest_employment(&self) -> Option<EmploymentSnapshot> {
        let year = self.tables.outcomes.iter().map(|r| r.year).max()?;
        let rows: Vec<_> = self.tables.outcomes.iter().filter(|r| r.year == year).collect();

        let mut by_degree: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for row in &rows {
            by_degree
                .entry(row.degree.as_str())
                .or_default()
                .push(row.employment_rate);
        }
        let (degree, rate) = highest_mean(&by_degree)?;
        let all: Vec<f64> = rows.iter().map(|r| r.employment_rate).collect();

        Some(EmploymentSnapshot {
            year,
            average_employment_rate: finite_or_zero(mean(&all)),
            leading_degree: degree.to_string(),
            leading_degree_rate: rate,
        })
    }

    /// Median salary at the latest salary year and the best-paying degree.
    pub fn latest_salary(&self) -> Option<SalarySnapshot> {
        let year = self.tables.salaries.iter().map(|r| r.year).max()?;
        let rows: Vec<_> = self.tables.salaries.iter().filter(|r| r.year == year).collect();

        let mut by_degree: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for row in &rows {
            by_degree
                .entry(row.degree.as_str())
                .or_default()
                .push(row.median_salary);
        }
        let (degree, _) = highest_mean(&by_degree)?;
        let all: Vec<f64> = rows.iter().map(|r| r.median_salary).collect();

        Some(SalarySnapshot {
            year,
            median_salary: finite_or_zero(median(&all)),
            top_paying_degree: degree.to_string(),
        })
    }
}

/// Group with the highest mean; the first in key order wins ties.
fn highest_mean<'k>(groups: &BTreeMap<&'k str, Vec<f64>>) -> Option<(&'k str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (&key, values) in groups {
        let m = finite_or_zero(mean(values));
        if best.map_or(true, |(_, b)| m > b) {
            best = Some((key, m));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::datasets::{outcome, salary, two_institution_tables};

    #[test]
    fn engine_delegates_to_tables() {
        let tables = two_institution_tables();
        let engine = AnalyticsEngine::new(&tables);

        assert_eq!(engine.analyze_employment(None, Some(2025)).record_count, 2);
        assert!(engine.compare_institutions("A", "B", None).leaders.is_some());
        assert_eq!(engine.support_services_index()[0].institution, "A");
        assert!(engine.roi_estimate("A", "CS", 1.0, 4).report().is_some());
    }

    #[test]
    fn latest_employment_uses_max_year() {
        let tables = Tables {
            outcomes: vec![
                outcome("A", "CS", 2023, 50.0, 1.0),
                outcome("A", "CS", 2024, 90.0, 1.0),
                outcome("A", "Law", 2024, 70.0, 1.0),
            ],
            ..Tables::default()
        };
        let snapshot = AnalyticsEngine::new(&tables).latest_employment().unwrap();
        assert_eq!(snapshot.year, 2024);
        assert_eq!(snapshot.average_employment_rate, 80.0);
        assert_eq!(snapshot.leading_degree, "CS");
        assert_eq!(snapshot.leading_degree_rate, 90.0);
    }

    #[test]
    fn latest_salary_picks_top_paying_degree() {
        let tables = Tables {
            salaries: vec![
                salary("A", "Arts", 2024, 40_000.0),
                salary("A", "Medicine", 2024, 120_000.0),
                salary("B", "Arts", 2024, 50_000.0),
            ],
            ..Tables::default()
        };
        let snapshot = AnalyticsEngine::new(&tables).latest_salary().unwrap();
        assert_eq!(snapshot.median_salary, 50_000.0);
        assert_eq!(snapshot.top_paying_degree, "Medicine");
    }

    #[test]
    fn snapshots_absent_for_empty_tables() {
        let tables = Tables::default();
        let engine = AnalyticsEngine::new(&tables);
        assert!(engine.latest_employment().is_none());
        assert!(engine.latest_salary().is_none());
    }
}
