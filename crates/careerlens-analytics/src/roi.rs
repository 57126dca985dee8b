//! Return-on-investment estimate from the salary table.

use std::collections::BTreeSet;

use careerlens_core::constants::{MIN_FIRST_YEAR_INCOME, SALARY_GROWTH_RATE};
use careerlens_core::models::SalaryRecord;
use careerlens_core::sanitize::{finite_or_zero, round_to};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::money;
use crate::same_name;
use crate::stats::median;

/// Fallback 25th/75th percentile multipliers of the median salary.
const P25_FACTOR: f64 = 0.8;
const P75_FACTOR: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// First match wins: Low, then Medium, else High.
    pub fn classify(employment_rate: f64, median_salary: f64) -> Self {
        if employment_rate > 85.0 && median_salary > 70_000.0 {
            Self::Low
        } else if employment_rate > 75.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub institution: String,
    pub degree: String,
    pub years: u32,
    pub tuition_total: f64,
    pub median_salary: f64,
    pub salary_percentile_25: f64,
    pub salary_percentile_75: f64,
    pub salary_range: String,
    pub employment_rate: f64,
    pub expected_income_first_year: f64,
    pub estimated_years_to_break_even: f64,
    pub income_5_year: f64,
    pub income_10_year: f64,
    pub roi_5_year: f64,
    pub roi_10_year: f64,
    pub risk_level: RiskLevel,
    pub data_quality: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoiEstimate {
    Estimate(RoiReport),
    NoData {
        summary: String,
        recommendation: String,
    },
}

impl RoiEstimate {
    pub fn report(&self) -> Option<&RoiReport> {
        match self {
            Self::Estimate(report) => Some(report),
            Self::NoData { .. } => None,
        }
    }
}

/// Cumulative income over `years` with fixed annual growth.
pub fn cumulative_income(first_year: f64, years: i32) -> f64 {
    first_year * ((1.0 + SALARY_GROWTH_RATE).powi(years) - 1.0) / SALARY_GROWTH_RATE
}

fn roi_percent(income: f64, tuition_total: f64) -> f64 {
    if tuition_total > 0.0 {
        finite_or_zero((income - tuition_total) / tuition_total * 100.0)
    } else {
        0.0
    }
}

fn median_of_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.flatten().filter(|v| v.is_finite()).collect();
    (!present.is_empty()).then(|| median(&present))
}

/// Estimate ROI for an institution/degree pair (both case-insensitive).
///
/// Inputs are assumed validated: `tuition_total` finite and non-negative.
pub fn roi_estimate(
    rows: &[SalaryRecord],
    institution: &str,
    degree: &str,
    tuition_total: f64,
    years: u32,
) -> RoiEstimate {
    let matched: Vec<&SalaryRecord> = rows
        .iter()
        .filter(|r| same_name(&r.institution, institution) && same_name(&r.degree, degree))
        .collect();

    if matched.is_empty() {
        debug!(institution, degree, "no salary rows match");
        return RoiEstimate::NoData {
            summary: format!("No salary data available for {institution} - {degree} combination."),
            recommendation: "Try different institution or degree combinations.".to_string(),
        };
    }

    let salaries: Vec<f64> = matched.iter().map(|r| r.median_salary).collect();
    let rates: Vec<f64> = matched.iter().map(|r| r.employment_rate).collect();
    let median_salary = finite_or_zero(median(&salaries));
    let employment_rate = finite_or_zero(median(&rates));

    let p25 = median_of_present(matched.iter().map(|r| r.salary_percentile_25))
        .unwrap_or(median_salary * P25_FACTOR);
    let p75 = median_of_present(matched.iter().map(|r| r.salary_percentile_75))
        .unwrap_or(median_salary * P75_FACTOR);

    let first_year = finite_or_zero(median_salary * (employment_rate / 100.0));
    let break_even = tuition_total / first_year.max(MIN_FIRST_YEAR_INCOME);
    let income_5 = finite_or_zero(cumulative_income(first_year, 5));
    let income_10 = finite_or_zero(cumulative_income(first_year, 10));

    let sources = matched
        .iter()
        .map(|r| r.data_source.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    RoiEstimate::Estimate(RoiReport {
        institution: institution.to_string(),
        degree: degree.to_string(),
        years,
        tuition_total: round_to(tuition_total, 2),
        median_salary: round_to(median_salary, 0),
        salary_percentile_25: round_to(p25, 0),
        salary_percentile_75: round_to(p75, 0),
        salary_range: format!("{} - {}", money(p25.trunc()), money(p75.trunc())),
        employment_rate: round_to(employment_rate, 1),
        expected_income_first_year: round_to(first_year, 0),
        estimated_years_to_break_even: round_to(break_even, 1),
        income_5_year: round_to(income_5, 0),
        income_10_year: round_to(income_10, 0),
        roi_5_year: round_to(roi_percent(income_5, tuition_total), 1),
        roi_10_year: round_to(roi_percent(income_10, tuition_total), 1),
        risk_level: RiskLevel::classify(employment_rate, median_salary),
        data_quality: format!(
            "Based on {} records from {sources} sources",
            matched.len()
        ),
        last_updated: matched[0].last_updated.clone(),
    })
}
