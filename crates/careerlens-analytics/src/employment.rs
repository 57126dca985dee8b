//! Employment analysis over the outcome table.

use std::collections::{BTreeMap, BTreeSet};

use careerlens_core::constants::TOP_INSTITUTIONS_LIMIT;
use careerlens_core::models::OutcomeRecord;
use careerlens_core::sanitize::{finite_or_zero, round_to};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::money;
use crate::same_name;
use crate::stats::{mean, median, sample_std};

/// Direction of the mean employment rate between the earliest and latest
/// filtered years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-institution aggregate of the filtered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionStats {
    pub institution: String,
    pub avg_employment_rate: f64,
    pub employment_std: f64,
    pub record_count: usize,
    pub avg_salary: f64,
}

/// Result of `analyze_employment`. The no-data form has `None` aggregates
/// and an empty institution list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentAnalysis {
    pub summary: String,
    pub top_institutions: Vec<InstitutionStats>,
    pub average_employment_rate: Option<f64>,
    pub median_salary: Option<f64>,
    pub trend: Option<Trend>,
    pub record_count: usize,
    pub data_quality: String,
    pub last_updated: Option<String>,
}

impl EmploymentAnalysis {
    fn no_data() -> Self {
        Self {
            summary: "No matching records found for the specified criteria.".to_string(),
            top_institutions: Vec::new(),
            average_employment_rate: None,
            median_salary: None,
            trend: None,
            record_count: 0,
            data_quality: "No data available".to_string(),
            last_updated: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }
}

/// Rows matching an optional degree (case-insensitive) and year.
pub(crate) fn filter_outcomes<'a>(
    rows: &'a [OutcomeRecord],
    degree: Option<&str>,
    year: Option<i32>,
) -> Vec<&'a OutcomeRecord> {
    rows.iter()
        .filter(|r| degree.map_or(true, |d| same_name(&r.degree, d)))
        .filter(|r| year.map_or(true, |y| r.year == y))
        .collect()
}

/// Group rows by exact institution name, in name order.
pub(crate) fn group_by_institution<'a>(
    rows: &[&'a OutcomeRecord],
) -> BTreeMap<&'a str, Vec<&'a OutcomeRecord>> {
    let mut groups: BTreeMap<&str, Vec<&OutcomeRecord>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.institution.as_str()).or_default().push(row);
    }
    groups
}

pub(crate) fn distinct_sources(rows: &[&OutcomeRecord]) -> usize {
    rows.iter()
        .map(|r| r.data_source.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

fn rates(rows: &[&OutcomeRecord]) -> Vec<f64> {
    rows.iter().map(|r| r.employment_rate).collect()
}

/// Compare the mean rate at the latest year against the earliest year.
/// Years in between are ignored.
pub(crate) fn trend(rows: &[&OutcomeRecord]) -> Trend {
    let (Some(min_year), Some(max_year)) = (
        rows.iter().map(|r| r.year).min(),
        rows.iter().map(|r| r.year).max(),
    ) else {
        return Trend::Stable;
    };
    if min_year == max_year {
        return Trend::Stable;
    }

    let mean_at = |year: i32| {
        let at: Vec<f64> = rows
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.employment_rate)
            .collect();
        finite_or_zero(mean(&at))
    };

    if mean_at(max_year) > mean_at(min_year) {
        Trend::Improving
    } else {
        Trend::Declining
    }
}

/// Analyze employment for the rows matching `degree` and `year`.
pub fn analyze_employment(
    rows: &[OutcomeRecord],
    degree: Option<&str>,
    year: Option<i32>,
) -> EmploymentAnalysis {
    let filtered = filter_outcomes(rows, degree, year);
    if filtered.is_empty() {
        debug!(?degree, ?year, "no outcome rows match");
        return EmploymentAnalysis::no_data();
    }

    let mut ranked: Vec<(f64, InstitutionStats)> = group_by_institution(&filtered)
        .into_iter()
        .map(|(institution, group)| {
            let group_rates = rates(&group);
            let salaries: Vec<f64> = group.iter().map(|r| r.median_salary).collect();
            let mean_rate = finite_or_zero(mean(&group_rates));
            let stats = InstitutionStats {
                institution: institution.to_string(),
                avg_employment_rate: round_to(mean_rate, 2),
                employment_std: round_to(sample_std(&group_rates), 2),
                record_count: group.len(),
                avg_salary: round_to(mean(&salaries), 2),
            };
            (mean_rate, stats)
        })
        .collect();
    // Rank on the unrounded mean; rounding is for display only.
    ranked.sort_by(|(a_rate, a), (b_rate, b)| {
        b_rate
            .total_cmp(a_rate)
            .then_with(|| a.institution.cmp(&b.institution))
    });
    let mut ranked: Vec<InstitutionStats> = ranked.into_iter().map(|(_, stats)| stats).collect();
    ranked.truncate(TOP_INSTITUTIONS_LIMIT);

    let avg_rate = round_to(mean(&rates(&filtered)), 2);
    let salaries: Vec<f64> = filtered.iter().map(|r| r.median_salary).collect();
    let median_salary = round_to(median(&salaries), 0);
    let trend = trend(&filtered);
    let count = filtered.len();

    EmploymentAnalysis {
        summary: format!(
            "Analysis of {count} records shows average employment rate of {avg_rate:.2}% \
             with median salary of {}. Trend: {trend}.",
            money(median_salary)
        ),
        top_institutions: ranked,
        average_employment_rate: Some(avg_rate),
        median_salary: Some(median_salary),
        trend: Some(trend),
        record_count: count,
        data_quality: format!(
            "Based on {count} records from {} sources",
            distinct_sources(&filtered)
        ),
        last_updated: filtered.first().map(|r| r.last_updated.clone()),
    }
}
