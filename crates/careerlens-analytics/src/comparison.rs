//! Head-to-head comparison of two institutions.

use careerlens_core::models::OutcomeRecord;
use careerlens_core::sanitize::round_to;
use serde::{Deserialize, Serialize};

use crate::employment::{distinct_sources, group_by_institution};
use crate::format::money;
use crate::same_name;
use crate::stats::{mean, sample_std};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub institution: String,
    pub avg_employment_rate: f64,
    pub employment_std: f64,
    pub employment_count: usize,
    pub avg_salary: f64,
    pub salary_std: f64,
}

/// Leaders are decided independently and may differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaders {
    pub employment: String,
    pub salary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionComparison {
    pub comparison: Vec<ComparisonStats>,
    pub summary: String,
    pub leaders: Option<Leaders>,
    pub recommendation: Option<String>,
    pub data_quality: Option<String>,
    pub last_updated: Option<String>,
}

/// Compare institutions `a` and `b` (case-insensitive), optionally in one year.
///
/// Leaders are named with the caller's spelling. `a` leads only when strictly
/// ahead, so ties go to `b`.
pub fn compare_institutions(
    rows: &[OutcomeRecord],
    a: &str,
    b: &str,
    year: Option<i32>,
) -> InstitutionComparison {
    let filtered: Vec<&OutcomeRecord> = rows
        .iter()
        .filter(|r| same_name(&r.institution, a) || same_name(&r.institution, b))
        .filter(|r| year.map_or(true, |y| r.year == y))
        .collect();

    if filtered.is_empty() {
        return InstitutionComparison {
            comparison: Vec::new(),
            summary: format!("No matching data found for {a} vs {b} comparison."),
            leaders: None,
            recommendation: Some("Try different institutions or years.".to_string()),
            data_quality: None,
            last_updated: None,
        };
    }

    let comparison: Vec<ComparisonStats> = group_by_institution(&filtered)
        .into_iter()
        .map(|(institution, group)| {
            let rates: Vec<f64> = group.iter().map(|r| r.employment_rate).collect();
            let salaries: Vec<f64> = group.iter().map(|r| r.median_salary).collect();
            ComparisonStats {
                institution: institution.to_string(),
                avg_employment_rate: round_to(mean(&rates), 2),
                employment_std: round_to(sample_std(&rates), 2),
                employment_count: group.len(),
                avg_salary: round_to(mean(&salaries), 2),
                salary_std: round_to(sample_std(&salaries), 2),
            }
        })
        .collect();

    let find = |name: &str| comparison.iter().find(|s| same_name(&s.institution, name));
    let (leaders, summary) = match (comparison.len(), find(a), find(b)) {
        (2, Some(sa), Some(sb)) => {
            let leaders = Leaders {
                employment: leader(a, b, sa.avg_employment_rate, sb.avg_employment_rate),
                salary: leader(a, b, sa.avg_salary, sb.avg_salary),
            };
            let summary = format!(
                "Comparison of {a} vs {b}: {} leads in employment rate ({:.1}% vs {:.1}%), \
                 while {} leads in salary ({} vs {}).",
                leaders.employment,
                sa.avg_employment_rate,
                sb.avg_employment_rate,
                leaders.salary,
                money(sa.avg_salary),
                money(sb.avg_salary),
            );
            (Some(leaders), summary)
        }
        (n, _, _) => (None, format!("Comparison data available for {n} institutions.")),
    };

    InstitutionComparison {
        summary,
        leaders,
        recommendation: None,
        data_quality: Some(format!(
            "Based on {} data sources",
            distinct_sources(&filtered)
        )),
        last_updated: filtered.first().map(|r| r.last_updated.clone()),
        comparison,
    }
}

fn leader(a: &str, b: &str, value_a: f64, value_b: f64) -> String {
    if value_a > value_b { a } else { b }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::datasets::outcome;

    fn rows() -> Vec<OutcomeRecord> {
        vec![
            outcome("A", "CS", 2025, 90.0, 800_000.0),
            outcome("B", "CS", 2025, 80.0, 700_000.0),
        ]
    }

    #[test]
    fn leaders_scenario() {
        let result = compare_institutions(&rows(), "A", "B", Some(2025));
        let leaders = result.leaders.unwrap();
        assert_eq!(leaders.employment, "A");
        assert_eq!(leaders.salary, "A");
        assert_eq!(result.comparison.len(), 2);
    }

    #[test]
    fn leaders_can_differ() {
        let rows = vec![
            outcome("A", "CS", 2025, 90.0, 60_000.0),
            outcome("B", "CS", 2025, 80.0, 70_000.0),
        ];
        let leaders = compare_institutions(&rows, "a", "b", None).leaders.unwrap();
        assert_eq!(leaders.employment, "a");
        assert_eq!(leaders.salary, "b");
    }

    #[test]
    fn tie_goes_to_second() {
        let rows = vec![
            outcome("A", "CS", 2025, 85.0, 70_000.0),
            outcome("B", "CS", 2025, 85.0, 70_000.0),
        ];
        let leaders = compare_institutions(&rows, "A", "B", None).leaders.unwrap();
        assert_eq!(leaders.employment, "B");
        assert_eq!(leaders.salary, "B");
    }

    #[test]
    fn no_rows_is_no_data() {
        let result = compare_institutions(&rows(), "X", "Y", None);
        assert!(result.comparison.is_empty());
        assert!(result.leaders.is_none());
        assert!(result.recommendation.is_some());
    }

    #[test]
    fn one_side_missing_has_no_leaders() {
        let result = compare_institutions(&rows(), "A", "Z", None);
        assert_eq!(result.comparison.len(), 1);
        assert!(result.leaders.is_none());
        assert_eq!(result.summary, "Comparison data available for 1 institutions.");
    }
}
