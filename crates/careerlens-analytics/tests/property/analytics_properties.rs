use careerlens_analytics::{
    score_support_index, AnalyticsEngine, EmploymentAnalysis, InstitutionComparison, RoiEstimate,
    RoiReport,
};
use careerlens_core::models::{OutcomeRecord, SalaryRecord, Tables};
use proptest::prelude::*;

const INSTITUTIONS: &[&str] = &["A", "B", "C"];
const DEGREES: &[&str] = &["CS", "Law"];
const RECOGNIZED: &[&str] = &[
    "career counseling",
    "internships",
    "mentorship",
    "alumni network",
    "job fairs",
    "resume workshops",
    "mock interviews",
];

fn arb_outcome() -> impl Strategy<Value = OutcomeRecord> {
    (
        prop::sample::select(INSTITUTIONS),
        prop::sample::select(DEGREES),
        2020i32..2026,
        0.0f64..=100.0,
        0.0f64..2_000_000.0,
    )
        .prop_map(|(inst, degree, year, rate, salary)| OutcomeRecord {
            institution: inst.to_string(),
            degree: degree.to_string(),
            year,
            employment_rate: rate,
            median_salary: salary,
            data_source: "prop".to_string(),
            last_updated: "Unknown".to_string(),
        })
}

fn arb_salary() -> impl Strategy<Value = SalaryRecord> {
    (
        prop::sample::select(INSTITUTIONS),
        prop::sample::select(DEGREES),
        0.0f64..=100.0,
        0.0f64..2_000_000.0,
        prop::option::of(0.0f64..2_000_000.0),
    )
        .prop_map(|(inst, degree, rate, salary, p25)| SalaryRecord {
            institution: inst.to_string(),
            degree: degree.to_string(),
            year: 2025,
            median_salary: salary,
            employment_rate: rate,
            salary_percentile_25: p25,
            salary_percentile_75: None,
            data_source: "prop".to_string(),
            last_updated: "Unknown".to_string(),
        })
}

fn arb_tables() -> impl Strategy<Value = Tables> {
    (
        prop::collection::vec(arb_outcome(), 0..12),
        prop::collection::vec(arb_salary(), 0..6),
    )
        .prop_map(|(outcomes, salaries)| Tables {
            outcomes,
            salaries,
            support: Vec::new(),
        })
}

fn employment_floats(analysis: &EmploymentAnalysis) -> Vec<f64> {
    let mut values: Vec<f64> = analysis
        .top_institutions
        .iter()
        .flat_map(|s| [s.avg_employment_rate, s.employment_std, s.avg_salary])
        .collect();
    values.extend(analysis.average_employment_rate);
    values.extend(analysis.median_salary);
    values
}

fn comparison_floats(comparison: &InstitutionComparison) -> Vec<f64> {
    comparison
        .comparison
        .iter()
        .flat_map(|s| [s.avg_employment_rate, s.employment_std, s.avg_salary, s.salary_std])
        .collect()
}

fn roi_floats(report: &RoiReport) -> Vec<f64> {
    vec![
        report.tuition_total,
        report.median_salary,
        report.salary_percentile_25,
        report.salary_percentile_75,
        report.employment_rate,
        report.expected_income_first_year,
        report.estimated_years_to_break_even,
        report.income_5_year,
        report.income_10_year,
        report.roi_5_year,
        report.roi_10_year,
    ]
}

// ── Results are always finite and serializable ─────────────────────────────

proptest! {
    #[test]
    fn analyses_never_emit_non_finite(
        tables in arb_tables(),
        year in prop::option::of(2020i32..2026),
        tuition in 0.0f64..1_000_000.0,
    ) {
        let engine = AnalyticsEngine::new(&tables);

        let analysis = engine.analyze_employment(None, year);
        prop_assert!(employment_floats(&analysis).iter().all(|v| v.is_finite()));
        let json = serde_json::to_value(&analysis).unwrap();
        prop_assert_eq!(
            json["average_employment_rate"].is_null(),
            analysis.average_employment_rate.is_none()
        );

        let comparison = engine.compare_institutions("A", "B", year);
        prop_assert!(comparison_floats(&comparison).iter().all(|v| v.is_finite()));

        let roi = engine.roi_estimate("a", "cs", tuition, 4);
        if let Some(report) = roi.report() {
            prop_assert!(roi_floats(report).iter().all(|v| v.is_finite()));
        }
        if tuition == 0.0 {
            if let RoiEstimate::Estimate(report) = roi {
                prop_assert_eq!(report.roi_5_year, 0.0);
                prop_assert_eq!(report.roi_10_year, 0.0);
            }
        }
    }

    #[test]
    fn top_institutions_sorted_and_capped(tables in arb_tables()) {
        let analysis = AnalyticsEngine::new(&tables).analyze_employment(None, None);
        prop_assert!(analysis.top_institutions.len() <= 5);
        for pair in analysis.top_institutions.windows(2) {
            prop_assert!(pair[0].avg_employment_rate >= pair[1].avg_employment_rate);
        }
        prop_assert_eq!(analysis.average_employment_rate.is_none(), tables.outcomes.is_empty());
    }
}

// ── Support index is monotone in recognized services ──────────────────────

proptest! {
    #[test]
    fn support_index_non_decreasing(order in Just(RECOGNIZED.to_vec()).prop_shuffle()) {
        let mut services: Vec<&str> = Vec::new();
        let mut previous = score_support_index(&services);
        prop_assert_eq!(previous, 0.0);
        for service in order {
            services.push(service);
            let next = score_support_index(&services);
            prop_assert!(next >= previous, "{} < {} after adding {}", next, previous, service);
            prop_assert!((0.0..=100.0).contains(&next));
            previous = next;
        }
    }
}
