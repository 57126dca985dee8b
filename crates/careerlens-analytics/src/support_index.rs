//! Support-index scoring: weighted service coverage, square-root compressed.

use std::collections::BTreeSet;

use careerlens_core::models::SupportRecord;
use careerlens_core::sanitize::round_to;
use serde::{Deserialize, Serialize};

/// Weight per recognized service name (lowercase).
const SERVICE_WEIGHTS: &[(&str, f64)] = &[
    ("career counseling", 1.5),
    ("internships", 1.3),
    ("mentorship", 1.3),
    ("alumni network", 1.2),
    ("job fairs", 1.1),
    ("resume workshops", 1.0),
    ("mock interviews", 1.0),
];

/// Weight for any service not in the table.
const DEFAULT_WEIGHT: f64 = 0.8;

/// Weighted sum that maps to a normalized coverage of 100.
const MAX_WEIGHTED_SUM: f64 = 12.0;

fn weight(service: &str) -> f64 {
    SERVICE_WEIGHTS
        .iter()
        .find(|(name, _)| *name == service)
        .map_or(DEFAULT_WEIGHT, |(_, w)| *w)
}

/// Score a set of service names in [0, 100].
///
/// Names are trimmed, lowercased and deduplicated; blanks are ignored.
/// Coverage is normalized against a fixed maximum and clamped to 100, then
/// compressed with a square root so the first services count the most.
pub fn score_support_index<S: AsRef<str>>(services: &[S]) -> f64 {
    let unique: BTreeSet<String> = services
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if unique.is_empty() {
        return 0.0;
    }

    let sum: f64 = unique.iter().map(|s| weight(s)).sum();
    let normalized = (sum / MAX_WEIGHTED_SUM * 100.0).clamp(0.0, 100.0);
    let compressed = round_to(normalized.sqrt() * 10.0 / 100f64.sqrt(), 2);
    round_to(compressed * 10.0, 2)
}

/// One row of the support-services index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportIndexEntry {
    pub institution: String,
    pub services: Vec<String>,
    pub support_index: f64,
    pub career_services_rating: f64,
    pub alumni_network_strength: f64,
    pub total_services: usize,
    pub data_source: String,
    pub last_updated: String,
}

/// Score every institution, highest index first, ties by name.
pub fn support_services_index(rows: &[SupportRecord]) -> Vec<SupportIndexEntry> {
    let mut entries: Vec<SupportIndexEntry> = rows
        .iter()
        .map(|r| SupportIndexEntry {
            institution: r.institution.clone(),
            services: r.services.clone(),
            support_index: score_support_index(&r.services),
            career_services_rating: round_to(r.career_services_rating, 1),
            alumni_network_strength: round_to(r.alumni_network_strength, 1),
            total_services: r.services.len(),
            data_source: r.data_source.clone(),
            last_updated: r.last_updated.clone(),
        })
        .collect();
    entries.sort_by(|a, b| {
        b.support_index
            .total_cmp(&a.support_index)
            .then_with(|| a.institution.cmp(&b.institution))
    });
    entries
}
