//! Built-in industry briefs appended after local reports.

use careerlens_core::constants::SOURCE_METADATA_KEY;
use careerlens_core::models::Document;

use crate::TYPE_METADATA_KEY;

struct Brief {
    id: &'static str,
    source: &'static str,
    date: &'static str,
    text: &'static str,
}

const BRIEFS: &[Brief] = &[
    Brief {
        id: "industry_trends_2025_2030",
        source: "Industry Outlook 2025-2030",
        date: "2025-01-15",
        text: "Technology hiring is projected to keep growing through 2030, with data science \
               and AI roles in the highest demand. Starting salaries in these roles are expected \
               to rise faster than the graduate average. Hybrid and remote positions are becoming \
               the norm at technology employers. Quantum computing, biotechnology, and sustainable \
               technology are emerging sources of well-paid graduate jobs.",
    },
    Brief {
        id: "career_services_effectiveness",
        source: "Career Services Study",
        date: "2024-02-01",
        text: "Universities with comprehensive career services report employment rates about 25 \
               percent higher within six months of graduation. The programs that matter most are \
               early career counseling, alumni network connections, industry partnerships, \
               internship placement, and resume and interview workshops.",
    },
    Brief {
        id: "salary_trends_analysis_2025_2030",
        source: "Graduate Salary Analysis 2025-2030",
        date: "2025-01-20",
        text: "Graduate salaries vary widely by institution and degree. STEM graduates from \
               top-tier universities are expected to command 40 to 50 percent higher starting \
               salaries by 2030. Long-term salary growth depends more on individual performance \
               and networking than on the ranking of the first institution. Skills in AI and \
               other emerging technologies carry a growing salary premium.",
    },
];

/// The built-in briefs as documents, in a fixed order.
pub fn builtin_briefs() -> Vec<Document> {
    BRIEFS
        .iter()
        .map(|b| {
            Document::new(b.id, b.text)
                .with_metadata(SOURCE_METADATA_KEY, b.source)
                .with_metadata(TYPE_METADATA_KEY, "web_content")
                .with_metadata("date", b.date)
        })
        .collect()
}
