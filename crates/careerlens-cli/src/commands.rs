use anyhow::Result;
use careerlens_service::CareerService;
use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Employment analysis, optionally filtered by degree and year
    Analyze {
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Answer a question from the report corpus
    Insights {
        question: String,
        /// Documents to retrieve
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Compare two institutions
    Compare {
        institution_a: String,
        institution_b: String,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Support-services index for every institution
    Support,

    /// Return-on-investment estimate
    Roi {
        institution: String,
        degree: String,
        /// Total tuition for the whole program
        #[arg(long)]
        tuition: f64,
        /// Program length in years (default: 4)
        #[arg(long)]
        years: Option<u32>,
    },

    /// Parent-focused narrative report
    Report {
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze { .. } => "analyze",
            Self::Insights { .. } => "insights",
            Self::Compare { .. } => "compare",
            Self::Support => "support",
            Self::Roi { .. } => "roi",
            Self::Report { .. } => "report",
        }
    }

    pub fn run(&self, service: &CareerService) -> Result<Value> {
        let value = match self {
            Self::Analyze { degree, year } => {
                serde_json::to_value(service.analyze(degree.as_deref(), *year)?)?
            }
            Self::Insights { question, top_k } => {
                serde_json::to_value(service.summarize(question, *top_k)?)?
            }
            Self::Compare {
                institution_a,
                institution_b,
                year,
            } => serde_json::to_value(service.compare(institution_a, institution_b, *year)?)?,
            Self::Support => serde_json::to_value(service.support_index()?)?,
            Self::Roi {
                institution,
                degree,
                tuition,
                years,
            } => serde_json::to_value(service.roi_estimate(institution, degree, *tuition, *years)?)?,
            Self::Report { degree, year } => {
                serde_json::to_value(service.parent_report(degree.as_deref(), *year)?)?
            }
        };
        Ok(value)
    }
}
