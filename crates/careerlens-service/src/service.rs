//! CareerService: the upward operations, each over one cache generation.

use std::sync::Arc;

use careerlens_analytics::format::money;
use careerlens_analytics::{
    AnalyticsEngine, EmploymentAnalysis, InstitutionComparison, RoiEstimate, SupportIndexEntry,
    Trend,
};
use careerlens_cache::{CacheGeneration, DatasetCache};
use careerlens_core::config::CareerConfig;
use careerlens_core::constants::HIGH_CONFIDENCE_MIN_DOCUMENTS;
use careerlens_core::errors::CareerResult;
use careerlens_core::models::DegradationEvent;
use careerlens_core::traits::{
    IClock, IDatasetLoader, IEmbeddingProvider, IGenerationProvider, SystemClock,
};
use careerlens_data::JsonDatasetLoader;
use careerlens_insight::{create_generation_provider, InsightComposer};
use careerlens_retrieval::{create_embedding_provider, RetrieverFactory};
use tracing::{debug, info};

use crate::degradation::DegradationLog;
use crate::responses::{Confidence, ParentReport, SummaryResponse};
use crate::validation;

/// Program length assumed when the caller gives none.
pub const DEFAULT_PROGRAM_YEARS: u32 = 4;

const TOP_INSTITUTIONS_IN_REPORT: usize = 3;

const EMPLOYMENT_KEYWORDS: &[&str] = &["employment", "job"];
const SALARY_KEYWORDS: &[&str] = &["salary", "income"];

const STANDING_ADVICE: &[&str] = &[
    "Key factors for success: early career planning, strong alumni networks, and internship experience.",
    "Consider both employment rate and long-term career growth potential when making decisions.",
];

/// Construct once at startup; share by reference.
pub struct CareerService {
    cache: DatasetCache,
    composer: InsightComposer,
    degradations: DegradationLog,
    default_top_k: usize,
    max_top_k: usize,
}

impl CareerService {
    /// JSON data directory, providers from credentials, wall clock.
    pub fn from_config(config: &CareerConfig) -> Self {
        let loader = Arc::new(JsonDatasetLoader::new(&config.data.data_dir));
        let embedder = create_embedding_provider(&config.providers);
        let generator = create_generation_provider(&config.providers);
        info!(
            data_dir = %config.data.data_dir,
            online = config.providers.online_mode(),
            "career service configured"
        );
        Self::with_parts(config, loader, embedder, generator, Arc::new(SystemClock))
    }

    /// Explicit collaborators. Tables and settings still come from `config`.
    pub fn with_parts(
        config: &CareerConfig,
        loader: Arc<dyn IDatasetLoader>,
        embedder: Option<Arc<dyn IEmbeddingProvider>>,
        generator: Option<Arc<dyn IGenerationProvider>>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        let retrievers = RetrieverFactory::from_config(&config.retrieval, embedder);
        Self {
            cache: DatasetCache::with_clock(loader, retrievers, config.cache.ttl(), clock),
            composer: InsightComposer::from_config(&config.insight, generator),
            degradations: DegradationLog::default(),
            default_top_k: config.retrieval.default_top_k,
            max_top_k: config.retrieval.max_top_k,
        }
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Fallback transitions seen so far, oldest first.
    pub fn degradation_events(&self) -> Vec<DegradationEvent> {
        self.degradations.events()
    }

    /// Whether narratives will first be attempted through the generation provider.
    pub fn llm_enabled(&self) -> bool {
        self.composer.generation_enabled()
    }

    fn generation(&self) -> CareerResult<Arc<CacheGeneration>> {
        let generation = self.cache.ensure_fresh()?;
        debug!(generation = generation.id(), "serving from generation");
        Ok(generation)
    }

    fn record(&self, event: Option<DegradationEvent>) {
        if let Some(event) = event {
            self.degradations.record(event);
        }
    }

    pub fn analyze(&self, degree: Option<&str>, year: Option<i32>) -> CareerResult<EmploymentAnalysis> {
        let year = validation::year(year)?;
        let degree = validation::optional_text(degree);
        let generation = self.generation()?;
        Ok(AnalyticsEngine::new(generation.tables()).analyze_employment(degree, year))
    }

    pub fn compare(
        &self,
        institution_a: &str,
        institution_b: &str,
        year: Option<i32>,
    ) -> CareerResult<InstitutionComparison> {
        let a = validation::required_text("institution_a", institution_a)?;
        let b = validation::required_text("institution_b", institution_b)?;
        let year = validation::year(year)?;
        let generation = self.generation()?;
        Ok(AnalyticsEngine::new(generation.tables()).compare_institutions(a, b, year))
    }

    pub fn support_index(&self) -> CareerResult<Vec<SupportIndexEntry>> {
        let generation = self.generation()?;
        Ok(AnalyticsEngine::new(generation.tables()).support_services_index())
    }

    /// `years` defaults to [`DEFAULT_PROGRAM_YEARS`].
    pub fn roi_estimate(
        &self,
        institution: &str,
        degree: &str,
        tuition_total: f64,
        years: Option<u32>,
    ) -> CareerResult<RoiEstimate> {
        let institution = validation::required_text("institution", institution)?;
        let degree = validation::required_text("degree", degree)?;
        let tuition_total = validation::tuition(tuition_total)?;
        let years = validation::program_years(years.unwrap_or(DEFAULT_PROGRAM_YEARS))?;
        let generation = self.generation()?;
        Ok(AnalyticsEngine::new(generation.tables()).roi_estimate(
            institution,
            degree,
            tuition_total,
            years,
        ))
    }

    /// Answer a question from retrieved reports plus current table figures.
    pub fn summarize(&self, question: &str, top_k: Option<usize>) -> CareerResult<SummaryResponse> {
        let question = validation::required_text("question", question)?;
        let top_k = validation::top_k(top_k.unwrap_or(self.default_top_k), self.max_top_k)?;
        let generation = self.generation()?;

        let trace = generation.retriever().query_traced(question, top_k);
        self.record(trace.degradation);

        let composition = self.composer.summarize(question, &trace.documents);
        let method = composition.method;
        self.record(composition.degradation);

        let mut summary = composition.text;
        summary.push_str(&market_context(&generation, question));

        let sources = trace
            .documents
            .iter()
            .map(|d| d.source().to_string())
            .collect();
        let confidence = if trace.documents.len() >= HIGH_CONFIDENCE_MIN_DOCUMENTS {
            Confidence::High
        } else {
            Confidence::Medium
        };

        Ok(SummaryResponse {
            question: question.to_string(),
            summary,
            sources,
            confidence,
            llm_enabled: self.llm_enabled(),
            processing_method: method,
            retrieval_method: trace.method,
        })
    }

    /// Family-oriented report over employment and support figures.
    pub fn parent_report(&self, degree: Option<&str>, year: Option<i32>) -> CareerResult<ParentReport> {
        let year = validation::year(year)?;
        let degree = validation::optional_text(degree);
        let generation = self.generation()?;
        let engine = AnalyticsEngine::new(generation.tables());

        let scope_degree = degree.unwrap_or("all degrees");
        let scope_year = year.map_or_else(|| "recent years".to_string(), |y| y.to_string());

        let analysis = engine.analyze_employment(degree, year);
        let mut bullets = employment_bullets(&analysis, scope_degree, &scope_year);
        if let Some(best) = engine.support_services_index().first() {
            bullets.push(format!(
                "Best support services: {} offers {} services with {:?} support index.",
                best.institution, best.total_services, best.support_index
            ));
        }
        bullets.extend(STANDING_ADVICE.iter().map(|s| s.to_string()));

        let context = format!("Analysis for {scope_degree} in {scope_year}");
        let composition = self.composer.synthesize(&bullets, &context);
        self.record(composition.degradation);

        Ok(ParentReport {
            report: composition.text,
            bullets,
            context,
            processing_method: composition.method,
        })
    }
}

fn mentions(question: &str, keywords: &[&str]) -> bool {
    let lower = question.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Lines appended to a summary when the question is about jobs or pay.
fn market_context(generation: &CacheGeneration, question: &str) -> String {
    let engine = AnalyticsEngine::new(generation.tables());
    let mut context = String::new();

    if mentions(question, EMPLOYMENT_KEYWORDS) {
        if let Some(snapshot) = engine.latest_employment() {
            context.push_str(&format!(
                "\n\nCurrent market data shows {:.1}% average employment rate, with {} leading at {:.1}%.",
                snapshot.average_employment_rate, snapshot.leading_degree, snapshot.leading_degree_rate
            ));
        }
    }
    if mentions(question, SALARY_KEYWORDS) {
        if let Some(snapshot) = engine.latest_salary() {
            context.push_str(&format!(
                "\n\nCurrent salary data shows median of {}, with {} graduates earning the highest median salary.",
                money(snapshot.median_salary),
                snapshot.top_paying_degree
            ));
        }
    }
    context
}

fn employment_bullets(analysis: &EmploymentAnalysis, degree: &str, year: &str) -> Vec<String> {
    let mut bullets = Vec::new();

    if let Some(rate) = analysis.average_employment_rate {
        bullets.push(format!(
            "Average employment rate is {rate:?}% for {degree} in {year}."
        ));
    }
    if let Some(salary) = analysis.median_salary.filter(|s| *s != 0.0) {
        bullets.push(format!(
            "Median starting salary is {}, providing strong earning potential.",
            money(salary)
        ));
    }
    if let Some(trend) = analysis.trend {
        let advice = match trend {
            Trend::Improving => "This is a growing field with excellent prospects.",
            Trend::Declining | Trend::Stable => "Consider the long-term market outlook.",
        };
        bullets.push(format!("Employment trend is {trend}. {advice}"));
    }
    if !analysis.top_institutions.is_empty() {
        let names = analysis
            .top_institutions
            .iter()
            .take(TOP_INSTITUTIONS_IN_REPORT)
            .map(|s| s.institution.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        bullets.push(format!("Top-performing institutions: {names}."));
    }
    bullets
}
