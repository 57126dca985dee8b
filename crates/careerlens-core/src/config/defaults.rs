// Single source of truth for all default values.

// --- Data ---
pub const DEFAULT_DATA_DIR: &str = "data";

// --- Cache ---
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MAX_TOP_K: usize = 50;
pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;

// --- Insight ---
pub const DEFAULT_SUMMARY_SENTENCES: usize = 8;

// --- Providers ---
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
