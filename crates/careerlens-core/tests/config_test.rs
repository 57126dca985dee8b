use std::collections::HashMap;

use careerlens_core::config::*;
use careerlens_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CareerConfig::from_toml("").unwrap();

    assert_eq!(config.data.data_dir, "data");
    assert_eq!(config.cache.ttl_secs, 3_600);
    assert_eq!(config.retrieval.default_top_k, 5);
    assert_eq!(config.retrieval.max_top_k, 50);
    assert_eq!(config.retrieval.bm25_k1, 1.5);
    assert_eq!(config.retrieval.bm25_b, 0.75);
    assert_eq!(config.insight.summary_sentences, 8);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.providers.online_mode());
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[cache]
ttl_secs = 120

[retrieval]
default_top_k = 3
"#;
    let config = CareerConfig::from_toml(toml).unwrap();
    assert_eq!(config.cache.ttl_secs, 120);
    assert_eq!(config.retrieval.default_top_k, 3);
    // Non-overridden fields keep defaults
    assert_eq!(config.retrieval.max_top_k, 50);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = CareerConfig::from_toml("[cache\nttl_secs = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn online_mode_requires_a_non_blank_credential() {
    let mut providers = ProviderConfig::default();
    providers.google_api_key = Some("   ".to_string());
    assert!(!providers.online_mode());

    providers.hf_api_token = Some("hf_token".to_string());
    assert!(providers.online_mode());
    assert_eq!(providers.api_key(), Some("hf_token"));
}

#[test]
fn env_overrides_apply_and_skip_empty_values() {
    let env: HashMap<&str, &str> = [
        ("DATA_DIR", "/srv/careers"),
        ("OPENAI_API_KEY", "sk-test"),
        ("GOOGLE_API_KEY", ""),
        ("CAREERLENS_CACHE_TTL_SECS", "60"),
    ]
    .into_iter()
    .collect();

    let mut config = CareerConfig::default();
    config
        .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.data.data_dir, "/srv/careers");
    assert_eq!(config.providers.openai_api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.providers.google_api_key, None);
    assert_eq!(config.cache.ttl_secs, 60);
    assert!(config.providers.online_mode());
}

#[test]
fn non_numeric_ttl_override_is_rejected() {
    let mut config = CareerConfig::default();
    let err = config
        .apply_overrides_from(|key| (key == "CAREERLENS_CACHE_TTL_SECS").then(|| "soon".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn validate_rejects_unusable_values() {
    let mut config = CareerConfig::default();
    config.cache.ttl_secs = 0;
    assert!(config.validate().is_err());

    let mut config = CareerConfig::default();
    config.retrieval.default_top_k = 80;
    assert!(config.validate().is_err());

    let mut config = CareerConfig::default();
    config.retrieval.bm25_b = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = CareerConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CareerConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.cache.ttl_secs, config.cache.ttl_secs);
    assert_eq!(roundtripped.data.data_dir, config.data.data_dir);
}
