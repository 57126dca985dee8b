//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

const TARGETS: &[&str] = &[
    "careerlens",
    "careerlens_core",
    "careerlens_retrieval",
    "careerlens_cache",
    "careerlens_analytics",
    "careerlens_insight",
    "careerlens_data",
    "careerlens_service",
];

/// Initialize the careerlens tracing/logging system.
///
/// Reads `CAREERLENS_LOG` for per-target levels
/// (`CAREERLENS_LOG=careerlens_retrieval=debug,careerlens_cache=info`).
/// Falls back to the configured level for all careerlens crates.
///
/// Idempotent: calling it more than once is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let default_directive = TARGETS
            .iter()
            .map(|target| format!("{target}={}", config.log_level))
            .collect::<Vec<_>>()
            .join(",");
        let filter = EnvFilter::try_from_env("CAREERLENS_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
