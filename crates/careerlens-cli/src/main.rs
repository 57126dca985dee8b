//! `careerlens`: run one engine operation and print the result as JSON.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use careerlens_core::tracing_setup::init_tracing;
use careerlens_core::CareerConfig;
use careerlens_service::CareerService;
use clap::Parser;
use tracing::debug;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "careerlens")]
#[command(about = "Graduate career outcomes: analytics, retrieval, and reports", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(long, global = true, env = "CAREERLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory, overriding the config file and environment.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn load_config(cli: &Cli) -> anyhow::Result<CareerConfig> {
    let mut config = match &cli.config {
        Some(path) => CareerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CareerConfig::default(),
    };
    config
        .apply_env_overrides()
        .context("applying environment overrides")?;
    if let Some(dir) = &cli.data_dir {
        config.data.data_dir = dir.display().to_string();
    }
    config.validate().context("validating config")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.observability);
    debug!(command = cli.command.name(), "starting");

    let service = CareerService::from_config(&config);
    let output = cli.command.run(&service)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
