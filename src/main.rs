//! flagchase entry point.
//!
//! Parses flags, loads configuration, checks connectivity once, then
//! hands off to the orchestrator. Exit codes: 0 flag claimed, 1 attempt
//! budget exhausted, 2 connectivity probe failed, 3 configuration
//! rejected before any network activity.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flagchase::config::loader::load_config;
use flagchase::config::validation::validate_config;
use flagchase::{ApiClient, Orchestrator, RunConfig, RunOutcome};

/// No flag after the full attempt budget.
const EXIT_EXHAUSTED: u8 = 1;
/// Connectivity probe failed; the attempt loop never started.
const EXIT_PROBE_FAILED: u8 = 2;
/// Configuration was rejected before any network activity.
const EXIT_CONFIG_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "flagchase")]
#[command(about = "Timed token-chain client for the lab API", long_about = None)]
struct Cli {
    /// Base address of the target API.
    #[arg(short, long)]
    url: Option<String>,

    /// Per-call timeout in milliseconds.
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Maximum number of attempts.
    #[arg(short, long)]
    max_attempts: Option<u32>,

    /// Optional TOML config file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagchase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load config");
                return ExitCode::from(EXIT_CONFIG_ERROR);
            }
        },
        None => RunConfig::default(),
    };

    if let Some(url) = cli.url {
        config.client.base_url = url;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.client.request_timeout_ms = timeout_ms;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.retry.max_attempts = max_attempts;
    }

    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            tracing::error!(error = %e, "Invalid configuration");
        }
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    tracing::info!(
        base_url = %config.client.base_url,
        request_timeout_ms = config.client.request_timeout_ms,
        max_attempts = config.retry.max_attempts,
        "Configuration loaded"
    );

    let client = match ApiClient::new(&config.client) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    // One-shot gate; a dead endpoint should not burn attempts.
    if !client.probe().await {
        tracing::error!(
            base_url = %config.client.base_url,
            "API unreachable; check network access to the target"
        );
        return ExitCode::from(EXIT_PROBE_FAILED);
    }
    tracing::info!("Connected to API");

    let orchestrator = Orchestrator::new(client, config.retry.clone());
    match orchestrator.run().await {
        RunOutcome::Claimed(flag) => {
            tracing::info!(flag = %flag, "Run succeeded");
            println!("{}", flag);
            ExitCode::SUCCESS
        }
        RunOutcome::Exhausted { attempts } => {
            tracing::error!(attempts, "Run failed: attempts exhausted");
            tracing::info!("Check the API docs endpoint for timing hints");
            tracing::info!("Consider raising --max-attempts or --timeout-ms");
            ExitCode::from(EXIT_EXHAUSTED)
        }
    }
}
