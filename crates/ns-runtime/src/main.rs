//! # Nexus Secrets
//!
//! Entry point: parse flags, install telemetry, run until Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ns_runtime::{load_config, SecretsRuntime};
use ns_telemetry::{init_telemetry, TelemetryConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: &str = match option_env!("NS_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};
const BUILD_DATE: &str = match option_env!("NS_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Secret-telling game: a secret stays private until someone else says it
#[derive(Debug, Parser)]
#[command(name = "nexus-secrets", disable_version_flag = true)]
struct Cli {
    /// Show version information and exit
    #[arg(long)]
    version: bool,

    /// Listen port (overrides PORT and SECRETS_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn version_text() -> String {
    format!("nexus-secrets {VERSION}\nCommit: {COMMIT}\nBuilt: {BUILD_DATE}")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_text());
        return Ok(());
    }

    let mut telemetry = TelemetryConfig::from_env();
    if cli.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    let _guard = init_telemetry(telemetry).context("failed to initialize telemetry")?;

    let mut config = load_config().context("invalid configuration")?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let mut runtime = SecretsRuntime::new(config).context("failed to build runtime")?;
    let addr = runtime.start().await.context("failed to start")?;

    info!("  Riddle:  http://{addr}/");
    info!("  API:     http://{addr}/api/");
    info!("Nexus Secrets is running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;

    runtime.shutdown().await;
    Ok(())
}
