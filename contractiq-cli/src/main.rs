//! ContractIQ CLI
//!
//! Command-line front-end for the ContractIQ backend: submits contract and
//! vendor workflows, waits on their jobs and prints the results.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "contractiq")]
#[command(about = "ContractIQ procurement and contract analysis CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        global = true,
        env = "CONTRACTIQ_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    /// Status checks before giving up on a job
    #[arg(long, global = true, env = "CONTRACTIQ_MAX_ATTEMPTS", default_value_t = 600)]
    max_attempts: u32,

    /// Wait between status checks, in milliseconds
    #[arg(
        long,
        global = true,
        env = "CONTRACTIQ_POLL_INTERVAL_MS",
        default_value_t = 3000
    )]
    poll_interval_ms: u64,

    /// Double the wait after every status check, up to this many milliseconds
    #[arg(long, global = true, env = "CONTRACTIQ_BACKOFF_MAX_MS")]
    backoff_max_ms: Option<u64>,

    /// Timeout of each HTTP request, in seconds
    #[arg(
        long,
        global = true,
        env = "CONTRACTIQ_REQUEST_TIMEOUT_SECS",
        default_value_t = 60
    )]
    request_timeout_secs: u64,

    /// Run workflows inline instead of queueing them as jobs
    #[arg(long, global = true)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so results on stdout stay pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contractiq=warn,contractiq_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(
        cli.api_url,
        cli.max_attempts,
        cli.poll_interval_ms,
        cli.backoff_max_ms,
        cli.sync,
        cli.request_timeout_secs,
    )?;
    config.validate()?;
    tracing::debug!(?config, "Loaded configuration");

    handle_command(cli.command, &config).await
}
