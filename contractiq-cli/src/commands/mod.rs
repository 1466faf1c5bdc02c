//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod contract;
mod job;
mod vendor;
mod worker;

use contract::{AskArgs, ScoreArgs, WorkspaceArgs};
use job::JobCommands;
use vendor::VendorCommands;
use worker::WorkerCommands;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use contractiq_client::{ContractIqClient, JobPoller, PollOutcome};
use contractiq_core::dto::job::SubmitResponse;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::output;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question about the documents of a workspace
    Ask(AskArgs),
    /// Score every contract of a workspace against a criterion
    Score(ScoreArgs),
    /// Audit the contracts of a workspace
    Audit(WorkspaceArgs),
    /// Run a legal analysis of a workspace
    Legal(WorkspaceArgs),
    /// Score the resumes of a workspace against its job description
    ScoreResumes(WorkspaceArgs),
    /// Vendor recommendation, research and comparison
    Vendor {
        #[command(subcommand)]
        command: VendorCommands,
    },
    /// Inspect, submit and wait on jobs
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Backend worker health
    Worker {
        #[command(subcommand)]
        command: WorkerCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = build_client(config)?;

    match command {
        Commands::Ask(args) => contract::ask(client, config, args).await,
        Commands::Score(args) => contract::score(client, config, args).await,
        Commands::Audit(args) => contract::audit(client, config, args).await,
        Commands::Legal(args) => contract::legal(client, config, args).await,
        Commands::ScoreResumes(args) => contract::score_resumes(client, config, args).await,
        Commands::Vendor { command } => vendor::handle_vendor_command(command, client, config).await,
        Commands::Job { command } => job::handle_job_command(command, client, config).await,
        Commands::Worker { command } => worker::handle_worker_command(command, client).await,
    }
}

fn build_client(config: &Config) -> Result<ContractIqClient> {
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(ContractIqClient::with_client(&config.api_url, http_client))
}

/// Wait for a submitted workflow and print its outcome
///
/// Ctrl-C stops watching the job; the job itself keeps running on the backend.
pub(crate) async fn wait_and_print(
    client: ContractIqClient,
    config: &Config,
    submitted: SubmitResponse,
) -> Result<()> {
    let job_id = submitted.job_id().cloned();
    if let Some(job_id) = &job_id {
        eprintln!("{} Job {} queued", "▸".cyan(), job_id.to_string().bold());
    }

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let poller = JobPoller::new(client, config.poll).with_progress(output::print_progress);
    let outcome = poller.resolve(submitted, cancel).await;
    interrupt.abort();

    if job_id.is_some() {
        output::clear_progress();
    }

    match outcome.context("Job did not complete")? {
        PollOutcome::Completed(result) => {
            output::print_result(&result);
        }
        PollOutcome::Cancelled => {
            let job_id = job_id.map(|id| id.to_string()).unwrap_or_default();
            println!(
                "{}",
                format!("Stopped watching job {}; it keeps running on the backend.", job_id)
                    .yellow()
            );
        }
    }

    Ok(())
}
