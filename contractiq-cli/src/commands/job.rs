//! Job command handlers
//!
//! Handles job-related CLI commands: inspecting a job, waiting on one
//! and submitting raw jobs by type.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use contractiq_client::ContractIqClient;
use contractiq_core::domain::job::JobId;
use contractiq_core::domain::workflow::Workflow;
use contractiq_core::dto::job::{JobSubmitted, SubmitResponse};
use serde_json::Value;

use super::wait_and_print;
use crate::config::Config;
use crate::output::print_job_details;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Get job details
    Get {
        /// Job ID
        id: String,
    },
    /// Wait for a job to finish and print its result
    Wait {
        /// Job ID
        id: String,
    },
    /// Submit a job by type through the generic job endpoint
    Submit {
        /// Job type (e.g. qa_processing, score_contracts, run_ui_flow)
        job_type: Workflow,

        /// Job payload as JSON
        #[arg(short, long, default_value = "{}")]
        payload: String,

        /// Print the job ID and return without waiting
        #[arg(long)]
        no_wait: bool,
    },
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The job command to execute
/// * `client` - Backend client
/// * `config` - The CLI configuration
pub async fn handle_job_command(
    command: JobCommands,
    client: ContractIqClient,
    config: &Config,
) -> Result<()> {
    match command {
        JobCommands::Get { id } => get_job(&client, &id).await,
        JobCommands::Wait { id } => wait_job(client, config, &id).await,
        JobCommands::Submit {
            job_type,
            payload,
            no_wait,
        } => submit_job(client, config, job_type, &payload, no_wait).await,
    }
}

/// Get and display a single job
async fn get_job(client: &ContractIqClient, id: &str) -> Result<()> {
    let job_id = JobId::new(id).context("Invalid job ID")?;
    let job = client
        .get_job(&job_id)
        .await
        .with_context(|| format!("Failed to fetch job {}", job_id))?;

    print_job_details(job_id.as_str(), &job);

    Ok(())
}

async fn wait_job(client: ContractIqClient, config: &Config, id: &str) -> Result<()> {
    let job_id = JobId::new(id).context("Invalid job ID")?;
    wait_and_print(client, config, SubmitResponse::Queued(JobSubmitted { job_id })).await
}

async fn submit_job(
    client: ContractIqClient,
    config: &Config,
    workflow: Workflow,
    payload: &str,
    no_wait: bool,
) -> Result<()> {
    let payload = parse_payload(payload)?;
    let job_id = client
        .submit_workflow(workflow, &payload)
        .await
        .context("Failed to submit job")?;

    if no_wait {
        println!("{}", "Job submitted".green());
        println!("  ID: {}", job_id.to_string().cyan());
        return Ok(());
    }

    wait_and_print(client, config, SubmitResponse::Queued(JobSubmitted { job_id })).await
}

fn parse_payload(payload: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(payload).context("Payload is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("Payload must be a JSON object");
    }
    Ok(value)
}
