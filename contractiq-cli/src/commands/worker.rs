//! Worker command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use contractiq_client::ContractIqClient;

use crate::output::print_worker_status;

/// Worker subcommands
#[derive(Subcommand)]
pub enum WorkerCommands {
    /// Show background worker health
    Status,
}

pub async fn handle_worker_command(command: WorkerCommands, client: ContractIqClient) -> Result<()> {
    match command {
        WorkerCommands::Status => {
            let status = client
                .worker_status()
                .await
                .context("Failed to fetch worker status")?;
            print_worker_status(&status);
        }
    }

    Ok(())
}
