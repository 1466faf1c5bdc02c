//! Terminal rendering of jobs and results

use std::io::Write;

use colored::*;
use contractiq_client::PollProgress;
use contractiq_core::domain::job::{JobRecord, JobStatus};
use contractiq_core::dto::worker::WorkerStatus;
use serde_json::Value;

/// Overwrite the waiting indicator on stderr
pub fn print_progress(progress: &PollProgress) {
    let status = match progress.status {
        Some(status) => colorize_status(status),
        None => "fetch failed".red(),
    };

    let mut stderr = std::io::stderr();
    let _ = write!(
        stderr,
        "\r{} Waiting for job {} [{}] check {}/{}, next in {:.1}s   ",
        "⧗".cyan(),
        progress.job_id.to_string().dimmed(),
        status,
        progress.attempt,
        progress.max_attempts,
        progress.next_delay.as_secs_f64()
    );
    let _ = stderr.flush();
}

/// Finish the waiting indicator line
pub fn clear_progress() {
    eprintln!();
}

/// Print a workflow result
///
/// Strings are printed as-is; everything else as pretty JSON.
pub fn print_result(result: &Value) {
    println!("{}", "Result:".bold());
    match result {
        Value::String(text) => println!("{}", text),
        Value::Null => println!("{}", "(no result)".dimmed()),
        other => match serde_json::to_string_pretty(other) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", other),
        },
    }

    if let Some(best) = result.get("best_vendor").and_then(Value::as_str) {
        println!("\n{} {}", "Best vendor:".bold(), best.green());
    }
}

/// Print a job record as reported by the backend
pub fn print_job_details(job_id: &str, job: &JobRecord) {
    let status = match job.status() {
        Ok(status) => colorize_status(status),
        Err(_) => job.status.magenta(),
    };

    println!("{}", "Job Details:".bold());
    println!("  ID:     {}", job_id.cyan());
    println!("  Status: {}", status);
    if let Some(job_type) = &job.job_type {
        println!("  Type:   {}", job_type);
    }

    if let Some(payload) = &job.payload {
        println!("\n{}", "Payload:".bold());
        if let Ok(pretty) = serde_json::to_string_pretty(payload) {
            println!("{}", pretty);
        }
    }

    if let Some(result) = &job.result {
        println!();
        print_result(result);
    }

    if let Some(error) = &job.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

pub fn print_worker_status(status: &WorkerStatus) {
    let marker = if status.is_healthy() {
        "✓".green()
    } else {
        "✗".red()
    };

    println!("{} Worker {}", marker, status.status.bold());
    println!("  Redis connected: {}", yes_no(status.redis_connected));
    println!("  Worker thread:   {}", yes_no(status.worker_thread_alive));
    if let Some(count) = status.jobs_in_queue {
        println!("  Jobs tracked:    {}", count);
    }
    if let Some(error) = &status.error {
        println!("  Error:           {}", error.red());
    }
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}

/// Colorize job status for display
pub fn colorize_status(status: JobStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        JobStatus::Pending => status_str.yellow(),
        JobStatus::Processing => status_str.cyan(),
        JobStatus::Success => status_str.green(),
        JobStatus::Failure => status_str.red(),
    }
}
