//! Contract workflow commands
//!
//! Question answering, contract scoring, audits, legal analysis and
//! resume scoring. Each command submits its workflow and waits for it.

use anyhow::{Context, Result};
use clap::Args;
use contractiq_client::ContractIqClient;
use contractiq_core::dto::workflow::{QuestionRequest, ScoreContractsRequest, WorkspaceRequest};

use super::wait_and_print;
use crate::config::Config;

/// Arguments of commands that only need a workspace
#[derive(Args)]
pub struct WorkspaceArgs {
    /// Workspace name
    #[arg(short, long)]
    pub workspace: String,
}

/// Arguments of `ask`
#[derive(Args)]
pub struct AskArgs {
    /// The question to ask
    pub query: String,

    /// Workspace name
    #[arg(short, long)]
    pub workspace: String,

    /// Answer length (short, medium, long)
    #[arg(long, default_value = "medium")]
    pub size: String,

    /// Answer style (sentence, bullets, ...)
    #[arg(long, default_value = "sentence")]
    pub style: String,

    /// Let the backend search the web as well
    #[arg(long)]
    pub web: bool,

    /// Restrict the web search to this URL
    #[arg(long)]
    pub url: Option<String>,

    /// Do not compare with or share data with ChatGPT
    #[arg(long)]
    pub no_chatgpt: bool,
}

impl AskArgs {
    fn into_request(self) -> QuestionRequest {
        let mut req = QuestionRequest::new(self.query, self.workspace);
        req.response_size = self.size;
        req.response_type = self.style;
        req.use_web = self.web || self.url.is_some();
        req.specific_url = self.url.unwrap_or_default();
        if self.no_chatgpt {
            req.compare_chatgpt = false;
            req.share_data_with_chatgpt = false;
        }
        req
    }
}

/// Arguments of `score`
#[derive(Args)]
pub struct ScoreArgs {
    /// Criterion every contract is scored against
    pub criterion: String,

    /// Workspace name
    #[arg(short, long)]
    pub workspace: String,

    /// Highest possible score
    #[arg(long, default_value_t = 10)]
    pub max_score: u32,

    /// Do not compare with or share data with ChatGPT
    #[arg(long)]
    pub no_chatgpt: bool,
}

impl ScoreArgs {
    fn into_request(self) -> ScoreContractsRequest {
        let mut req = ScoreContractsRequest::new(self.criterion, self.workspace, self.max_score);
        if self.no_chatgpt {
            req.compare_chatgpt = false;
            req.share_data_with_chatgpt = false;
        }
        req
    }
}

pub async fn ask(client: ContractIqClient, config: &Config, args: AskArgs) -> Result<()> {
    let submitted = client
        .ask_question(&args.into_request(), config.async_mode)
        .await
        .context("Failed to submit question")?;

    wait_and_print(client, config, submitted).await
}

pub async fn score(client: ContractIqClient, config: &Config, args: ScoreArgs) -> Result<()> {
    let submitted = client
        .score_contracts(&args.into_request(), config.async_mode)
        .await
        .context("Failed to submit contract scoring")?;

    wait_and_print(client, config, submitted).await
}

pub async fn audit(client: ContractIqClient, config: &Config, args: WorkspaceArgs) -> Result<()> {
    let submitted = client
        .audit_contracts(&WorkspaceRequest::new(args.workspace), config.async_mode)
        .await
        .context("Failed to submit contract audit")?;

    wait_and_print(client, config, submitted).await
}

pub async fn legal(client: ContractIqClient, config: &Config, args: WorkspaceArgs) -> Result<()> {
    let submitted = client
        .legal_analysis(&WorkspaceRequest::new(args.workspace), config.async_mode)
        .await
        .context("Failed to submit legal analysis")?;

    wait_and_print(client, config, submitted).await
}

pub async fn score_resumes(
    client: ContractIqClient,
    config: &Config,
    args: WorkspaceArgs,
) -> Result<()> {
    let submitted = client
        .score_resumes(&args.workspace, config.async_mode)
        .await
        .context("Failed to submit resume scoring")?;

    wait_and_print(client, config, submitted).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask_args() -> AskArgs {
        AskArgs {
            query: "Who pays for shipping?".to_string(),
            workspace: "acme".to_string(),
            size: "short".to_string(),
            style: "bullets".to_string(),
            web: false,
            url: None,
            no_chatgpt: false,
        }
    }

    #[test]
    fn test_ask_request_carries_style() {
        let req = ask_args().into_request();
        assert_eq!(req.response_size, "short");
        assert_eq!(req.response_type, "bullets");
        assert!(!req.use_web);
        assert!(req.compare_chatgpt);
    }

    #[test]
    fn test_ask_url_enables_web() {
        let mut args = ask_args();
        args.url = Some("https://example.com/terms".to_string());
        args.no_chatgpt = true;

        let req = args.into_request();
        assert!(req.use_web);
        assert_eq!(req.specific_url, "https://example.com/terms");
        assert!(!req.compare_chatgpt);
        assert!(!req.share_data_with_chatgpt);
    }

    #[test]
    fn test_score_request() {
        let args = ScoreArgs {
            criterion: "Liability caps".to_string(),
            workspace: "acme".to_string(),
            max_score: 5,
            no_chatgpt: false,
        };

        let req = args.into_request();
        assert_eq!(req.max_score, 5);
        assert_eq!(req.criterion, "Liability caps");
    }
}
