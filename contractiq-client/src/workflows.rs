//! Workflow submission endpoints
//!
//! Each submitter posts to the workflow's dedicated route. With
//! `async_mode = true` the backend queues the work and answers with a job id;
//! otherwise it runs the workflow inline and answers with the result.

use contractiq_core::domain::job::JobId;
use contractiq_core::domain::workflow::Workflow;
use contractiq_core::dto::job::{SubmitResponse, UiFlowAccepted};
use contractiq_core::dto::workflow::{
    QuestionRequest, RunUiFlowRequest, ScoreContractsRequest, VendorComparisonRequest,
    VendorRecommendationRequest, VendorResearchRequest, WorkspaceRequest,
};
use serde::Serialize;

use crate::ContractIqClient;
use crate::error::{ClientError, Result};

impl ContractIqClient {
    /// Ask a question about the documents in a workspace
    pub async fn ask_question(
        &self,
        req: &QuestionRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(Workflow::Qa, &req.workspace_name, Some(req), async_mode)
            .await
    }

    /// Score every contract in a workspace against one criterion
    pub async fn score_contracts(
        &self,
        req: &ScoreContractsRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(
            Workflow::ScoreContracts,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Run a contract audit for a workspace
    pub async fn audit_contracts(
        &self,
        req: &WorkspaceRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(
            Workflow::AuditContracts,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Run a legal analysis for a workspace
    pub async fn legal_analysis(
        &self,
        req: &WorkspaceRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(
            Workflow::LegalAnalysis,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Score the uploaded resumes of a workspace against its job description
    ///
    /// The workspace is addressed in the path; the request has no body.
    pub async fn score_resumes(
        &self,
        workspace_name: &str,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit::<()>(Workflow::ScoreResumes, workspace_name, None, async_mode)
            .await
    }

    /// Generate vendor recommendations for a project
    pub async fn vendor_recommendations(
        &self,
        req: &VendorRecommendationRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(
            Workflow::VendorRecommendations,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Research a single vendor
    pub async fn vendor_research(
        &self,
        req: &VendorResearchRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        self.submit(
            Workflow::VendorResearch,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Compare several vendors on generated criteria
    pub async fn compare_vendors(
        &self,
        req: &VendorComparisonRequest,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        if req.vendors.len() < 2 {
            return Err(ClientError::InvalidRequest(
                "vendor comparison needs at least two vendors".to_string(),
            ));
        }

        self.submit(
            Workflow::VendorComparison,
            &req.workspace_name,
            Some(req),
            async_mode,
        )
        .await
    }

    /// Queue a UI automation flow through its webhook
    ///
    /// The webhook always queues, so the answer is a job id.
    pub async fn run_ui_flow(&self, req: &RunUiFlowRequest) -> Result<JobId> {
        if req.intent.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "UI flow intent must not be empty".to_string(),
            ));
        }

        let url = self.endpoint(Workflow::RunUiFlow.route())?;
        tracing::debug!(
            workflow = %Workflow::RunUiFlow,
            intent = %req.intent,
            "Submitting workflow"
        );
        let response = self.client.post(url).json(req).send().await?;

        let accepted: UiFlowAccepted = self.handle_response(response).await?;
        Ok(accepted.job_id)
    }

    async fn submit<B: Serialize + ?Sized>(
        &self,
        workflow: Workflow,
        workspace_name: &str,
        body: Option<&B>,
        async_mode: bool,
    ) -> Result<SubmitResponse> {
        if workspace_name.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "workspace name must not be empty".to_string(),
            ));
        }

        let workspace_segment = workflow.addressed_by_workspace().then_some(workspace_name);
        let url = self.endpoint(workflow.route().iter().copied().chain(workspace_segment))?;
        let mut request = self.client.post(url).query(&[("async_mode", async_mode)]);
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%workflow, async_mode, "Submitting workflow");
        let response = request.send().await?;

        self.handle_response(response).await
    }
}
