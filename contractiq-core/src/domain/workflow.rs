//! Workflow catalogue
//!
//! Every long-running backend operation that can be submitted as a job.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A backend workflow that runs as an asynchronous job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    #[serde(rename = "qa_processing")]
    Qa,
    ScoreContracts,
    AuditContracts,
    LegalAnalysis,
    ScoreResumes,
    VendorRecommendations,
    VendorResearch,
    VendorComparison,
    RunUiFlow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown workflow '{0}'")]
pub struct UnknownWorkflow(pub String);

impl Workflow {
    pub const ALL: [Workflow; 9] = [
        Workflow::Qa,
        Workflow::ScoreContracts,
        Workflow::AuditContracts,
        Workflow::LegalAnalysis,
        Workflow::ScoreResumes,
        Workflow::VendorRecommendations,
        Workflow::VendorResearch,
        Workflow::VendorComparison,
        Workflow::RunUiFlow,
    ];

    /// Job type name the backend records for this workflow
    pub fn job_type(&self) -> &'static str {
        match self {
            Workflow::Qa => "qa_processing",
            Workflow::ScoreContracts => "score_contracts",
            Workflow::AuditContracts => "audit_contracts",
            Workflow::LegalAnalysis => "legal_analysis",
            Workflow::ScoreResumes => "score_resumes",
            Workflow::VendorRecommendations => "vendor_recommendations",
            Workflow::VendorResearch => "vendor_research",
            Workflow::VendorComparison => "vendor_comparison",
            Workflow::RunUiFlow => "run_ui_flow",
        }
    }

    /// Path segments of the dedicated submit endpoint, relative to the API root
    ///
    /// Segments are raw; callers encode them when building a URL.
    pub fn route(&self) -> &'static [&'static str] {
        match self {
            Workflow::Qa => &["qa"],
            Workflow::ScoreContracts => &["score"],
            Workflow::AuditContracts => &["audit"],
            Workflow::LegalAnalysis => &["legal"],
            Workflow::ScoreResumes => &["score-resumes"],
            Workflow::VendorRecommendations => &["vendor-recommendations"],
            Workflow::VendorResearch => &["vendor-research"],
            Workflow::VendorComparison => &["vendor-comparison"],
            Workflow::RunUiFlow => &["webhooks", "elevenlabs", "run_ui_flow"],
        }
    }

    /// Whether the workspace name is appended to the route as a final segment
    pub fn addressed_by_workspace(&self) -> bool {
        matches!(self, Workflow::ScoreResumes)
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.job_type())
    }
}

impl FromStr for Workflow {
    type Err = UnknownWorkflow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Workflow::ALL
            .into_iter()
            .find(|w| w.job_type() == s)
            .ok_or_else(|| UnknownWorkflow(s.to_string()))
    }
}
