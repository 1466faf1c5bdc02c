//! Workflow request DTOs
//!
//! Constructors take the required fields and fill everything else with the
//! backend's own defaults.

use serde::{Deserialize, Serialize};

/// Body of `POST /qa`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub query: String,
    pub workspace_name: String,
    /// `short`, `medium` or `long`
    pub response_size: String,
    /// `sentence` or `points`
    pub response_type: String,
    pub compare_chatgpt: bool,
    pub share_data_with_chatgpt: bool,
    pub use_web: bool,
    /// Scrape this page instead of the workspace documents when non-empty
    pub specific_url: String,
}

impl QuestionRequest {
    pub fn new(query: impl Into<String>, workspace_name: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            workspace_name: workspace_name.into(),
            response_size: "medium".to_string(),
            response_type: "sentence".to_string(),
            compare_chatgpt: true,
            share_data_with_chatgpt: true,
            use_web: false,
            specific_url: String::new(),
        }
    }
}

/// Body of `POST /score`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContractsRequest {
    pub criterion: String,
    pub workspace_name: String,
    pub max_score: u32,
    pub compare_chatgpt: bool,
    pub share_data_with_chatgpt: bool,
}

impl ScoreContractsRequest {
    pub fn new(
        criterion: impl Into<String>,
        workspace_name: impl Into<String>,
        max_score: u32,
    ) -> Self {
        Self {
            criterion: criterion.into(),
            workspace_name: workspace_name.into(),
            max_score,
            compare_chatgpt: true,
            share_data_with_chatgpt: true,
        }
    }
}

/// Body of `POST /audit` and `POST /legal`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRequest {
    pub workspace_name: String,
}

impl WorkspaceRequest {
    pub fn new(workspace_name: impl Into<String>) -> Self {
        Self {
            workspace_name: workspace_name.into(),
        }
    }
}

/// Body of `POST /vendor-recommendations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecommendationRequest {
    pub project_requirements: String,
    pub workspace_name: String,
    pub industry: String,
    pub location_preference: String,
    pub vendor_count: u32,
    /// `balanced`, `cost` or `quality`
    pub preference: String,
    pub vendor_type: String,
    #[serde(flatten)]
    pub sources: ResearchSources,
}

impl VendorRecommendationRequest {
    pub fn new(project_requirements: impl Into<String>, workspace_name: impl Into<String>) -> Self {
        Self {
            project_requirements: project_requirements.into(),
            workspace_name: workspace_name.into(),
            industry: "general".to_string(),
            location_preference: "any".to_string(),
            vendor_count: 5,
            preference: "balanced".to_string(),
            vendor_type: "auto".to_string(),
            sources: ResearchSources::default(),
        }
    }
}

/// Optional third-party sources consulted during vendor research
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSources {
    pub enable_reddit_analysis: bool,
    pub enable_linkedin_analysis: bool,
    pub enable_google_reviews: bool,
}

/// Body of `POST /vendor-research`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorResearchRequest {
    pub vendor_name: String,
    pub location: String,
    pub workspace_name: String,
    #[serde(flatten)]
    pub sources: ResearchSources,
}

impl VendorResearchRequest {
    pub fn new(
        vendor_name: impl Into<String>,
        location: impl Into<String>,
        workspace_name: impl Into<String>,
    ) -> Self {
        Self {
            vendor_name: vendor_name.into(),
            location: location.into(),
            workspace_name: workspace_name.into(),
            sources: ResearchSources::default(),
        }
    }
}

/// A vendor named for comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRef {
    pub name: String,
    pub location: String,
}

impl VendorRef {
    /// Parse `name@location`; the location defaults to empty
    pub fn parse(input: &str) -> Self {
        match input.split_once('@') {
            Some((name, location)) => Self {
                name: name.trim().to_string(),
                location: location.trim().to_string(),
            },
            None => Self {
                name: input.trim().to_string(),
                location: String::new(),
            },
        }
    }
}

/// Body of `POST /vendor-comparison`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorComparisonRequest {
    pub vendors: Vec<VendorRef>,
    pub workspace_name: String,
}

/// Body of `POST /webhooks/elevenlabs/run_ui_flow`
///
/// Describes a page the UI automation worker should act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunUiFlowRequest {
    pub intent: String,
    pub dom_snapshot: serde_json::Value,
    pub screenshot: String,
    pub page_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_map: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_invocation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl RunUiFlowRequest {
    /// A flow on a page with no captured inputs or screenshot yet
    pub fn new(intent: impl Into<String>, page_url: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            dom_snapshot: serde_json::json!({"inputs": []}),
            screenshot: String::new(),
            page_url: page_url.into(),
            code_map: None,
            session_id: None,
            user_id: None,
            tool_invocation_id: None,
            ts: None,
        }
    }
}
