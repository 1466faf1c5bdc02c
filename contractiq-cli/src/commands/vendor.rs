//! Vendor command handlers
//!
//! Recommendation, single-vendor research and multi-vendor comparison.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use contractiq_client::ContractIqClient;
use contractiq_core::dto::workflow::{
    ResearchSources, VendorComparisonRequest, VendorRecommendationRequest, VendorRef,
    VendorResearchRequest,
};

use super::wait_and_print;
use crate::config::Config;

/// Third-party sources to include in vendor research
#[derive(Args, Clone, Copy, Default)]
pub struct SourcesArgs {
    /// Include Reddit discussions
    #[arg(long)]
    pub reddit: bool,

    /// Include LinkedIn company data
    #[arg(long)]
    pub linkedin: bool,

    /// Include Google reviews
    #[arg(long)]
    pub google_reviews: bool,
}

impl From<SourcesArgs> for ResearchSources {
    fn from(args: SourcesArgs) -> Self {
        Self {
            enable_reddit_analysis: args.reddit,
            enable_linkedin_analysis: args.linkedin,
            enable_google_reviews: args.google_reviews,
        }
    }
}

/// Vendor subcommands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// Recommend vendors for a project
    Recommend {
        /// Project requirements, in plain words
        requirements: String,

        /// Workspace name
        #[arg(short, long)]
        workspace: String,

        /// Industry of the project
        #[arg(long, default_value = "general")]
        industry: String,

        /// Preferred vendor location
        #[arg(long, default_value = "any")]
        location: String,

        /// Number of vendors to recommend
        #[arg(long, default_value_t = 5)]
        count: u32,

        /// Ranking preference (balanced, cost, quality, ...)
        #[arg(long, default_value = "balanced")]
        preference: String,

        /// Vendor type, or auto to let the backend decide
        #[arg(long, default_value = "auto")]
        vendor_type: String,

        #[command(flatten)]
        sources: SourcesArgs,
    },
    /// Research a single vendor
    Research {
        /// Vendor name
        vendor: String,

        /// Vendor location
        #[arg(long, default_value = "")]
        location: String,

        /// Workspace name
        #[arg(short, long)]
        workspace: String,

        #[command(flatten)]
        sources: SourcesArgs,
    },
    /// Compare two or more vendors
    Compare {
        /// Workspace name
        #[arg(short, long)]
        workspace: String,

        /// Vendors as NAME or NAME@LOCATION
        #[arg(required = true, num_args = 2..)]
        vendors: Vec<String>,
    },
}

/// Handle vendor commands
///
/// # Arguments
/// * `command` - The vendor command to execute
/// * `client` - Backend client
/// * `config` - The CLI configuration
pub async fn handle_vendor_command(
    command: VendorCommands,
    client: ContractIqClient,
    config: &Config,
) -> Result<()> {
    let submitted = match command {
        VendorCommands::Recommend {
            requirements,
            workspace,
            industry,
            location,
            count,
            preference,
            vendor_type,
            sources,
        } => {
            let mut req = VendorRecommendationRequest::new(requirements, workspace);
            req.industry = industry;
            req.location_preference = location;
            req.vendor_count = count;
            req.preference = preference;
            req.vendor_type = vendor_type;
            req.sources = sources.into();

            client
                .vendor_recommendations(&req, config.async_mode)
                .await
                .context("Failed to submit vendor recommendation")?
        }
        VendorCommands::Research {
            vendor,
            location,
            workspace,
            sources,
        } => {
            let mut req = VendorResearchRequest::new(vendor, location, workspace);
            req.sources = sources.into();

            client
                .vendor_research(&req, config.async_mode)
                .await
                .context("Failed to submit vendor research")?
        }
        VendorCommands::Compare { workspace, vendors } => {
            let req = comparison_request(workspace, &vendors);

            client
                .compare_vendors(&req, config.async_mode)
                .await
                .context("Failed to submit vendor comparison")?
        }
    };

    wait_and_print(client, config, submitted).await
}

fn comparison_request(workspace: String, vendors: &[String]) -> VendorComparisonRequest {
    VendorComparisonRequest {
        vendors: vendors.iter().map(|v| VendorRef::parse(v)).collect(),
        workspace_name: workspace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_request_parses_locations() {
        let vendors = vec!["Globex@Berlin".to_string(), "Initech".to_string()];
        let req = comparison_request("acme".to_string(), &vendors);

        assert_eq!(req.workspace_name, "acme");
        assert_eq!(req.vendors[0].name, "Globex");
        assert_eq!(req.vendors[0].location, "Berlin");
        assert_eq!(req.vendors[1].name, "Initech");
        assert_eq!(req.vendors[1].location, "");
    }

    #[test]
    fn test_sources_map_to_flags() {
        let sources: ResearchSources = SourcesArgs {
            reddit: true,
            linkedin: false,
            google_reviews: true,
        }
        .into();

        assert!(sources.enable_reddit_analysis);
        assert!(!sources.enable_linkedin_analysis);
        assert!(sources.enable_google_reviews);
    }
}
