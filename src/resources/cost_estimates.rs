//! Cost estimates
//!
//! Costs are reported as decimal strings (e.g. `"12.34"`) and kept as such
//! so no precision is lost.

use super::StatusTimestamps;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::jsonapi::Resource;
use crate::logs::LogReader;
use crate::validation::require_id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A cost estimate resource
pub type CostEstimate = Resource<CostEstimateAttributes>;

/// Status of a cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostEstimateStatus {
    Pending,
    Queued,
    SkippedDueToTargeting,
    Errored,
    Canceled,
    Finished,
    #[serde(other)]
    Unknown,
}

impl CostEstimateStatus {
    pub const TERMINAL: &'static [Self] = &[
        Self::Canceled,
        Self::Errored,
        Self::Finished,
        Self::SkippedDueToTargeting,
    ];

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CostEstimateAttributes {
    pub status: CostEstimateStatus,
    #[serde(default)]
    pub status_timestamps: StatusTimestamps,
    #[serde(default)]
    pub log_read_url: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub delta_monthly_cost: Option<String>,
    #[serde(default)]
    pub prior_monthly_cost: Option<String>,
    #[serde(default)]
    pub proposed_monthly_cost: Option<String>,
    #[serde(default)]
    pub resources_count: u32,
    #[serde(default)]
    pub matched_resources_count: u32,
    #[serde(default)]
    pub unmatched_resources_count: u32,
}

/// Facade over `/cost-estimates`
#[derive(Debug, Clone)]
pub struct CostEstimates {
    client: Client,
}

impl CostEstimates {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn read(&self, cost_estimate_id: &str) -> Result<CostEstimate> {
        require_id(cost_estimate_id, "cost estimate")?;
        self.client
            .read_resource(&format!("cost-estimates/{cost_estimate_id}"))
            .await
    }

    /// Follow the cost estimate log until the estimate reaches a terminal status
    pub async fn logs(
        &self,
        cost_estimate_id: &str,
        cancel: CancellationToken,
    ) -> Result<LogReader> {
        let estimate = self.read(cost_estimate_id).await?;

        let facade = self.clone();
        let id = estimate.id.clone();
        LogReader::new(
            Arc::clone(self.client.http()),
            format!("cost estimate {}", estimate.id),
            &estimate.attributes.log_read_url,
            cancel,
            CostEstimateStatus::TERMINAL,
            move || {
                let facade = facade.clone();
                let id = id.clone();
                async move { Ok::<_, Error>(facade.read(&id).await?.attributes.status) }
            },
        )
    }
}
