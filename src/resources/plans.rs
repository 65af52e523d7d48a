//! Plans

use super::StatusTimestamps;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::jsonapi::Resource;
use crate::logs::LogReader;
use crate::validation::require_id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A plan resource
pub type Plan = Resource<PlanAttributes>;

/// Status of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Pending,
    ManagedQueued,
    Queued,
    Running,
    Errored,
    Canceled,
    Finished,
    Unreachable,
    #[serde(other)]
    Unknown,
}

impl PlanStatus {
    pub const TERMINAL: &'static [Self] = &[
        Self::Canceled,
        Self::Errored,
        Self::Finished,
        Self::Unreachable,
    ];

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlanAttributes {
    pub status: PlanStatus,
    #[serde(default)]
    pub status_timestamps: StatusTimestamps,
    #[serde(default)]
    pub log_read_url: String,
    #[serde(default)]
    pub has_changes: bool,
    #[serde(default)]
    pub resource_additions: u32,
    #[serde(default)]
    pub resource_changes: u32,
    #[serde(default)]
    pub resource_destructions: u32,
    #[serde(default)]
    pub resource_imports: u32,
}

/// Facade over `/plans`
#[derive(Debug, Clone)]
pub struct Plans {
    client: Client,
}

impl Plans {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn read(&self, plan_id: &str) -> Result<Plan> {
        require_id(plan_id, "plan")?;
        self.client.read_resource(&format!("plans/{plan_id}")).await
    }

    /// Follow the plan log until the plan reaches a terminal status
    pub async fn logs(&self, plan_id: &str, cancel: CancellationToken) -> Result<LogReader> {
        let plan = self.read(plan_id).await?;

        let facade = self.clone();
        let id = plan.id.clone();
        LogReader::new(
            Arc::clone(self.client.http()),
            format!("plan {}", plan.id),
            &plan.attributes.log_read_url,
            cancel,
            PlanStatus::TERMINAL,
            move || {
                let facade = facade.clone();
                let id = id.clone();
                async move { Ok::<_, Error>(facade.read(&id).await?.attributes.status) }
            },
        )
    }
}
