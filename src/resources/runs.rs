//! Runs
//!
//! A run ties together a plan, an optional cost estimate and policy checks,
//! and an apply. The related IDs are exposed through the run's
//! relationships so their logs can be followed.

use super::StatusTimestamps;
use crate::client::Client;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::jsonapi::{NewResource, Resource};
use crate::pagination::{collect_all, ListOptions, Page};
use crate::validation::{require_field, require_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A run resource
pub type Run = Resource<RunAttributes>;

/// Status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Fetching,
    FetchingCompleted,
    PrePlanRunning,
    PrePlanCompleted,
    Queuing,
    PlanQueued,
    Planning,
    Planned,
    CostEstimating,
    CostEstimated,
    PolicyChecking,
    PolicyOverride,
    PolicySoftFailed,
    PolicyChecked,
    Confirmed,
    PostPlanRunning,
    PostPlanCompleted,
    PlannedAndFinished,
    PlannedAndSaved,
    ApplyQueued,
    Applying,
    Applied,
    Discarded,
    Errored,
    Canceled,
    ForceCanceled,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Statuses from which a run never moves on
    pub const FINAL: &'static [Self] = &[
        Self::Applied,
        Self::PlannedAndFinished,
        Self::PlannedAndSaved,
        Self::Discarded,
        Self::Errored,
        Self::Canceled,
        Self::ForceCanceled,
    ];

    pub fn is_final(self) -> bool {
        Self::FINAL.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunAttributes {
    pub status: RunStatus,
    #[serde(default)]
    pub status_timestamps: StatusTimestamps,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_changes: bool,
    #[serde(default)]
    pub is_destroy: bool,
    #[serde(default)]
    pub auto_apply: bool,
    #[serde(default)]
    pub plan_only: bool,
    #[serde(default)]
    pub refresh: bool,
    #[serde(default)]
    pub refresh_only: bool,
    #[serde(default)]
    pub target_addrs: Vec<String>,
    #[serde(default)]
    pub replace_addrs: Vec<String>,
}

impl Resource<RunAttributes> {
    pub fn workspace_id(&self) -> Option<&str> {
        self.related_id("workspace")
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.related_id("plan")
    }

    pub fn apply_id(&self) -> Option<&str> {
        self.related_id("apply")
    }

    pub fn cost_estimate_id(&self) -> Option<&str> {
        self.related_id("cost-estimate")
    }

    pub fn policy_check_ids(&self) -> Vec<&str> {
        self.related_ids("policy-checks")
    }
}

/// Options for creating a run
#[derive(Debug, Clone, Default)]
pub struct RunCreateOptions {
    /// Workspace to run in (required)
    pub workspace_id: Option<String>,
    pub message: Option<String>,
    pub is_destroy: Option<bool>,
    pub auto_apply: Option<bool>,
    pub plan_only: Option<bool>,
    pub refresh: Option<bool>,
    pub refresh_only: Option<bool>,
    pub target_addrs: Vec<String>,
    pub replace_addrs: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct RunCreateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_only: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    target_addrs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    replace_addrs: Vec<String>,
}

/// Facade over `/runs`
#[derive(Debug, Clone)]
pub struct Runs {
    client: Client,
}

impl Runs {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the runs of a workspace
    pub async fn list(&self, workspace_id: &str, options: &ListOptions) -> Result<Page<Run>> {
        require_id(workspace_id, "workspace")?;
        self.client
            .list_resources(
                &format!("workspaces/{workspace_id}/runs"),
                options.apply_to(RequestConfig::new()),
            )
            .await
    }

    pub async fn list_all(&self, workspace_id: &str) -> Result<Vec<Run>> {
        collect_all(ListOptions::new(), move |opts| async move {
            self.list(workspace_id, &opts).await
        })
        .await
    }

    /// Queue a new run
    pub async fn create(&self, options: RunCreateOptions) -> Result<Run> {
        require_field(options.workspace_id.as_deref(), "workspace")?;
        let workspace_id = options.workspace_id.unwrap_or_default();
        require_id(&workspace_id, "workspace")?;

        let attributes = RunCreateAttributes {
            message: options.message,
            is_destroy: options.is_destroy,
            auto_apply: options.auto_apply,
            plan_only: options.plan_only,
            refresh: options.refresh,
            refresh_only: options.refresh_only,
            target_addrs: options.target_addrs,
            replace_addrs: options.replace_addrs,
        };
        let body = NewResource::new("runs", attributes).relate(
            "workspace",
            "workspaces",
            workspace_id,
        );
        self.client.create_resource("runs", body).await
    }

    pub async fn read(&self, run_id: &str) -> Result<Run> {
        require_id(run_id, "run")?;
        self.client.read_resource(&format!("runs/{run_id}")).await
    }

    /// Apply a run that is waiting for confirmation
    pub async fn apply(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.action(run_id, "apply", comment).await
    }

    /// Interrupt a planning or applying run
    pub async fn cancel(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.action(run_id, "cancel", comment).await
    }

    /// Cancel a run that did not respond to a normal cancel
    pub async fn force_cancel(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.action(run_id, "force-cancel", comment).await
    }

    /// Skip any remaining work on a run that is waiting for confirmation
    pub async fn discard(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.action(run_id, "discard", comment).await
    }

    async fn action(&self, run_id: &str, action: &str, comment: Option<&str>) -> Result<()> {
        require_id(run_id, "run")?;
        let body = comment.map(|comment| json!({ "comment": comment }));
        self.client
            .post_action(&format!("runs/{run_id}/actions/{action}"), body)
            .await
    }
}
