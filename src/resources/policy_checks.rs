//! Policy checks
//!
//! Unlike plans and applies, policy check output is not appended to while
//! the check runs: it only exists once the check has left the queue. The
//! `logs` operation therefore waits for that and fetches the output once.

use super::StatusTimestamps;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::jsonapi::Resource;
use crate::pagination::{collect_all, ListOptions, Page};
use crate::validation::require_id;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Wait between status checks while a policy check is queued
pub const POLICY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A policy check resource
pub type PolicyCheck = Resource<PolicyCheckAttributes>;

/// Status of a policy check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Pending,
    Queued,
    Passed,
    SoftFailed,
    HardFailed,
    Overridden,
    Errored,
    Canceled,
    Unreachable,
    #[serde(other)]
    Unknown,
}

impl PolicyStatus {
    pub const TERMINAL: &'static [Self] = &[
        Self::Passed,
        Self::SoftFailed,
        Self::HardFailed,
        Self::Overridden,
        Self::Errored,
        Self::Canceled,
        Self::Unreachable,
    ];

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }

    /// Still waiting for evaluation to start
    pub fn is_waiting(self) -> bool {
        matches!(self, Self::Pending | Self::Queued)
    }
}

/// Level at which a policy set is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyScope {
    Organization,
    Workspace,
    #[serde(other)]
    Unknown,
}

/// Counts of policy outcomes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyResult {
    pub result: bool,
    pub passed: u32,
    pub total_failed: u32,
    pub hard_failed: u32,
    pub soft_failed: u32,
    pub advisory_failed: u32,
    pub duration: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyActions {
    pub is_overridable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyPermissions {
    pub can_override: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyCheckAttributes {
    pub status: PolicyStatus,
    #[serde(default)]
    pub status_timestamps: StatusTimestamps,
    #[serde(default)]
    pub scope: Option<PolicyScope>,
    #[serde(default)]
    pub result: Option<PolicyResult>,
    #[serde(default)]
    pub actions: PolicyActions,
    #[serde(default)]
    pub permissions: PolicyPermissions,
}

/// Facade over `/policy-checks`
#[derive(Debug, Clone)]
pub struct PolicyChecks {
    client: Client,
}

impl PolicyChecks {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the policy checks of a run
    pub async fn list(&self, run_id: &str, options: &ListOptions) -> Result<Page<PolicyCheck>> {
        require_id(run_id, "run")?;
        self.client
            .list_resources(
                &format!("runs/{run_id}/policy-checks"),
                options.apply_to(RequestConfig::new()),
            )
            .await
    }

    /// Every policy check of a run, across all pages
    pub async fn list_all(&self, run_id: &str) -> Result<Vec<PolicyCheck>> {
        collect_all(ListOptions::new(), move |opts| async move {
            self.list(run_id, &opts).await
        })
        .await
    }

    pub async fn read(&self, policy_check_id: &str) -> Result<PolicyCheck> {
        require_id(policy_check_id, "policy check")?;
        self.client
            .read_resource(&format!("policy-checks/{policy_check_id}"))
            .await
    }

    /// Override a soft-failed policy check
    pub async fn override_check(&self, policy_check_id: &str) -> Result<PolicyCheck> {
        require_id(policy_check_id, "policy check")?;
        self.client
            .post_action_returning(
                &format!("policy-checks/{policy_check_id}/actions/override"),
                None,
            )
            .await
    }

    /// Wait until the check has been evaluated, then fetch its output.
    ///
    /// Cancelling the token while waiting returns [`Error::Cancelled`].
    pub async fn logs(&self, policy_check_id: &str, cancel: CancellationToken) -> Result<Bytes> {
        loop {
            let check = self.read(policy_check_id).await?;
            if !check.attributes.status.is_waiting() {
                break;
            }

            debug!(
                "Policy check {policy_check_id} is {:?}, waiting",
                check.attributes.status
            );
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(Error::Cancelled),
                () = tokio::time::sleep(POLICY_POLL_INTERVAL) => {}
            }
        }

        let response = self
            .client
            .http()
            .get(&format!("policy-checks/{policy_check_id}/output"))
            .await?;
        Ok(response.bytes().await?)
    }
}
