//! Applies
//!
//! An apply is the second phase of a run. Its log grows while Terraform
//! runs and is followed with a [`LogReader`].

use super::StatusTimestamps;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::jsonapi::Resource;
use crate::logs::LogReader;
use crate::validation::require_id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// An apply resource
pub type Apply = Resource<ApplyAttributes>;

/// Status of an apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStatus {
    Pending,
    ManagedQueued,
    Queued,
    Running,
    Errored,
    Canceled,
    Finished,
    Unreachable,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl ApplyStatus {
    /// Statuses after which the log does not grow
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

/// Attributes of an apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplyAttributes {
    pub status: ApplyStatus,
    #[serde(default)]
    pub status_timestamps: StatusTimestamps,
    /// Signed, time-limited URL of the apply log
    #[serde(default)]
    pub log_read_url: String,
    #[serde(default)]
    pub resource_additions: u32,
    #[serde(default)]
    pub resource_changes: u32,
    #[serde(default)]
    pub resource_destructions: u32,
    #[serde(default)]
    pub resource_imports: u32,
}

/// Facade over `/applies`
#[derive(Debug, Clone)]
pub struct Applies {
    client: Client,
}

impl Applies {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Read an apply by ID
    pub async fn read(&self, apply_id: &str) -> Result<Apply> {
        require_id(apply_id, "apply")?;
        self.client
            .read_resource(&format!("applies/{apply_id}"))
            .await
    }

    /// Follow the apply log until the apply reaches a terminal status
    pub async fn logs(&self, apply_id: &str, cancel: CancellationToken) -> Result<LogReader> {
        let apply = self.read(apply_id).await?;

        let facade = self.clone();
        let id = apply.id.clone();
        LogReader::new(
            Arc::clone(self.client.http()),
            format!("apply {}", apply.id),
            &apply.attributes.log_read_url,
            cancel,
            ApplyStatus::TERMINAL,
            move || {
                let facade = facade.clone();
                let id = id.clone();
                async move { Ok::<_, Error>(facade.read(&id).await?.attributes.status) }
            },
        )
    }
}
