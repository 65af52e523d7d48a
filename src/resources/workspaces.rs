//! Workspaces
//!
//! Workspaces are addressed either by organization and name or by ID;
//! lock and unlock only accept the ID.

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::jsonapi::{NewResource, Resource};
use crate::pagination::{collect_all, ListOptions, Page};
use crate::validation::{require_field, require_id, require_organization, valid_string_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A workspace resource
pub type Workspace = Resource<WorkspaceAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub auto_apply: bool,
    #[serde(default)]
    pub execution_mode: Option<String>,
    #[serde(default)]
    pub terraform_version: Option<String>,
    #[serde(default)]
    pub working_directory: Option<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub resource_count: u32,
    #[serde(default)]
    pub tag_names: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource<WorkspaceAttributes> {
    /// ID of the run currently holding the workspace, if any
    pub fn current_run_id(&self) -> Option<&str> {
        self.related_id("current-run")
    }
}

/// Filters for listing workspaces
#[derive(Debug, Clone, Default)]
pub struct WorkspaceListOptions {
    pub page: ListOptions,
    /// Substring match on the workspace name
    pub search: Option<String>,
    /// Comma-separated tags every returned workspace carries
    pub tags: Option<String>,
}

impl WorkspaceListOptions {
    fn to_request(&self) -> RequestConfig {
        let mut request = self.page.apply_to(RequestConfig::new());
        if let Some(search) = &self.search {
            request = request.query("search[name]", search);
        }
        if let Some(tags) = &self.tags {
            request = request.query("search[tags]", tags);
        }
        request
    }
}

/// Options for creating a workspace
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceCreateOptions {
    /// Workspace name (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_names: Vec<String>,
}

/// Options for updating a workspace; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceUpdateOptions {
    /// New name; renames the workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

fn require_workspace_name(name: &str) -> Result<()> {
    if valid_string_id(name) {
        Ok(())
    } else {
        Err(Error::InvalidName)
    }
}

/// Facade over `/workspaces`
#[derive(Debug, Clone)]
pub struct Workspaces {
    client: Client,
}

impl Workspaces {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        organization: &str,
        options: &WorkspaceListOptions,
    ) -> Result<Page<Workspace>> {
        require_organization(organization)?;
        self.client
            .list_resources(
                &format!("organizations/{organization}/workspaces"),
                options.to_request(),
            )
            .await
    }

    /// Every workspace matching `options`, starting at its page
    pub async fn list_all(
        &self,
        organization: &str,
        options: &WorkspaceListOptions,
    ) -> Result<Vec<Workspace>> {
        collect_all(options.page.clone(), move |page| async move {
            let options = WorkspaceListOptions {
                page,
                ..options.clone()
            };
            self.list(organization, &options).await
        })
        .await
    }

    pub async fn create(
        &self,
        organization: &str,
        options: WorkspaceCreateOptions,
    ) -> Result<Workspace> {
        require_organization(organization)?;
        require_field(options.name.as_deref(), "name")?;
        require_workspace_name(options.name.as_deref().unwrap_or_default())?;

        let body = NewResource::new("workspaces", options);
        self.client
            .create_resource(&format!("organizations/{organization}/workspaces"), body)
            .await
    }

    pub async fn read(&self, organization: &str, workspace: &str) -> Result<Workspace> {
        require_organization(organization)?;
        require_workspace_name(workspace)?;
        self.client
            .read_resource(&format!("organizations/{organization}/workspaces/{workspace}"))
            .await
    }

    pub async fn read_by_id(&self, workspace_id: &str) -> Result<Workspace> {
        require_id(workspace_id, "workspace")?;
        self.client
            .read_resource(&format!("workspaces/{workspace_id}"))
            .await
    }

    pub async fn update(
        &self,
        organization: &str,
        workspace: &str,
        options: WorkspaceUpdateOptions,
    ) -> Result<Workspace> {
        require_organization(organization)?;
        require_workspace_name(workspace)?;
        if let Some(name) = options.name.as_deref() {
            require_workspace_name(name)?;
        }

        let body = NewResource::new("workspaces", options);
        self.client
            .update_resource(
                &format!("organizations/{organization}/workspaces/{workspace}"),
                body,
            )
            .await
    }

    pub async fn delete(&self, organization: &str, workspace: &str) -> Result<()> {
        require_organization(organization)?;
        require_workspace_name(workspace)?;
        self.client
            .delete_resource(&format!("organizations/{organization}/workspaces/{workspace}"))
            .await
    }

    /// Lock a workspace. A workspace that is already locked yields [`Error::Conflict`].
    pub async fn lock(&self, workspace_id: &str, reason: Option<&str>) -> Result<Workspace> {
        require_id(workspace_id, "workspace")?;
        let body = reason.map(|reason| json!({ "reason": reason }));
        self.client
            .post_action_returning(&format!("workspaces/{workspace_id}/actions/lock"), body)
            .await
    }

    pub async fn unlock(&self, workspace_id: &str) -> Result<Workspace> {
        require_id(workspace_id, "workspace")?;
        self.client
            .post_action_returning(&format!("workspaces/{workspace_id}/actions/unlock"), None)
            .await
    }
}
