//! Workspace variables

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::jsonapi::{NewResource, Resource};
use crate::pagination::{collect_all, ListOptions, Page};
use crate::validation::{require_field, require_id};
use serde::{Deserialize, Serialize};

/// A variable resource
pub type Variable = Resource<VariableAttributes>;

/// Where a variable is made available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Environment variable of the run
    Env,
    PolicySet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariableAttributes {
    pub key: String,
    /// Empty for sensitive variables
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: VariableCategory,
    #[serde(default)]
    pub hcl: bool,
    #[serde(default)]
    pub sensitive: bool,
}

/// Options for creating a variable
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariableCreateOptions {
    /// Variable name (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variable kind (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<VariableCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

/// Options for updating a variable; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariableUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

/// Facade over `/workspaces/{id}/vars`
#[derive(Debug, Clone)]
pub struct Variables {
    client: Client,
}

impl Variables {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, workspace_id: &str, options: &ListOptions) -> Result<Page<Variable>> {
        require_id(workspace_id, "workspace")?;
        self.client
            .list_resources(
                &format!("workspaces/{workspace_id}/vars"),
                options.apply_to(RequestConfig::new()),
            )
            .await
    }

    pub async fn list_all(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        collect_all(ListOptions::new(), move |opts| async move {
            self.list(workspace_id, &opts).await
        })
        .await
    }

    pub async fn create(
        &self,
        workspace_id: &str,
        options: VariableCreateOptions,
    ) -> Result<Variable> {
        require_id(workspace_id, "workspace")?;
        require_field(options.key.as_deref(), "key")?;
        if options.category.is_none() {
            return Err(Error::RequiredField { field: "category" });
        }

        let body = NewResource::new("vars", options);
        self.client
            .create_resource(&format!("workspaces/{workspace_id}/vars"), body)
            .await
    }

    pub async fn read(&self, workspace_id: &str, variable_id: &str) -> Result<Variable> {
        require_id(workspace_id, "workspace")?;
        require_id(variable_id, "variable")?;
        self.client
            .read_resource(&format!("workspaces/{workspace_id}/vars/{variable_id}"))
            .await
    }

    pub async fn update(
        &self,
        workspace_id: &str,
        variable_id: &str,
        options: VariableUpdateOptions,
    ) -> Result<Variable> {
        require_id(workspace_id, "workspace")?;
        require_id(variable_id, "variable")?;

        let body = NewResource::new("vars", options).with_id(variable_id);
        self.client
            .update_resource(
                &format!("workspaces/{workspace_id}/vars/{variable_id}"),
                body,
            )
            .await
    }

    pub async fn delete(&self, workspace_id: &str, variable_id: &str) -> Result<()> {
        require_id(workspace_id, "workspace")?;
        require_id(variable_id, "variable")?;
        self.client
            .delete_resource(&format!("workspaces/{workspace_id}/vars/{variable_id}"))
            .await
    }
}
