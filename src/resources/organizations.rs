//! Organizations

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::jsonapi::{NewResource, Resource};
use crate::pagination::{collect_all, ListOptions, Page};
use crate::validation::{require_field, require_organization, valid_string_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organization resource; its ID is the organization name
pub type Organization = Resource<OrganizationAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationAttributes {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub collaborator_auth_policy: Option<String>,
    #[serde(default)]
    pub cost_estimation_enabled: bool,
    #[serde(default)]
    pub session_timeout: Option<u32>,
    #[serde(default)]
    pub session_remember: Option<u32>,
}

/// Options for creating an organization
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationCreateOptions {
    /// Organization name (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Admin email address (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_remember: Option<u32>,
}

impl OrganizationCreateOptions {
    fn validate(&self) -> Result<()> {
        require_field(self.name.as_deref(), "name")?;
        if !self.name.as_deref().is_some_and(valid_string_id) {
            return Err(Error::InvalidName);
        }
        require_field(self.email.as_deref(), "email")
    }
}

/// Options for updating an organization; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationUpdateOptions {
    /// New name; renames the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_remember: Option<u32>,
}

/// Facade over `/organizations`
#[derive(Debug, Clone)]
pub struct Organizations {
    client: Client,
}

impl Organizations {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListOptions) -> Result<Page<Organization>> {
        self.client
            .list_resources("organizations", options.apply_to(RequestConfig::new()))
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Organization>> {
        collect_all(ListOptions::new(), move |opts| async move {
            self.list(&opts).await
        })
        .await
    }

    pub async fn create(&self, options: OrganizationCreateOptions) -> Result<Organization> {
        options.validate()?;
        let body = NewResource::new("organizations", options);
        self.client.create_resource("organizations", body).await
    }

    pub async fn read(&self, organization: &str) -> Result<Organization> {
        require_organization(organization)?;
        self.client
            .read_resource(&format!("organizations/{organization}"))
            .await
    }

    pub async fn update(
        &self,
        organization: &str,
        options: OrganizationUpdateOptions,
    ) -> Result<Organization> {
        require_organization(organization)?;
        if options.name.as_deref().is_some_and(|n| !valid_string_id(n)) {
            return Err(Error::InvalidName);
        }
        let body = NewResource::new("organizations", options);
        self.client
            .update_resource(&format!("organizations/{organization}"), body)
            .await
    }

    pub async fn delete(&self, organization: &str) -> Result<()> {
        require_organization(organization)?;
        self.client
            .delete_resource(&format!("organizations/{organization}"))
            .await
    }
}
