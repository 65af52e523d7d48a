//! API client
//!
//! [`Client`] owns the shared transport and hands out one facade per API
//! resource. Connecting pings the server once to learn its metadata and the
//! request rate it advertises; the transport's rate limiter is sized from
//! that value and shared by every clone of the client.
//!
//! ```rust,ignore
//! use tfe_client::{Client, ClientConfig};
//!
//! let client = Client::connect(ClientConfig::from_env()).await?;
//! let apply = client.applies().read("apply-CZcmD7eagjhyX0vN").await?;
//! let mut logs = client.applies().logs(&apply.id, cancel).await?;
//! ```

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RateLimiterConfig, RequestConfig};
use crate::jsonapi::{Document, NewResource, Resource};
use crate::pagination::Page;
use crate::resources::{
    Applies, CostEstimates, Organizations, Plans, PolicyChecks, Runs, Variables, Workspaces,
};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Endpoint answering with server metadata headers
const PING_PATH: &str = "ping";

const API_VERSION_HEADER: &str = "TFP-API-Version";
const APP_NAME_HEADER: &str = "TFP-AppName";
const TFE_VERSION_HEADER: &str = "X-TFE-Version";
const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";

/// App names reported by the hosted service
const CLOUD_APP_NAMES: &[&str] = &["HCP Terraform", "Terraform Cloud"];

/// Server metadata read once from the ping endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteMetadata {
    /// JSON:API version implemented by the server
    pub api_version: Option<String>,
    /// Product name of the server
    pub app_name: Option<String>,
    /// Release of a self-hosted installation
    pub tfe_version: Option<String>,
    /// Client-side throttling derived from the advertised limit
    pub rate_limit: Option<RateLimiterConfig>,
}

impl RemoteMetadata {
    fn from_response(response: &Response) -> Self {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            api_version: header(API_VERSION_HEADER),
            app_name: header(APP_NAME_HEADER),
            tfe_version: header(TFE_VERSION_HEADER),
            rate_limit: header(RATE_LIMIT_HEADER)
                .as_deref()
                .and_then(RateLimiterConfig::from_advertised_limit),
        }
    }
}

/// Client for the infrastructure-management API
///
/// Cheap to clone; clones share the transport and its rate limiter.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
    meta: Arc<RemoteMetadata>,
}

impl Client {
    /// Validate `config`, ping the server and configure rate limiting
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let mut http = HttpClient::with_config(config.http_config()?)?;

        let response = http.get(PING_PATH).await?;
        let meta = RemoteMetadata::from_response(&response);
        http.set_rate_limit(meta.rate_limit.clone());

        info!(
            "Connected to {} (api {}, rate limit {:?})",
            meta.app_name.as_deref().unwrap_or("unknown server"),
            meta.api_version.as_deref().unwrap_or("unknown"),
            meta.rate_limit
        );

        Ok(Self {
            http: Arc::new(http),
            meta: Arc::new(meta),
        })
    }

    /// Connect using `TFE_ADDRESS` / `TFE_HOSTNAME` / `TFE_TOKEN`
    pub async fn from_env() -> Result<Self> {
        Self::connect(ClientConfig::from_env()).await
    }

    /// Metadata reported by the server at connect time
    pub fn metadata(&self) -> &RemoteMetadata {
        &self.meta
    }

    /// JSON:API version of the server
    pub fn remote_api_version(&self) -> Option<&str> {
        self.meta.api_version.as_deref()
    }

    /// Release of a self-hosted server
    pub fn remote_tfe_version(&self) -> Option<&str> {
        self.meta.tfe_version.as_deref()
    }

    /// Product name reported by the server
    pub fn app_name(&self) -> Option<&str> {
        self.meta.app_name.as_deref()
    }

    /// Whether the server is the hosted service rather than a self-hosted install
    pub fn is_cloud(&self) -> bool {
        self.app_name()
            .is_some_and(|name| CLOUD_APP_NAMES.contains(&name))
    }

    /// The shared transport
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn organizations(&self) -> Organizations {
        Organizations::new(self.clone())
    }

    pub fn workspaces(&self) -> Workspaces {
        Workspaces::new(self.clone())
    }

    pub fn runs(&self) -> Runs {
        Runs::new(self.clone())
    }

    pub fn plans(&self) -> Plans {
        Plans::new(self.clone())
    }

    pub fn applies(&self) -> Applies {
        Applies::new(self.clone())
    }

    pub fn cost_estimates(&self) -> CostEstimates {
        CostEstimates::new(self.clone())
    }

    pub fn policy_checks(&self) -> PolicyChecks {
        PolicyChecks::new(self.clone())
    }

    pub fn variables(&self) -> Variables {
        Variables::new(self.clone())
    }

    // ========================================================================
    // JSON:API request helpers shared by the facades
    // ========================================================================

    /// GET a single resource
    pub(crate) async fn read_resource<A: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Resource<A>> {
        let doc: Document<Resource<A>> = self
            .http
            .request_json(Method::GET, path, RequestConfig::new())
            .await?;
        Ok(doc.data)
    }

    /// GET one page of a list endpoint
    pub(crate) async fn list_resources<A: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestConfig,
    ) -> Result<Page<Resource<A>>> {
        let doc: Document<Vec<Resource<A>>> =
            self.http.request_json(Method::GET, path, request).await?;
        let pagination = doc.meta.and_then(|m| m.pagination);
        debug!("Listed {} items from {path}", doc.data.len());
        Ok(Page::new(doc.data, pagination))
    }

    /// POST a new resource and decode the created one
    pub(crate) async fn create_resource<A, B>(
        &self,
        path: &str,
        body: NewResource<B>,
    ) -> Result<Resource<A>>
    where
        A: DeserializeOwned,
        B: Serialize,
    {
        self.send_document(Method::POST, path, body).await
    }

    /// PATCH a resource and decode the updated one
    pub(crate) async fn update_resource<A, B>(
        &self,
        path: &str,
        body: NewResource<B>,
    ) -> Result<Resource<A>>
    where
        A: DeserializeOwned,
        B: Serialize,
    {
        self.send_document(Method::PATCH, path, body).await
    }

    /// DELETE a resource; the response body is ignored
    pub(crate) async fn delete_resource(&self, path: &str) -> Result<()> {
        self.http
            .request(Method::DELETE, path, RequestConfig::new())
            .await?;
        Ok(())
    }

    /// POST to an `actions/...` endpoint that returns no document
    pub(crate) async fn post_action(&self, path: &str, body: Option<Value>) -> Result<()> {
        let mut request = RequestConfig::new();
        if let Some(body) = body {
            request = request.json(body);
        }
        self.http.request(Method::POST, path, request).await?;
        Ok(())
    }

    /// POST to an `actions/...` endpoint that returns the acted-on resource
    pub(crate) async fn post_action_returning<A: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<Resource<A>> {
        let mut request = RequestConfig::new();
        if let Some(body) = body {
            request = request.json(body);
        }
        let doc: Document<Resource<A>> =
            self.http.request_json(Method::POST, path, request).await?;
        Ok(doc.data)
    }

    async fn send_document<A, B>(
        &self,
        method: Method,
        path: &str,
        body: NewResource<B>,
    ) -> Result<Resource<A>>
    where
        A: DeserializeOwned,
        B: Serialize,
    {
        let request = RequestConfig::new().json(body.into_document()?);
        let doc: Document<Resource<A>> = self.http.request_json(method, path, request).await?;
        Ok(doc.data)
    }
}
