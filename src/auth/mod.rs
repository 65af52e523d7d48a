//! Authentication module
//!
//! Every request to the API carries a bearer token. [`Token`] wraps the
//! secret so it never shows up in `Debug` output or tracing fields.

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// API token used for bearer authentication
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Attach the token to a request as `Authorization: Bearer <token>`
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.bearer_auth(&self.0)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
