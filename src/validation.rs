//! Local validation of identifiers and required fields
//!
//! Every facade checks its inputs here before building a request, so a bad
//! identifier fails fast without a network round trip.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in resource IDs and names used in URL paths
static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-._]+$").expect("ID pattern is valid"));

/// A non-empty string
pub fn valid_string(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// A string that is safe to embed in a URL path as an identifier
pub fn valid_string_id(value: &str) -> bool {
    ID_REGEX.is_match(value)
}

/// Validate a resource ID, naming the resource kind in the error
pub fn require_id(value: &str, resource: &'static str) -> Result<()> {
    if valid_string_id(value) {
        Ok(())
    } else {
        Err(Error::InvalidId { resource })
    }
}

/// Validate an organization name
pub fn require_organization(value: &str) -> Result<()> {
    if valid_string_id(value) {
        Ok(())
    } else {
        Err(Error::InvalidOrganization)
    }
}

/// Validate a required field is present and non-empty
pub fn require_field(value: Option<&str>, field: &'static str) -> Result<()> {
    if valid_string(value) {
        Ok(())
    } else {
        Err(Error::RequiredField { field })
    }
}
