//! JSON:API document types
//!
//! Only the subset of the format the API actually uses is modelled here.

use crate::pagination::Pagination;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Top-level response document
#[derive(Debug, Clone, Deserialize)]
pub struct Document<D> {
    /// Primary data: a single resource or a list of resources
    pub data: D,
    /// Non-standard meta information
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Document-level meta information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Pagination details of list responses
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// A resource object with typed attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A> {
    /// Opaque resource ID
    pub id: String,
    /// Resource type name (e.g. "applies")
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource attributes
    pub attributes: A,
    /// Named relationships to other resources
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
    /// Resource links
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, Value>,
}

impl<A> Resource<A> {
    /// ID of a to-one relationship, if present and not null
    pub fn related_id(&self, name: &str) -> Option<&str> {
        match self.relationships.get(name)?.data.as_ref()? {
            RelationshipData::One(identifier) => Some(identifier.id.as_str()),
            RelationshipData::Many(_) => None,
        }
    }

    /// IDs of a to-many relationship (empty when absent)
    pub fn related_ids(&self, name: &str) -> Vec<&str> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(RelationshipData::Many(identifiers)) => {
                identifiers.iter().map(|i| i.id.as_str()).collect()
            }
            Some(RelationshipData::One(identifier)) => vec![identifier.id.as_str()],
            None => Vec::new(),
        }
    }
}

/// A relationship member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage; `null` decodes to `None`
    #[serde(default)]
    pub data: Option<RelationshipData>,
    /// Relationship links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

impl Relationship {
    /// A to-one relationship pointing at `(kind, id)`
    pub fn to_one(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: Some(RelationshipData::One(ResourceIdentifier {
                kind: kind.into(),
                id: id.into(),
            })),
            links: None,
        }
    }
}

/// Resource linkage of a relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one linkage
    One(ResourceIdentifier),
    /// To-many linkage
    Many(Vec<ResourceIdentifier>),
}

/// A `{ "type", "id" }` pair identifying a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Resource type name
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource ID
    pub id: String,
}

/// Outbound resource object for create and update requests
#[derive(Debug, Clone, Serialize)]
pub struct NewResource<A> {
    /// Resource type name
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Resource ID (only set on updates where the API expects it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource attributes
    pub attributes: A,
    /// Relationships to other resources
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
}

impl<A: Serialize> NewResource<A> {
    /// Create an outbound resource of the given type
    pub fn new(kind: &'static str, attributes: A) -> Self {
        Self {
            kind,
            id: None,
            attributes,
            relationships: BTreeMap::new(),
        }
    }

    /// Set the resource ID
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a to-one relationship
    #[must_use]
    pub fn relate(mut self, name: &str, kind: &str, id: impl Into<String>) -> Self {
        self.relationships
            .insert(name.to_string(), Relationship::to_one(kind, id));
        self
    }

    /// Wrap into a `{ "data": ... }` document
    pub fn into_document(self) -> serde_json::Result<Value> {
        Ok(json!({ "data": serde_json::to_value(self)? }))
    }
}

/// Error response document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDocument {
    /// Individual error objects
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

/// A single JSON:API error object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorObject {
    /// HTTP status as a string
    #[serde(default)]
    pub status: Option<String>,
    /// Short summary
    #[serde(default)]
    pub title: Option<String>,
    /// Human-readable explanation
    #[serde(default)]
    pub detail: Option<String>,
}

impl std::fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.title.as_deref(), self.detail.as_deref()) {
            (Some(title), Some(detail)) if !detail.is_empty() => write!(f, "{title}\n\n{detail}"),
            (Some(title), _) => f.write_str(title),
            (None, Some(detail)) => f.write_str(detail),
            (None, None) => f.write_str(self.status.as_deref().unwrap_or("unknown error")),
        }
    }
}

/// Turn an error response body into a message.
///
/// JSON:API error documents are flattened to one line per error; anything
/// else (plain text, HTML from a proxy) is returned trimmed as-is.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDocument>(body) {
        Ok(doc) if !doc.errors.is_empty() => doc
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => body.trim().to_string(),
    }
}
