//! JSON:API codec
//!
//! Request and response bodies follow the JSON:API document layout:
//! a top-level `data` member holding one resource object or a list of them,
//! an optional `meta` member (carrying pagination on list responses) and an
//! `errors` member on failures.
//!
//! # Overview
//!
//! - [`Document`] decodes responses, generic over the `data` payload.
//! - [`Resource`] is a decoded resource object with typed attributes.
//! - [`NewResource`] builds outbound create/update payloads.
//! - [`error_message`] flattens an error document into readable text.

mod document;

pub use document::{
    error_message, Document, ErrorDocument, ErrorObject, Meta, NewResource, Relationship,
    RelationshipData, Resource, ResourceIdentifier,
};

#[cfg(test)]
mod tests;
