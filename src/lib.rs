// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # tfe-client
//!
//! A Rust-native client for the Terraform Enterprise / HCP Terraform
//! JSON:API.
//!
//! ## Features
//!
//! - **Typed Resources**: Organizations, workspaces, runs, plans, applies,
//!   cost estimates, policy checks and variables
//! - **Shared Transport**: Bearer auth, retries with backoff, and a rate
//!   limiter sized from the server's advertised limit
//! - **Pagination**: `page[number]` / `page[size]` with helpers that walk
//!   every page
//! - **Log Following**: Stream plan, apply and cost estimate logs while they
//!   are being written
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tfe_client::{Client, ClientConfig, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::connect(ClientConfig::from_env()).await?;
//!
//!     let run = client.runs().read("run-CZcmD7eagjhyX0vN").await?;
//!     if let Some(plan_id) = run.plan_id() {
//!         let mut logs = client.plans().logs(plan_id, CancellationToken::new()).await?;
//!         print!("{}", logs.read_to_string().await?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Client                               │
//! │  organizations()  workspaces()  runs()  plans()  applies() ...  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬──────────────────┼───────────────┬─────────────────┐
//! │   Auth    │      HTTP        │   JSON:API    │      Logs       │
//! ├───────────┼──────────────────┼───────────────┼─────────────────┤
//! │ Bearer    │ Retry / Backoff  │ Documents     │ Offset polling  │
//! │ token     │ Rate limit       │ Pagination    │ Status-driven   │
//! │           │ Error mapping    │ Errors        │ end-of-stream   │
//! └───────────┴──────────────────┴───────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// API token handling
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// JSON:API documents
pub mod jsonapi;

/// Page options and pagination helpers
pub mod pagination;

/// Identifier and required-field validation
pub mod validation;

/// Client configuration
pub mod config;

/// Log-follow reader
pub mod logs;

/// Resource facades
pub mod resources;

/// Top-level API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, RemoteMetadata};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use logs::LogReader;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
