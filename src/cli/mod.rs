//! CLI module
//!
//! Command-line interface of the `tfe-tail` binary.
//!
//! # Commands
//!
//! - `plan` - Follow a plan log
//! - `apply` - Follow an apply log
//! - `cost-estimate` - Follow a cost estimate log
//! - `policy-check` - Print policy check output once evaluated
//! - `run` - Follow every phase of a run in order

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
