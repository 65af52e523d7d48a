//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Follow Terraform Enterprise / HCP Terraform logs on stdout
#[derive(Parser, Debug)]
#[command(name = "tfe-tail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML); environment fills unset values
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Follow a plan log
    Plan {
        /// Plan ID (plan-...)
        id: String,
    },

    /// Follow an apply log
    Apply {
        /// Apply ID (apply-...)
        id: String,
    },

    /// Follow a cost estimate log
    CostEstimate {
        /// Cost estimate ID (ce-...)
        id: String,
    },

    /// Print policy check output once the check has been evaluated
    PolicyCheck {
        /// Policy check ID (polchk-...)
        id: String,
    },

    /// Follow the plan, cost estimate, policy checks and apply of a run
    Run {
        /// Run ID (run-...)
        id: String,
    },
}
