//! tfe-tail
//!
//! Follows plan, apply, cost estimate and policy check logs on stdout.
//! Diagnostics go to stderr; Ctrl-C stops following.

use anyhow::Context;
use clap::Parser;
use tfe_client::cli::{Cli, Runner};
use tokio_util::sync::CancellationToken;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Conventional exit status after SIGINT
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    match Runner::new(cli).run(cancel).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_cancelled() => std::process::exit(EXIT_INTERRUPTED),
        Err(e) => Err(e).context("tfe-tail failed"),
    }
}
