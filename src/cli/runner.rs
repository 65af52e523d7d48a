//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::logs::{LogReader, DEFAULT_CHUNK_SIZE};
use futures::TryStreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Connect and run the command, writing log text to stdout
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let client = Client::connect(self.load_config()?).await?;
        let mut stdout = tokio::io::stdout();
        self.execute(&client, cancel, &mut stdout).await
    }

    /// Run the command against an existing client
    pub async fn execute<W>(
        &self,
        client: &Client,
        cancel: CancellationToken,
        out: &mut W,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match &self.cli.command {
            Commands::Plan { id } => {
                let reader = client.plans().logs(id, cancel).await?;
                copy_log(reader, out).await?;
            }
            Commands::Apply { id } => {
                let reader = client.applies().logs(id, cancel).await?;
                copy_log(reader, out).await?;
            }
            Commands::CostEstimate { id } => {
                let reader = client.cost_estimates().logs(id, cancel).await?;
                copy_log(reader, out).await?;
            }
            Commands::PolicyCheck { id } => {
                let output = client.policy_checks().logs(id, cancel).await?;
                out.write_all(&output).await?;
            }
            Commands::Run { id } => self.follow_run(client, id, cancel, out).await?,
        }
        out.flush().await?;
        Ok(())
    }

    /// Load the client config from `--config` or the environment
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Ok(ClientConfig::from_file(path)?.fill_from_env())
            }
            None => Ok(ClientConfig::from_env()),
        }
    }

    async fn follow_run<W>(
        &self,
        client: &Client,
        run_id: &str,
        cancel: CancellationToken,
        out: &mut W,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let run = client.runs().read(run_id).await?;
        info!("Following run {} ({:?})", run.id, run.attributes.status);

        if let Some(plan_id) = run.plan_id() {
            banner(out, "plan", plan_id).await?;
            copy_log(client.plans().logs(plan_id, cancel.clone()).await?, out).await?;
        }

        // Cost estimates and policy checks are attached once planning is done
        let run = client.runs().read(run_id).await?;

        if let Some(estimate_id) = run.cost_estimate_id() {
            banner(out, "cost estimate", estimate_id).await?;
            let reader = client
                .cost_estimates()
                .logs(estimate_id, cancel.clone())
                .await?;
            copy_log(reader, out).await?;
        }

        for check_id in run.policy_check_ids() {
            banner(out, "policy check", check_id).await?;
            let output = client.policy_checks().logs(check_id, cancel.clone()).await?;
            out.write_all(&output).await?;
        }

        if run.attributes.plan_only {
            return Ok(());
        }
        if let Some(apply_id) = run.apply_id() {
            banner(out, "apply", apply_id).await?;
            copy_log(client.applies().logs(apply_id, cancel).await?, out).await?;
        }
        Ok(())
    }
}

async fn banner<W>(out: &mut W, kind: &str, id: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(format!("==> {kind} {id}\n").as_bytes()).await?;
    Ok(())
}

/// Copy a log to `out` as it grows, flushing after every chunk
async fn copy_log<W>(reader: LogReader, out: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut chunks = std::pin::pin!(reader.into_stream(DEFAULT_CHUNK_SIZE));
    let mut total = 0u64;
    while let Some(chunk) = chunks.try_next().await? {
        out.write_all(&chunk).await?;
        out.flush().await?;
        total += chunk.len() as u64;
    }
    debug!("Copied {total} log bytes");
    Ok(total)
}
