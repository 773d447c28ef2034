//! xcache-subnetgroup: plan one reconciliation pass for a cache subnet group.
//!
//! Reads a desired-state object and a describe snapshot (the provider's
//! describe JSON), runs Observe and whichever of Create/Update/Delete the
//! pass would take, and prints the requests it would send. Nothing is sent.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xcache_subnetgroup::clients::snapshot::PlannedRequest;
use xcache_subnetgroup::clients::{DescribeOutput, SnapshotClient};
use xcache_subnetgroup::config::ReconcileConfig;
use xcache_subnetgroup::driver::{self, Outcome};
use xcache_subnetgroup::resource::CacheSubnetGroupStatus;
use xcache_subnetgroup::{CacheSubnetGroup, SubnetGroupExternal};

/// xcache subnet group planner
#[derive(Parser, Debug)]
#[command(name = "xcache-subnetgroup", version, about)]
struct Args {
    /// Desired-state object (JSON)
    #[arg(long)]
    desired: PathBuf,

    /// Describe snapshot (JSON). Omit when the group does not exist yet.
    #[arg(long)]
    observed: Option<PathBuf>,

    /// Requeue interval in seconds for an up-to-date group
    #[arg(long, default_value = "60")]
    poll_interval: u64,

    /// Requeue interval in seconds after a create or update
    #[arg(long, default_value = "30")]
    short_wait: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Plan {
    name: String,
    action: String,
    outcome: String,
    requests: Vec<PlannedRequest>,
    status: CacheSubnetGroupStatus,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xcache_subnetgroup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let data = std::fs::read_to_string(&args.desired)
        .with_context(|| format!("Failed to read {}", args.desired.display()))?;
    let mut cr: CacheSubnetGroup =
        serde_json::from_str(&data).context("Invalid desired-state object")?;

    let client = match &args.observed {
        Some(path) => SnapshotClient::from_file(path).context("Failed to load describe snapshot")?,
        None => SnapshotClient::new(DescribeOutput::default()),
    };
    let external = SubnetGroupExternal::new(client);

    let config = ReconcileConfig {
        poll_interval: Duration::from_secs(args.poll_interval),
        short_wait: Duration::from_secs(args.short_wait),
    };

    info!("Planning cache subnet group {}", cr.external_name());

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let (action, outcome) = driver::reconcile(&external, &mut cr, &config, &cancel).await;
    ctrl_c.abort();

    let outcome = match outcome {
        Outcome::Deleted => "deleted".to_string(),
        Outcome::RequeueAfter(wait) => format!("requeue after {}s", wait.as_secs()),
        Outcome::Failed(e) => format!("failed: {}", e),
        Outcome::Cancelled => "cancelled".to_string(),
    };

    let plan = Plan {
        name: cr.external_name().to_string(),
        action: format!("{:?}", action),
        outcome,
        requests: external.client().planned(),
        status: cr.status,
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
