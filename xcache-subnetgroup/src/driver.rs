//! One reconciliation pass over a single object.
//!
//! Sequences Observe → Create/Update, or Delete for objects marked for
//! deletion, and records the pass result in the `Synced` condition.
//! Scheduling, retries and persistence stay with the caller.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::condition::Condition;
use crate::config::ReconcileConfig;
use crate::error::AdapterError;
use crate::reconciler::ExternalClient;
use crate::resource::CacheSubnetGroup;

/// What the caller should do after a pass.
#[derive(Debug)]
pub enum Outcome {
    /// The remote resource is gone; the caller may drop the object.
    Deleted,
    /// Re-run the pass after the given delay.
    RequeueAfter(Duration),
    /// The pass failed; re-run it with backoff.
    Failed(AdapterError),
    /// The caller cancelled the pass. Nothing was written after cancellation.
    Cancelled,
}

/// Action taken by the pass, for logging and plan output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Create,
    Update,
    Delete,
}

pub async fn reconcile<E>(
    external: &E,
    cr: &mut CacheSubnetGroup,
    config: &ReconcileConfig,
    cancel: &CancellationToken,
) -> (Action, Outcome)
where
    E: ExternalClient<Resource = CacheSubnetGroup>,
{
    let name = cr.external_name().to_string();

    if cr.metadata.deletion_requested {
        info!(name = %name, "Object marked for deletion");
        let outcome = match external.delete(cr, cancel).await {
            Ok(()) => Outcome::Deleted,
            Err(e) => failed(cr, e),
        };
        return (Action::Delete, outcome);
    }

    let observation = match external.observe(cr, cancel).await {
        Ok(o) => o,
        Err(e) => return (Action::None, failed(cr, e)),
    };

    let (action, result) = if !observation.resource_exists {
        (Action::Create, external.create(cr, cancel).await.map(|_| ()))
    } else if !observation.resource_up_to_date {
        (Action::Update, external.update(cr, cancel).await.map(|_| ()))
    } else {
        (Action::None, Ok(()))
    };

    let outcome = match result {
        Ok(()) => {
            cr.status
                .conditioned
                .set_conditions([Condition::reconcile_success()]);
            let wait = match action {
                Action::None => config.poll_interval,
                _ => config.short_wait,
            };
            debug!(name = %name, ?action, ?wait, "Reconcile pass succeeded");
            Outcome::RequeueAfter(wait)
        }
        Err(e) => failed(cr, e),
    };
    (action, outcome)
}

fn failed(cr: &mut CacheSubnetGroup, err: AdapterError) -> Outcome {
    if err.is_cancelled() {
        debug!(name = %cr.external_name(), "Reconcile pass cancelled");
        return Outcome::Cancelled;
    }
    warn!(name = %cr.external_name(), error = %err, "Reconcile pass failed");
    cr.status
        .conditioned
        .set_conditions([Condition::reconcile_error(&err)]);
    Outcome::Failed(err)
}
