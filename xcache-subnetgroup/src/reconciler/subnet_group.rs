//! Cache subnet group adapter.

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{ExternalClient, ExternalCreation, ExternalObservation, ExternalUpdate};
use crate::clients::{CreateInput, DeleteInput, DescribeInput, ModifyInput, SubnetGroupClient};
use crate::compare::{is_up_to_date, ObservedState};
use crate::condition::Condition;
use crate::error::{AdapterError, Result};
use crate::resource::CacheSubnetGroup;

/// Adapter converging a [`CacheSubnetGroup`] through a [`SubnetGroupClient`].
pub struct SubnetGroupExternal<C> {
    client: C,
}

impl<C: SubnetGroupClient> SubnetGroupExternal<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Race a remote call against cancellation. Dropping the call future aborts
/// the in-flight request.
async fn cancellable<T>(cancel: &CancellationToken, call: impl Future<Output = T>) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AdapterError::Cancelled),
        out = call => Ok(out),
    }
}

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(AdapterError::Cancelled);
    }
    Ok(())
}

#[async_trait]
impl<C: SubnetGroupClient> ExternalClient for SubnetGroupExternal<C> {
    type Resource = CacheSubnetGroup;

    async fn observe(
        &self,
        cr: &mut CacheSubnetGroup,
        cancel: &CancellationToken,
    ) -> Result<ExternalObservation> {
        ensure_not_cancelled(cancel)?;
        let name = cr.external_name().to_string();
        debug!(name = %name, "Describing cache subnet group");

        let input = DescribeInput {
            cache_subnet_group_name: name.clone(),
        };
        let output = match cancellable(cancel, self.client.describe(input)).await? {
            Ok(output) => output,
            Err(e) if e.is_not_found() => {
                debug!(name = %name, "Cache subnet group does not exist");
                return Ok(ExternalObservation::default());
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Failed to describe cache subnet group");
                return Err(AdapterError::DescribeFailed(e));
            }
        };

        // A successful describe with no records is another way of saying "not found".
        let Some(record) = output.cache_subnet_groups.first() else {
            debug!(name = %name, "Describe returned no cache subnet groups");
            return Ok(ExternalObservation::default());
        };

        cr.status.conditioned.set_conditions([Condition::available()]);

        let up_to_date = is_up_to_date(&cr.spec.for_provider, &ObservedState::from(record));
        if !up_to_date {
            info!(name = %name, "Cache subnet group has drifted from its spec");
        }

        Ok(ExternalObservation {
            resource_exists: true,
            resource_up_to_date: up_to_date,
        })
    }

    async fn create(
        &self,
        cr: &mut CacheSubnetGroup,
        cancel: &CancellationToken,
    ) -> Result<ExternalCreation> {
        ensure_not_cancelled(cancel)?;
        cr.status.conditioned.set_conditions([Condition::creating()]);

        let name = cr.external_name().to_string();
        info!(name = %name, subnets = ?cr.spec.for_provider.subnet_ids, "Creating cache subnet group");

        let input = CreateInput {
            cache_subnet_group_name: name.clone(),
            cache_subnet_group_description: cr.spec.for_provider.description.clone(),
            subnet_ids: cr.spec.for_provider.subnet_ids.clone(),
        };
        cancellable(cancel, self.client.create(input))
            .await?
            .map_err(|e| {
                warn!(name = %name, error = %e, "Failed to create cache subnet group");
                AdapterError::CreateFailed(e)
            })?;

        // Stays Creating until a later Observe sees the group.
        Ok(ExternalCreation)
    }

    async fn update(
        &self,
        cr: &mut CacheSubnetGroup,
        cancel: &CancellationToken,
    ) -> Result<ExternalUpdate> {
        ensure_not_cancelled(cancel)?;
        let name = cr.external_name().to_string();
        info!(name = %name, "Modifying cache subnet group");

        let input = ModifyInput {
            cache_subnet_group_name: name.clone(),
            cache_subnet_group_description: cr.spec.for_provider.description.clone(),
            subnet_ids: cr.spec.for_provider.subnet_ids.clone(),
        };
        cancellable(cancel, self.client.modify(input))
            .await?
            .map_err(|e| {
                warn!(name = %name, error = %e, "Failed to modify cache subnet group");
                AdapterError::ModifyFailed(e)
            })?;

        Ok(ExternalUpdate)
    }

    async fn delete(&self, cr: &mut CacheSubnetGroup, cancel: &CancellationToken) -> Result<()> {
        ensure_not_cancelled(cancel)?;
        cr.status.conditioned.set_conditions([Condition::deleting()]);

        let name = cr.external_name().to_string();
        info!(name = %name, "Deleting cache subnet group");

        let input = DeleteInput {
            cache_subnet_group_name: name.clone(),
        };
        match cancellable(cancel, self.client.delete(input)).await? {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                debug!(name = %name, "Cache subnet group already deleted");
                Ok(())
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Failed to delete cache subnet group");
                Err(AdapterError::DeleteFailed(e))
            }
        }
    }
}
