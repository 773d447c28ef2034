//! External-resource adapters.
//!
//! An adapter observes the remote resource for a desired-state object,
//! compares it with the declared spec and performs the one remote call that
//! converges it. The driver decides which operation to call next.

pub mod subnet_group;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

pub use subnet_group::SubnetGroupExternal;

/// Result of Observe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExternalObservation {
    pub resource_exists: bool,
    pub resource_up_to_date: bool,
}

/// Result of Create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExternalCreation;

/// Result of Update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExternalUpdate;

/// Trait for external-resource adapters.
///
/// The driver never calls two operations concurrently for the same object.
/// Adapters mutate `resource`'s status in place; the driver persists it.
#[async_trait]
pub trait ExternalClient: Send + Sync {
    /// The desired-state object type.
    type Resource: Send;

    /// Read remote state and report whether it exists and matches the spec.
    async fn observe(
        &self,
        resource: &mut Self::Resource,
        cancel: &CancellationToken,
    ) -> Result<ExternalObservation>;

    /// Create the remote resource. Only called after Observe reported it missing.
    async fn create(
        &self,
        resource: &mut Self::Resource,
        cancel: &CancellationToken,
    ) -> Result<ExternalCreation>;

    /// Push the full desired spec to an existing remote resource.
    async fn update(
        &self,
        resource: &mut Self::Resource,
        cancel: &CancellationToken,
    ) -> Result<ExternalUpdate>;

    /// Delete the remote resource. Already gone counts as success.
    async fn delete(&self, resource: &mut Self::Resource, cancel: &CancellationToken) -> Result<()>;
}
