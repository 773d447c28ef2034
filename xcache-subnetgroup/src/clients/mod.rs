//! Remote capability for cache subnet groups.
//!
//! The adapter depends only on [`SubnetGroupClient`]; request signing,
//! transport retries and credentials live behind it.
//! - `fake`: recording test double
//! - `snapshot`: read-only client answering from a describe snapshot

pub mod fake;
pub mod snapshot;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fake::MockClient;
pub use snapshot::SnapshotClient;

/// Error code the provider returns when the named subnet group does not exist.
pub const NOT_FOUND_CODE: &str = "CacheSubnetGroupNotFoundFault";

/// Errors returned by a [`SubnetGroupClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The provider rejected the request with an error code.
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The request never got a response (connect, timeout, decode).
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self::service(
            NOT_FOUND_CODE,
            format!("CacheSubnetGroup {} not found.", name),
        )
    }

    /// Whether this error says the named resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Service { code, .. } if code == NOT_FOUND_CODE)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityZone {
    pub name: Option<String>,
}

/// Subnet as reported by describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    pub subnet_identifier: Option<String>,
    #[serde(default)]
    pub subnet_availability_zone: Option<AvailabilityZone>,
}

/// Remote cache subnet group record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheSubnetGroupRecord {
    #[serde(default)]
    pub cache_subnet_group_name: Option<String>,
    #[serde(default)]
    pub cache_subnet_group_description: Option<String>,
    #[serde(default)]
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInput {
    pub cache_subnet_group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOutput {
    #[serde(default)]
    pub cache_subnet_groups: Vec<CacheSubnetGroupRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInput {
    pub cache_subnet_group_name: String,
    pub cache_subnet_group_description: String,
    pub subnet_ids: Vec<String>,
}

/// Full replacement of description and subnets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInput {
    pub cache_subnet_group_name: String,
    pub cache_subnet_group_description: String,
    pub subnet_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInput {
    pub cache_subnet_group_name: String,
}

/// The four requests the adapter makes against the provider.
///
/// Each call is atomic from the caller's point of view. Implementations must
/// not retry on the adapter's behalf beyond transport-level retries.
#[async_trait]
pub trait SubnetGroupClient: Send + Sync {
    async fn describe(&self, input: DescribeInput) -> Result<DescribeOutput>;

    async fn create(&self, input: CreateInput) -> Result<CacheSubnetGroupRecord>;

    async fn modify(&self, input: ModifyInput) -> Result<CacheSubnetGroupRecord>;

    async fn delete(&self, input: DeleteInput) -> Result<()>;
}
