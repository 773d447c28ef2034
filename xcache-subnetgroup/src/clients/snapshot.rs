//! Read-only client backed by a describe snapshot.
//!
//! Describe answers from the snapshot; create, modify and delete are recorded
//! as planned requests and never sent anywhere.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{
    CacheSubnetGroupRecord, ClientError, CreateInput, DeleteInput, DescribeInput, DescribeOutput,
    ModifyInput, Result, SubnetGroupClient,
};

/// A mutation the adapter would have sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation")]
pub enum PlannedRequest {
    Create(CreateInput),
    Modify(ModifyInput),
    Delete(DeleteInput),
}

pub struct SnapshotClient {
    groups: Vec<CacheSubnetGroupRecord>,
    planned: Mutex<Vec<PlannedRequest>>,
}

impl SnapshotClient {
    pub fn new(snapshot: DescribeOutput) -> Self {
        Self {
            groups: snapshot.cache_subnet_groups,
            planned: Mutex::new(Vec::new()),
        }
    }

    /// Load a snapshot written in the provider's describe JSON format.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Transport(format!("read {}: {}", path.display(), e)))?;
        let snapshot: DescribeOutput = serde_json::from_str(&data)
            .map_err(|e| ClientError::Transport(format!("decode {}: {}", path.display(), e)))?;
        Ok(Self::new(snapshot))
    }

    pub fn planned(&self) -> Vec<PlannedRequest> {
        self.planned
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn plan(&self, request: PlannedRequest) {
        debug!(?request, "Recording planned request");
        self.planned
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
    }
}

#[async_trait]
impl SubnetGroupClient for SnapshotClient {
    async fn describe(&self, input: DescribeInput) -> Result<DescribeOutput> {
        let matching: Vec<_> = self
            .groups
            .iter()
            .filter(|g| {
                g.cache_subnet_group_name.as_deref() == Some(input.cache_subnet_group_name.as_str())
            })
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(ClientError::not_found(&input.cache_subnet_group_name));
        }
        Ok(DescribeOutput {
            cache_subnet_groups: matching,
        })
    }

    async fn create(&self, input: CreateInput) -> Result<CacheSubnetGroupRecord> {
        let record = CacheSubnetGroupRecord {
            cache_subnet_group_name: Some(input.cache_subnet_group_name.clone()),
            cache_subnet_group_description: Some(input.cache_subnet_group_description.clone()),
            ..Default::default()
        };
        self.plan(PlannedRequest::Create(input));
        Ok(record)
    }

    async fn modify(&self, input: ModifyInput) -> Result<CacheSubnetGroupRecord> {
        let record = CacheSubnetGroupRecord {
            cache_subnet_group_name: Some(input.cache_subnet_group_name.clone()),
            cache_subnet_group_description: Some(input.cache_subnet_group_description.clone()),
            ..Default::default()
        };
        self.plan(PlannedRequest::Modify(input));
        Ok(record)
    }

    async fn delete(&self, input: DeleteInput) -> Result<()> {
        self.plan(PlannedRequest::Delete(input));
        Ok(())
    }
}
