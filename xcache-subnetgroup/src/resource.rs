//! Desired-state object for a cache subnet group.
//!
//! The object is owned by the driver. Adapters only ever touch
//! `status.conditions`; the spec is read-only to them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::ConditionedStatus;

/// Annotation naming the remote resource when it differs from `metadata.name`.
pub const EXTERNAL_NAME_ANNOTATION: &str = "crossplane.io/external-name";

/// Object metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Set by the driver once the object is marked for deletion.
    #[serde(default)]
    pub deletion_requested: bool,
}

/// Parameters the user declares for the remote subnet group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSubnetGroupParameters {
    /// Free text description. An empty string is a value, not "unset".
    #[serde(default)]
    pub description: String,
    /// Subnet IDs. Order matters only for the create/modify payload.
    #[serde(rename = "subnetIDs", default)]
    pub subnet_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSubnetGroupSpec {
    pub for_provider: CacheSubnetGroupParameters,
    /// Name of the provider config to connect with. `None` means "default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config_ref: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSubnetGroupStatus {
    #[serde(flatten)]
    pub conditioned: ConditionedStatus,
}

/// A managed cache subnet group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSubnetGroup {
    pub metadata: ObjectMeta,
    pub spec: CacheSubnetGroupSpec,
    #[serde(default)]
    pub status: CacheSubnetGroupStatus,
}

impl CacheSubnetGroup {
    pub fn new(name: impl Into<String>, params: CacheSubnetGroupParameters) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                ..Default::default()
            },
            spec: CacheSubnetGroupSpec {
                for_provider: params,
                provider_config_ref: None,
            },
            status: CacheSubnetGroupStatus::default(),
        }
    }

    /// Name of the remote resource this object manages.
    pub fn external_name(&self) -> &str {
        match self.metadata.annotations.get(EXTERNAL_NAME_ANNOTATION) {
            Some(name) if !name.is_empty() => name,
            _ => &self.metadata.name,
        }
    }

    pub fn set_external_name(&mut self, name: impl Into<String>) {
        self.metadata
            .annotations
            .insert(EXTERNAL_NAME_ANNOTATION.to_string(), name.into());
    }

    pub fn provider_config_name(&self) -> &str {
        self.spec
            .provider_config_ref
            .as_deref()
            .unwrap_or(crate::config::DEFAULT_PROVIDER_CONFIG)
    }
}
