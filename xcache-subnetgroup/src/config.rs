//! Provider and reconcile configuration.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Provider config used when a resource names none.
pub const DEFAULT_PROVIDER_CONFIG: &str = "default";

/// Connection settings for one provider account/region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub region: String,
    /// Endpoint override, e.g. for a local emulator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Named provider configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfigs {
    configs: BTreeMap<String, ProviderConfig>,
}

impl ProviderConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, config: ProviderConfig) -> Self {
        self.configs.insert(name.into(), config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ProviderConfig> {
        self.configs.get(name)
    }

    /// Parse a JSON object of `name -> ProviderConfig`.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let configs: Self = serde_json::from_str(data)?;
        if let Some((name, _)) = configs.configs.iter().find(|(_, c)| c.region.is_empty()) {
            return Err(ConfigError::MissingRegion(name.clone()));
        }
        Ok(configs)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

/// Requeue intervals for the reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileConfig {
    /// Wait before re-observing a resource that is up to date.
    pub poll_interval: Duration,
    /// Wait before re-observing after a create or update was sent.
    pub short_wait: Duration,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(60),
            short_wait: Duration::from_secs(30),
        }
    }
}
