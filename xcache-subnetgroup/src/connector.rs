//! Builds adapters for resources from their provider config.

use tracing::debug;

use crate::clients::{ClientError, SubnetGroupClient};
use crate::config::{ProviderConfig, ProviderConfigs};
use crate::error::ConnectError;
use crate::reconciler::SubnetGroupExternal;
use crate::resource::CacheSubnetGroup;

/// Creates a remote client for a provider config.
pub trait ClientFactory: Send + Sync {
    type Client: SubnetGroupClient;

    fn build(&self, config: &ProviderConfig) -> Result<Self::Client, ClientError>;
}

impl<F, C> ClientFactory for F
where
    F: Fn(&ProviderConfig) -> Result<C, ClientError> + Send + Sync,
    C: SubnetGroupClient,
{
    type Client = C;

    fn build(&self, config: &ProviderConfig) -> Result<C, ClientError> {
        self(config)
    }
}

pub struct Connector<F> {
    configs: ProviderConfigs,
    factory: F,
}

impl<F: ClientFactory> Connector<F> {
    pub fn new(configs: ProviderConfigs, factory: F) -> Self {
        Self { configs, factory }
    }

    /// Adapter for `cr`, connected with the provider config it references.
    pub fn connect(
        &self,
        cr: &CacheSubnetGroup,
    ) -> Result<SubnetGroupExternal<F::Client>, ConnectError> {
        let name = cr.provider_config_name();
        let config = self
            .configs
            .get(name)
            .ok_or_else(|| ConnectError::ProviderConfigNotFound(name.to_string()))?;

        debug!(provider_config = %name, region = %config.region, "Connecting client");
        let client = self.factory.build(config).map_err(ConnectError::Client)?;
        Ok(SubnetGroupExternal::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockClient;
    use crate::resource::CacheSubnetGroupParameters;

    fn configs() -> ProviderConfigs {
        ProviderConfigs::new().with(
            "default",
            ProviderConfig {
                region: "eu-west-1".to_string(),
                endpoint: None,
            },
        )
    }

    #[test]
    fn test_connect_default_config() {
        let connector = Connector::new(
            configs(),
            |config: &ProviderConfig| -> Result<MockClient, ClientError> {
                assert_eq!(config.region, "eu-west-1");
                Ok(MockClient::new())
            },
        );
        let cr = CacheSubnetGroup::new("sg", CacheSubnetGroupParameters::default());

        assert!(connector.connect(&cr).is_ok());
    }

    #[test]
    fn test_connect_missing_config() {
        let connector = Connector::new(
            configs(),
            |_: &ProviderConfig| -> Result<MockClient, ClientError> { Ok(MockClient::new()) },
        );
        let mut cr = CacheSubnetGroup::new("sg", CacheSubnetGroupParameters::default());
        cr.spec.provider_config_ref = Some("other".to_string());

        let err = connector.connect(&cr).err().unwrap();
        assert!(matches!(err, ConnectError::ProviderConfigNotFound(ref name) if name == "other"));
    }

    #[test]
    fn test_connect_client_error() {
        let connector = Connector::new(
            configs(),
            |_: &ProviderConfig| -> Result<MockClient, ClientError> {
                Err(ClientError::Transport("no credentials".to_string()))
            },
        );
        let cr = CacheSubnetGroup::new("sg", CacheSubnetGroupParameters::default());

        let err = connector.connect(&cr).err().unwrap();
        assert!(matches!(err, ConnectError::Client(ClientError::Transport(_))));
    }
}
