use dkg_domain::{ParsedUal, parse_ual};
use dkg_node_client::{BlockchainConfig, GetOptions, NodeEndpointConfig};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::{logger::LoggerConfig, resolver::ResolverConfig};

/// Configuration as read from defaults and files, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigRaw {
    /// UAL of the public knowledge asset to resolve
    pub asset_ual: String,
    /// Remote node serving public asset data
    pub public_node: NodeEndpointConfig,
    /// Node holding private resources (the publisher's own node)
    pub local_node: NodeEndpointConfig,
    pub blockchain: BlockchainConfig,
    pub get: GetOptions,
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub asset: ParsedUal,
    pub public_node: NodeEndpointConfig,
    pub local_node: NodeEndpointConfig,
    pub blockchain: BlockchainConfig,
    pub get: GetOptions,
    pub logger: LoggerConfig,
}

impl Config {
    pub(crate) fn resolver(&self) -> ResolverConfig {
        ResolverConfig {
            asset_ual: self.asset.to_ual_string(),
            public_node: self.public_node.clone(),
            local_node: self.local_node.clone(),
            blockchain: self.blockchain.clone(),
        }
    }
}

impl ConfigRaw {
    pub(crate) fn resolve(self) -> Result<Config, ConfigError> {
        let asset = parse_ual(&self.asset_ual).map_err(|e| {
            ConfigError::InvalidConfig(format!("asset_ual '{}': {}", self.asset_ual, e))
        })?;

        if self.blockchain.blockchain_id.chain_id().is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "blockchain.blockchain_id '{}' must look like 'name:chain_id'",
                self.blockchain.blockchain_id
            )));
        }

        if self.get.max_poll_attempts == 0 {
            return Err(ConfigError::InvalidConfig(
                "get.max_poll_attempts must be at least 1".to_string(),
            ));
        }

        for (name, node) in [("public_node", &self.public_node), ("local_node", &self.local_node)] {
            if node.api_version.trim_matches('/').is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "{name}.api_version must not be empty"
                )));
            }
            node.route("info").map_err(|e| {
                ConfigError::InvalidConfig(format!("{name}.endpoint '{}': {e}", node.endpoint))
            })?;
        }

        Ok(Config {
            asset,
            public_node: self.public_node,
            local_node: self.local_node,
            blockchain: self.blockchain,
            get: self.get,
            logger: self.logger,
        })
    }
}
