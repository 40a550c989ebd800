//! Typed default configuration.
//!
//! Points at the OriginTrail testnet: public data comes from a Pegasus node,
//! private data from a node running on this machine.

use dkg_node_client::{BlockchainConfig, GetOptions, NodeEndpointConfig};
use url::Url;

use super::{ConfigError, ConfigRaw};
use crate::logger::{LogFormat, LoggerConfig};

pub(crate) const LOCAL_NODE_URL: &str = "http://localhost:8900";
pub(crate) const PUBLIC_NODE_URL: &str = "https://v6-pegasus-node-02.origin-trail.network:8900";
pub(crate) const API_VERSION: &str = "v1";
pub(crate) const BLOCKCHAIN_ID: &str = "otp:20430";
pub(crate) const BLOCKCHAIN_RPC_URI: &str = "https://otp-testnet.origin-trail.network";
pub(crate) const ASSET_UAL: &str =
    "did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/399695";

/// Returns the default [`ConfigRaw`].
pub(crate) fn config() -> Result<ConfigRaw, ConfigError> {
    Ok(ConfigRaw {
        asset_ual: ASSET_UAL.to_string(),
        public_node: node(PUBLIC_NODE_URL)?,
        local_node: node(LOCAL_NODE_URL)?,
        blockchain: BlockchainConfig {
            blockchain_id: BLOCKCHAIN_ID.into(),
            rpc_uri: url(BLOCKCHAIN_RPC_URI)?,
        },
        get: GetOptions::default(),
        logger: LoggerConfig {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        },
    })
}

fn node(endpoint: &str) -> Result<NodeEndpointConfig, ConfigError> {
    Ok(NodeEndpointConfig::new(url(endpoint)?, API_VERSION))
}

fn url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidConfig(format!("'{value}': {e}")))
}
