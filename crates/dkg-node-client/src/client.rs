use async_trait::async_trait;
use dkg_domain::KnowledgeAsset;

use crate::{
    config::{BlockchainConfig, NodeEndpointConfig},
    dto::NodeInfo,
    error::Result,
};

/// Capability to retrieve knowledge assets from one node.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Endpoint this client talks to, for diagnostics.
    fn endpoint(&self) -> &NodeEndpointConfig;

    /// Query node info; succeeds only if the node is reachable and serving the API.
    async fn info(&self) -> Result<NodeInfo>;

    /// Retrieve a knowledge asset (or private resource) by identifier.
    async fn get(&self, id: &str) -> Result<KnowledgeAsset>;
}

/// Builds [`NodeClient`]s from connection configuration.
pub trait NodeConnector: Send + Sync {
    type Client: NodeClient;

    fn connect(
        &self,
        node: &NodeEndpointConfig,
        blockchain: &BlockchainConfig,
    ) -> Result<Self::Client>;
}
