//! Two-stage lookup: a public knowledge asset, then the private resources it references.
//!
//! Failure handling has three tiers:
//! - the public lookup is fatal and returned as [`ResolverError`]
//! - an unreachable local node aborts private lookups but the run still completes
//! - a failing private lookup is recorded and the next identifier is tried
//!
//! Report sections are written to the output sink as soon as they are known.

mod report;

use std::io::{self, Write};

use dkg_domain::{KnowledgeAsset, private_resource_ids};
use dkg_node_client::{
    BlockchainConfig, NodeClient, NodeClientError, NodeConnector, NodeEndpointConfig,
};

use report::{
    CONNECTING_SECTION, found_section, outcome_section, skipped_section, unreachable_section,
};
pub(crate) use report::{LocalResolution, PrivateResourceOutcome, ResolutionReport};

use crate::error::ResolverError;

/// Connection settings for one resolution run.
#[derive(Debug, Clone)]
pub(crate) struct ResolverConfig {
    pub asset_ual: String,
    pub public_node: NodeEndpointConfig,
    pub local_node: NodeEndpointConfig,
    pub blockchain: BlockchainConfig,
}

pub(crate) struct Resolver<C: NodeConnector> {
    connector: C,
    config: ResolverConfig,
}

impl<C: NodeConnector> Resolver<C> {
    pub(crate) fn new(connector: C, config: ResolverConfig) -> Self {
        Self { connector, config }
    }

    pub(crate) async fn resolve<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<ResolutionReport, ResolverError> {
        let asset = self.resolve_public_asset().await?;

        let private_ids = private_resource_ids(&asset);
        tracing::info!(
            ual = %self.config.asset_ual,
            count = private_ids.len(),
            "Found private resource identifiers"
        );
        emit(out, &found_section(&private_ids))?;

        let local = if private_ids.is_empty() {
            emit(out, &skipped_section(&self.config.asset_ual))?;
            LocalResolution::Skipped
        } else {
            emit(out, CONNECTING_SECTION)?;
            self.resolve_private_resources(&private_ids, out).await?
        };

        Ok(ResolutionReport {
            asset_ual: self.config.asset_ual.clone(),
            local_node: self.config.local_node.clone(),
            private_ids,
            local,
        })
    }

    async fn resolve_public_asset(&self) -> Result<KnowledgeAsset, ResolverError> {
        let public_node = &self.config.public_node;
        let client = self
            .connector
            .connect(public_node, &self.config.blockchain)
            .map_err(|source| ResolverError::PublicClient {
                endpoint: public_node.endpoint.clone(),
                source,
            })?;

        tracing::info!(
            ual = %self.config.asset_ual,
            endpoint = %public_node.endpoint,
            "Retrieving public asset"
        );

        client
            .get(&self.config.asset_ual)
            .await
            .map_err(|source| ResolverError::PublicAsset {
                ual: self.config.asset_ual.clone(),
                source,
            })
    }

    async fn resolve_private_resources<W: Write>(
        &self,
        private_ids: &[String],
        out: &mut W,
    ) -> io::Result<LocalResolution> {
        let client = match self.connect_local().await {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!(
                    endpoint = %self.config.local_node.endpoint,
                    error = %error,
                    "Local node unreachable, skipping private resources"
                );
                let error = error.to_string();
                emit(out, &unreachable_section(&self.config.local_node, &error))?;
                return Ok(LocalResolution::Unreachable { error });
            }
        };

        let mut outcomes = Vec::with_capacity(private_ids.len());
        for id in private_ids {
            let outcome = match client.get(id).await {
                Ok(data) => {
                    tracing::debug!(id = %id, "Retrieved private resource");
                    PrivateResourceOutcome::Resolved {
                        id: id.clone(),
                        data,
                    }
                }
                Err(error) => {
                    tracing::warn!(id = %id, error = %error, "Failed to retrieve private resource");
                    PrivateResourceOutcome::Failed {
                        id: id.clone(),
                        error: error.to_string(),
                    }
                }
            };
            emit(out, &outcome_section(&outcome)?)?;
            outcomes.push(outcome);
        }

        Ok(LocalResolution::Attempted(outcomes))
    }

    /// Create the local client and make sure the node answers before any lookup.
    async fn connect_local(&self) -> Result<C::Client, NodeClientError> {
        let client = self
            .connector
            .connect(&self.config.local_node, &self.config.blockchain)?;
        let info = client.info().await?;

        tracing::info!(
            endpoint = %client.endpoint().endpoint,
            version = %info.version,
            "Connected to local node"
        );
        Ok(client)
    }
}

/// Write one report section and flush it so it reaches the operator immediately.
fn emit<W: Write>(out: &mut W, section: &str) -> io::Result<()> {
    out.write_all(section.as_bytes())?;
    out.flush()
}
