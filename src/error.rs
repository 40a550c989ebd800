use dkg_node_client::NodeClientError;
use thiserror::Error;
use url::Url;

/// Failures that end a resolution run.
///
/// Only the public asset lookup is fatal; local node problems are reported
/// in the resolution report instead.
#[derive(Error, Debug)]
pub(crate) enum ResolverError {
    /// Client for the public node could not be created
    #[error("Failed to create client for public node {endpoint}: {source}")]
    PublicClient {
        endpoint: Url,
        #[source]
        source: NodeClientError,
    },

    /// Public asset lookup failed
    #[error("Failed to resolve public asset {ual}: {source}")]
    PublicAsset {
        ual: String,
        #[source]
        source: NodeClientError,
    },

    /// Report could not be written to the operator
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
