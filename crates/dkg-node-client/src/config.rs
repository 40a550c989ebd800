use dkg_domain::{BlockchainId, Visibility};
use serde::{Deserialize, Serialize};
use url::Url;

/// Connection parameters for one node's HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NodeEndpointConfig {
    /// Base URL of the node (e.g., "http://localhost:8900")
    pub endpoint: Url,
    /// API version path segment (e.g., "v1")
    pub api_version: String,
    /// Optional bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl NodeEndpointConfig {
    pub fn new(endpoint: Url, api_version: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_version: api_version.into(),
            auth_token: None,
        }
    }

    /// Port the node is expected to listen on, falling back to the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.endpoint.port_or_known_default()
    }

    /// Build `{endpoint}/{api_version}/{path}`.
    pub fn route(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        Url::parse(&format!("{base}/{version}/{path}"))
    }
}

/// Blockchain the assets live on.
///
/// Handed to every client; the RPC endpoint is recorded but never called.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlockchainConfig {
    pub blockchain_id: BlockchainId,
    pub rpc_uri: Url,
}

/// Options applied to every get request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GetOptions {
    /// Content type requested from the node
    pub content_type: Visibility,
    /// Whether the node should include knowledge collection metadata
    pub include_metadata: bool,
    /// Number of result polls before the operation is reported as timed out
    pub max_poll_attempts: u32,
    /// Delay between result polls
    pub poll_interval_ms: u64,
    /// Timeout for establishing a connection
    pub connect_timeout_ms: u64,
    /// Timeout for a single HTTP request
    pub request_timeout_ms: u64,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            content_type: Visibility::All,
            include_metadata: false,
            max_poll_attempts: 5,
            poll_interval_ms: 5_000,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 60_000,
        }
    }
}
