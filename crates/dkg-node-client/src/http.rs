use std::time::Duration;

use async_trait::async_trait;
use dkg_domain::{ASSERTION_KEY, KnowledgeAsset, is_ual, parse_ual};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    client::{NodeClient, NodeConnector},
    config::{BlockchainConfig, GetOptions, NodeEndpointConfig},
    dto::{
        GetOperationData, GetOperationResultResponse, GetRequest, GetResponse, NodeInfo,
        OperationStatus,
    },
    error::{NodeClientError, Result},
    jsonld::assertion_to_jsonld,
};

/// Builds [`HttpNodeClient`]s sharing one set of [`GetOptions`].
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    options: GetOptions,
}

impl HttpConnector {
    pub fn new(options: GetOptions) -> Self {
        Self { options }
    }
}

impl NodeConnector for HttpConnector {
    type Client = HttpNodeClient;

    fn connect(
        &self,
        node: &NodeEndpointConfig,
        blockchain: &BlockchainConfig,
    ) -> Result<HttpNodeClient> {
        HttpNodeClient::new(node.clone(), blockchain.clone(), self.options.clone())
    }
}

/// Node client speaking the node's HTTP API.
pub struct HttpNodeClient {
    client: Client,
    node: NodeEndpointConfig,
    blockchain: BlockchainConfig,
    options: GetOptions,
}

impl HttpNodeClient {
    pub fn new(
        node: NodeEndpointConfig,
        blockchain: BlockchainConfig,
        options: GetOptions,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(options.connect_timeout_ms))
            .timeout(Duration::from_millis(options.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            node,
            blockchain,
            options,
        })
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.node.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn warn_on_foreign_blockchain(&self, id: &str) {
        if !is_ual(id) {
            return;
        }
        match parse_ual(id) {
            Ok(parsed) if !parsed.blockchain.matches(&self.blockchain.blockchain_id) => {
                tracing::warn!(
                    ual = %id,
                    ual_blockchain = %parsed.blockchain,
                    configured_blockchain = %self.blockchain.blockchain_id,
                    "UAL points to a different blockchain than the configured provider"
                );
            }
            Ok(_) => {}
            Err(error) => tracing::warn!(ual = %id, error = %error, "Requesting malformed UAL"),
        }
    }

    async fn start_get(&self, id: &str) -> Result<Uuid> {
        let url = self.node.route("get")?;
        let request = GetRequest {
            id,
            content_type: self.options.content_type,
            include_metadata: self.options.include_metadata,
            paranet_ual: None,
        };

        let response = self
            .with_auth(self.client.post(url))
            .json(&request)
            .send()
            .await?;
        let GetResponse { operation_id } = decode(response).await?;

        tracing::debug!(%operation_id, id = %id, "Get operation started");
        Ok(operation_id)
    }

    async fn poll_get_result(&self, operation_id: Uuid) -> Result<GetOperationData> {
        let url = self.node.route(&format!("get/{operation_id}"))?;
        let attempts = self.options.max_poll_attempts.max(1);

        for attempt in 1..=attempts {
            let response = self.with_auth(self.client.get(url.clone())).send().await?;
            let result: GetOperationResultResponse = decode(response).await?;

            tracing::trace!(%operation_id, attempt, status = ?result.status, "Polled get result");

            match result.status {
                OperationStatus::Completed => return Ok(result.data.unwrap_or_default()),
                OperationStatus::Failed => {
                    let data = result.data.unwrap_or_default();
                    return Err(NodeClientError::OperationFailed {
                        operation_id,
                        error_type: data
                            .error_type
                            .unwrap_or_else(|| "OPERATION_FAILED".to_string()),
                        message: data
                            .error_message
                            .unwrap_or_else(|| "no error message".to_string()),
                    });
                }
                _ if attempt < attempts => {
                    tokio::time::sleep(Duration::from_millis(self.options.poll_interval_ms)).await;
                }
                _ => {}
            }
        }

        Err(NodeClientError::OperationTimeout {
            operation_id,
            attempts,
        })
    }
}

#[async_trait]
impl NodeClient for HttpNodeClient {
    fn endpoint(&self) -> &NodeEndpointConfig {
        &self.node
    }

    async fn info(&self) -> Result<NodeInfo> {
        let url = self.node.route("info")?;
        let response = self.with_auth(self.client.get(url)).send().await?;
        decode(response).await
    }

    async fn get(&self, id: &str) -> Result<KnowledgeAsset> {
        self.warn_on_foreign_blockchain(id);

        let operation_id = self.start_get(id).await?;
        let data = self.poll_get_result(operation_id).await?;

        into_asset(operation_id, data)
    }
}

/// Turn a completed get result into the asset mapping handed to callers.
fn into_asset(operation_id: Uuid, data: GetOperationData) -> Result<KnowledgeAsset> {
    let mut asset = KnowledgeAsset::new();
    asset.insert(
        ASSERTION_KEY.to_string(),
        assertion_to_jsonld(data.assertion.unwrap_or(Value::Null))?,
    );
    if let Some(metadata) = data.metadata {
        asset.insert("metadata".to_string(), assertion_to_jsonld(metadata)?);
    }
    asset.insert(
        "operation".to_string(),
        json!({ "get": { "operationId": operation_id, "status": "COMPLETED" } }),
    );
    Ok(asset)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(NodeClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}
