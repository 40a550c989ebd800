//! Wire types of the node HTTP API v1.

use dkg_domain::Visibility;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /{version}/get`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest<'a> {
    /// UAL or private resource identifier to retrieve
    pub id: &'a str,
    pub content_type: Visibility,
    pub include_metadata: bool,
    #[serde(rename = "paranetUAL")]
    pub paranet_ual: Option<&'a str>,
}

/// Response of `POST /{version}/get`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    pub operation_id: Uuid,
}

/// Lifecycle of an asynchronous node operation.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    /// Intermediate statuses some node versions report
    #[serde(other)]
    Other,
}

/// Payload of a get operation result; which fields are set depends on the status.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationData {
    #[serde(default)]
    pub assertion: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response of `GET /{version}/get/{operation_id}`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationResultResponse {
    pub status: OperationStatus,
    #[serde(default)]
    pub data: Option<GetOperationData>,
}

/// Response of `GET /{version}/info`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub version: String,
}
