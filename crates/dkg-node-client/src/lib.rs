//! Client for the DKG node HTTP API.
//!
//! The [`NodeClient`] and [`NodeConnector`] traits are the seam callers depend on;
//! [`HttpConnector`] builds reqwest-backed clients that run a node get operation
//! (start, then poll for the result) and return the asset with its assertion as
//! expanded JSON-LD.

mod client;
mod config;
pub mod dto;
mod error;
mod http;
pub mod jsonld;

pub use client::{NodeClient, NodeConnector};
pub use config::{BlockchainConfig, GetOptions, NodeEndpointConfig};
pub use dto::NodeInfo;
pub use error::{NodeClientError, Result};
pub use http::{HttpConnector, HttpNodeClient};
