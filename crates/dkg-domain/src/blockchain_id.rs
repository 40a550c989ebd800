use serde::{Deserialize, Serialize};

/// Chain an asset is anchored on, as written in its UAL (`did:dkg:otp:20430/...`).
///
/// The client carries it so a lookup on another chain can be flagged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BlockchainId(String);

impl BlockchainId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric part after the colon: `otp:20430` gives 20430.
    pub fn chain_id(&self) -> Option<u64> {
        self.0.split(':').nth(1).and_then(|s| s.parse().ok())
    }

    /// Case-insensitive comparison, since UALs carry the id lowercased.
    pub fn matches(&self, other: &BlockchainId) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::fmt::Display for BlockchainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlockchainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BlockchainId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
