use alloy_primitives::Address;
use thiserror::Error;

use crate::BlockchainId;

const UAL_PREFIX: &str = "did:dkg:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UalParseError {
    #[error("Invalid UAL format: {0}")]
    Format(String),
    #[error("Invalid blockchain identifier: {0}")]
    Blockchain(String),
    #[error("Invalid contract address: {0}")]
    Contract(String),
    #[error("Invalid knowledge collection ID: {0}")]
    KnowledgeCollectionId(String),
    #[error("Invalid knowledge asset ID: {0}")]
    KnowledgeAssetId(String),
}

/// Parsed UAL (Universal Asset Locator) components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUal {
    /// Blockchain identifier as it appears in the UAL (e.g., "otp:20430")
    pub blockchain: BlockchainId,
    /// Knowledge collection storage contract address
    pub contract: Address,
    /// Knowledge collection ID
    pub knowledge_collection_id: u128,
    /// Optional knowledge asset ID (if UAL points to a specific asset)
    pub knowledge_asset_id: Option<u128>,
}

impl ParsedUal {
    /// Get the knowledge collection UAL (without asset ID).
    ///
    /// Example: `did:dkg:otp:20430/0xcdb2.../399695`
    pub fn knowledge_collection_ual(&self) -> String {
        format!(
            "{}{}/{:?}/{}",
            UAL_PREFIX,
            self.blockchain.as_str().to_lowercase(),
            self.contract,
            self.knowledge_collection_id
        )
    }

    /// Convert back to full UAL string.
    ///
    /// If `knowledge_asset_id` is set, returns the asset UAL.
    /// Otherwise returns the collection UAL.
    pub fn to_ual_string(&self) -> String {
        match self.knowledge_asset_id {
            Some(asset_id) => format!("{}/{}", self.knowledge_collection_ual(), asset_id),
            None => self.knowledge_collection_ual(),
        }
    }
}

/// Returns true if the identifier looks like a UAL rather than a bare resource id.
pub fn is_ual(identifier: &str) -> bool {
    identifier.starts_with(UAL_PREFIX)
}

/// Parse a UAL string into its components
///
/// UAL format: did:dkg:{blockchain}/{contract}/{knowledge_collection_id}[/{knowledge_asset_id}]
///
/// Examples:
/// - `did:dkg:otp:20430/0x1234.../123` - Knowledge collection
/// - `did:dkg:otp:20430/0x1234.../123/1` - Knowledge asset
pub fn parse_ual(ual: &str) -> Result<ParsedUal, UalParseError> {
    let stripped = ual
        .trim()
        .strip_prefix(UAL_PREFIX)
        .ok_or_else(|| UalParseError::Format(format!("missing '{UAL_PREFIX}' prefix: {ual}")))?;

    let parts: Vec<&str> = stripped.split('/').collect();

    let (blockchain, contract, knowledge_collection_id, knowledge_asset_id) = match parts[..] {
        [blockchain, contract, kc_id] => (blockchain, contract, kc_id, None),
        [blockchain, contract, kc_id, ka_id] => (blockchain, contract, kc_id, Some(ka_id)),
        _ => {
            return Err(UalParseError::Format(format!(
                "Expected 3 or 4 parts, got {}",
                parts.len()
            )));
        }
    };

    Ok(ParsedUal {
        blockchain: parse_blockchain(blockchain)?,
        contract: parse_contract(contract)?,
        knowledge_collection_id: parse_knowledge_collection_id(knowledge_collection_id)?,
        knowledge_asset_id: knowledge_asset_id
            .map(parse_knowledge_asset_id)
            .transpose()?,
    })
}

fn parse_blockchain(s: &str) -> Result<BlockchainId, UalParseError> {
    let blockchain = BlockchainId::from(s);
    if blockchain.chain_id().is_none() {
        return Err(UalParseError::Blockchain(s.to_string()));
    }
    Ok(blockchain)
}

fn parse_contract(s: &str) -> Result<Address, UalParseError> {
    s.parse()
        .map_err(|_| UalParseError::Contract(s.to_string()))
}

fn parse_knowledge_collection_id(s: &str) -> Result<u128, UalParseError> {
    s.parse()
        .map_err(|_| UalParseError::KnowledgeCollectionId(s.to_string()))
}

fn parse_knowledge_asset_id(s: &str) -> Result<u128, UalParseError> {
    s.parse()
        .map_err(|_| UalParseError::KnowledgeAssetId(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION_UAL: &str =
        "did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/399695";

    #[test]
    fn parses_knowledge_collection_ual() {
        let parsed = parse_ual(COLLECTION_UAL).unwrap();

        assert_eq!(parsed.blockchain.as_str(), "otp:20430");
        assert_eq!(parsed.blockchain.chain_id(), Some(20430));
        assert_eq!(parsed.knowledge_collection_id, 399695);
        assert_eq!(parsed.knowledge_asset_id, None);
        assert_eq!(parsed.to_ual_string(), COLLECTION_UAL);
    }

    #[test]
    fn parses_knowledge_asset_ual() {
        let ual = format!("{COLLECTION_UAL}/7");
        let parsed = parse_ual(&ual).unwrap();

        assert_eq!(parsed.knowledge_asset_id, Some(7));
        assert_eq!(parsed.to_ual_string(), ual);
        assert_eq!(parsed.knowledge_collection_ual(), COLLECTION_UAL);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = parse_ual("otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/1").unwrap_err();
        assert!(matches!(err, UalParseError::Format(_)));
    }

    #[test]
    fn rejects_wrong_part_count() {
        let err = parse_ual("did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37").unwrap_err();
        assert_eq!(
            err,
            UalParseError::Format("Expected 3 or 4 parts, got 2".to_string())
        );
    }

    #[test]
    fn rejects_bad_components() {
        assert!(matches!(
            parse_ual("did:dkg:otp/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/1"),
            Err(UalParseError::Blockchain(_))
        ));
        assert!(matches!(
            parse_ual("did:dkg:otp:20430/0xnothex/1"),
            Err(UalParseError::Contract(_))
        ));
        assert!(matches!(
            parse_ual("did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/abc"),
            Err(UalParseError::KnowledgeCollectionId(_))
        ));
        assert!(matches!(
            parse_ual("did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/1/-2"),
            Err(UalParseError::KnowledgeAssetId(_))
        ));
    }

    #[test]
    fn distinguishes_uals_from_resource_ids() {
        assert!(is_ual(COLLECTION_UAL));
        assert!(!is_ual("uuid:5f1c3c1e-0000-4000-8000-000000000001"));
    }
}
