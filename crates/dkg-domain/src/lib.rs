mod blockchain_id;
mod knowledge_asset;
mod ual;
mod visibility;

pub use blockchain_id::BlockchainId;
pub use knowledge_asset::{
    ASSERTION_KEY, ID_KEY, KnowledgeAsset, REPRESENTS_PRIVATE_RESOURCE, private_resource_ids,
};
pub use ual::{ParsedUal, UalParseError, is_ual, parse_ual};
pub use visibility::Visibility;
