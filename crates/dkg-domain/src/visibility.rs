use serde::{Deserialize, Serialize};

/// `contentType` of a get request.
///
/// The resolver asks for `all` by default; private triples only come back from
/// the node that published the asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    /// Public and, where held, private triples
    #[default]
    All,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::All => write!(f, "all"),
        }
    }
}
