use std::fmt;

use dkg_domain::KnowledgeAsset;
use dkg_node_client::NodeEndpointConfig;

/// Result of resolving one private resource on the local node.
#[derive(Debug, Clone)]
pub(crate) enum PrivateResourceOutcome {
    Resolved { id: String, data: KnowledgeAsset },
    Failed { id: String, error: String },
}

#[derive(Debug, Clone)]
pub(crate) enum LocalResolution {
    /// The public asset references no private resources
    Skipped,
    /// The local node could not be reached; no identifier was tried
    Unreachable { error: String },
    /// One outcome per identifier, in lookup order
    Attempted(Vec<PrivateResourceOutcome>),
}

/// Everything one run found.
///
/// Its `Display` output is the concatenation of the sections the resolver
/// streams while running.
#[derive(Debug, Clone)]
pub(crate) struct ResolutionReport {
    pub asset_ual: String,
    pub local_node: NodeEndpointConfig,
    pub private_ids: Vec<String>,
    pub local: LocalResolution,
}

pub(crate) fn found_section(private_ids: &[String]) -> String {
    format!("Found private resource UUIDs: {private_ids:?}\n")
}

pub(crate) fn skipped_section(asset_ual: &str) -> String {
    format!("No private resources referenced by {asset_ual}, nothing to resolve.\n")
}

pub(crate) const CONNECTING_SECTION: &str =
    "\nTrying to connect to local DKG node for private data...\n";

pub(crate) fn unreachable_section(local_node: &NodeEndpointConfig, error: &str) -> String {
    let location = match local_node.port() {
        Some(port) => format!("on port {port}"),
        None => format!("at {}", local_node.endpoint),
    };

    format!(
        "Could not connect to local node at {endpoint}\n\
         Error: {error}\n\
         \n\
         NOTE: Private resources are stored locally on the node that published them.\n\
         You need to:\n\
         1. Start your local DKG node\n\
         2. Ensure it's running {location}\n\
         3. Then re-run this command\n",
        endpoint = local_node.endpoint,
    )
}

pub(crate) fn outcome_section(outcome: &PrivateResourceOutcome) -> serde_json::Result<String> {
    match outcome {
        PrivateResourceOutcome::Resolved { id, data } => {
            let rendered = serde_json::to_string_pretty(data)?;
            Ok(format!("\nPrivate data for {id}:\n{rendered}\n"))
        }
        PrivateResourceOutcome::Failed { id, error } => Ok(format!(
            "Error retrieving {id} from local node: {error}\n"
        )),
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&found_section(&self.private_ids))?;

        match &self.local {
            LocalResolution::Skipped => f.write_str(&skipped_section(&self.asset_ual)),
            LocalResolution::Unreachable { error } => {
                f.write_str(CONNECTING_SECTION)?;
                f.write_str(&unreachable_section(&self.local_node, error))
            }
            LocalResolution::Attempted(outcomes) => {
                f.write_str(CONNECTING_SECTION)?;
                for outcome in outcomes {
                    f.write_str(&outcome_section(outcome).map_err(|_| fmt::Error)?)?;
                }
                Ok(())
            }
        }
    }
}
