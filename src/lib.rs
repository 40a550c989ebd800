mod config;
mod error;
mod logger;
mod resolver;

use std::process::ExitCode;

use clap::Parser;
use dkg_node_client::HttpConnector;

use crate::{
    config::Cli,
    resolver::{LocalResolution, Resolver},
};

/// Resolve the configured public asset and its private resources, streaming the report
/// to stdout.
///
/// Exits with failure when configuration is invalid or the public asset cannot be
/// retrieved; an unreachable local node still ends successfully.
pub async fn run() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match config::load_configuration(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    logger::initialize(&config.logger);
    tracing::info!(
        ual = %config.asset.to_ual_string(),
        blockchain = %config.blockchain.blockchain_id,
        rpc = %config.blockchain.rpc_uri,
        "Configuration loaded"
    );

    let resolver = Resolver::new(HttpConnector::new(config.get.clone()), config.resolver());
    let mut stdout = std::io::stdout();
    match resolver.resolve(&mut stdout).await {
        Ok(report) => {
            if let LocalResolution::Attempted(outcomes) = &report.local {
                tracing::info!(attempted = outcomes.len(), "Private resource resolution finished");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            // Shown even when logging is filtered off
            eprintln!("{error}");
            tracing::error!(error = %error, "Resolution failed");
            ExitCode::FAILURE
        }
    }
}
