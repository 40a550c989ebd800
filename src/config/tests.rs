use std::io::Write;

use dkg_domain::Visibility;
use dkg_node_client::NodeEndpointConfig;

use super::{Cli, ConfigError, defaults, load_configuration};
use crate::logger::LogFormat;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn cli_with(path: &std::path::Path) -> Cli {
    Cli {
        config: Some(path.to_path_buf()),
        ual: None,
    }
}

#[test]
fn defaults_target_testnet_nodes() {
    let config = defaults::config().unwrap().resolve().unwrap();

    assert_eq!(config.asset.to_ual_string(), defaults::ASSET_UAL);
    assert_eq!(config.local_node.endpoint.as_str(), "http://localhost:8900/");
    assert_eq!(config.local_node.port(), Some(8900));
    assert_eq!(
        config.public_node.endpoint.as_str(),
        "https://v6-pegasus-node-02.origin-trail.network:8900/"
    );
    assert_eq!(config.public_node.api_version, "v1");
    assert_eq!(config.blockchain.blockchain_id.as_str(), "otp:20430");
    assert_eq!(
        config.blockchain.rpc_uri.as_str(),
        "https://otp-testnet.origin-trail.network/"
    );
    assert_eq!(config.get.content_type, Visibility::All);
}

#[test]
fn config_file_overrides_defaults() {
    let file = write_config(
        r#"
        asset_ual = "did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/394735"

        [local_node]
        endpoint = "http://127.0.0.1:9900"
        api_version = "v1"
        auth_token = "token"

        [get]
        content_type = "private"
        include_metadata = true
        max_poll_attempts = 2
        poll_interval_ms = 100
        connect_timeout_ms = 1000
        request_timeout_ms = 2000

        [logger]
        level = "debug"
        format = "json"
        "#,
    );

    let config = load_configuration(&cli_with(file.path())).unwrap();

    assert_eq!(config.asset.knowledge_collection_id, 394735);
    assert_eq!(config.local_node.port(), Some(9900));
    assert_eq!(config.local_node.auth_token.as_deref(), Some("token"));
    assert_eq!(config.get.content_type, Visibility::Private);
    assert_eq!(config.get.max_poll_attempts, 2);
    assert_eq!(config.logger.format, LogFormat::Json);
    // untouched sections keep their defaults
    assert_eq!(config.public_node.port(), Some(8900));
}

#[test]
fn cli_ual_takes_precedence_over_file() {
    let file = write_config(
        r#"asset_ual = "did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/1""#,
    );
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        ual: Some("did:dkg:otp:20430/0xcdb28e93ed340ec10a71bba00a31dbfcf1bd5d37/2/5".to_string()),
    };

    let config = load_configuration(&cli).unwrap();

    assert_eq!(config.asset.knowledge_collection_id, 2);
    assert_eq!(config.asset.knowledge_asset_id, Some(5));
}

#[test]
fn invalid_values_are_rejected() {
    let bad_ual = write_config(r#"asset_ual = "not-a-ual""#);
    assert!(matches!(
        load_configuration(&cli_with(bad_ual.path())),
        Err(ConfigError::InvalidConfig(_))
    ));

    let no_polls = write_config(
        r#"
        [get]
        content_type = "all"
        include_metadata = false
        max_poll_attempts = 0
        poll_interval_ms = 100
        connect_timeout_ms = 1000
        request_timeout_ms = 2000
        "#,
    );
    assert!(matches!(
        load_configuration(&cli_with(no_polls.path())),
        Err(ConfigError::InvalidConfig(_))
    ));

    let unknown_key = write_config("unexpected = true");
    assert!(matches!(
        load_configuration(&cli_with(unknown_key.path())),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn missing_custom_config_file_is_an_error() {
    let cli = cli_with(std::path::Path::new("/nonexistent/resolver.toml"));
    assert!(matches!(
        load_configuration(&cli),
        Err(ConfigError::MissingConfig(_))
    ));
}

#[test]
fn resolver_config_carries_connection_settings() {
    let config = defaults::config().unwrap().resolve().unwrap();
    let resolver = config.resolver();

    assert_eq!(resolver.asset_ual, defaults::ASSET_UAL);
    assert_eq!(resolver.local_node, config.local_node);
    assert_eq!(
        resolver.public_node,
        NodeEndpointConfig::new(config.public_node.endpoint.clone(), "v1")
    );
}
