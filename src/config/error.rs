use thiserror::Error;

/// Startup failures; the resolver never runs when one of these is returned.
#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    /// `config.toml` or the `--config` file is not valid TOML for the resolver
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] Box<figment::Error>),

    /// `--config` named a file that does not exist
    #[error("Missing required config file: {0}")]
    MissingConfig(String),

    /// Unparseable asset UAL, bad node endpoint or zero poll attempts
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
