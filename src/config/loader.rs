use std::path::{Path, PathBuf};

use clap::Parser;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};

use super::{Config, ConfigError, ConfigRaw, defaults};

/// Optional overrides picked up from the working directory.
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Parser)]
#[command(name = "dkg-private-resolver")]
#[command(about = "Resolve a public DKG knowledge asset and the private resources it references")]
pub(crate) struct Cli {
    /// Sets a custom config file (.toml format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// UAL of the public knowledge asset, overriding the configured one
    #[arg(long, value_name = "UAL")]
    pub ual: Option<String>,
}

/// Build the configuration from (lowest to highest priority) typed defaults,
/// `./config.toml`, the `--config` file and CLI overrides.
pub(crate) fn load_configuration(cli: &Cli) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(defaults::config()?));

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_path) = &cli.config {
        if !config_path.exists() {
            return Err(ConfigError::MissingConfig(config_path.display().to_string()));
        }
        figment = figment.merge(Toml::file(config_path));
    }

    if let Some(ual) = &cli.ual {
        figment = figment.merge(Serialized::default("asset_ual", ual));
    }

    let config: ConfigRaw = figment.extract().map_err(Box::new)?;
    config.resolve()
}
