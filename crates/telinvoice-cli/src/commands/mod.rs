//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod process;
pub mod providers;

use std::path::{Path, PathBuf};

use telinvoice_core::models::config::AppConfig;
use telinvoice_core::{parser_for, Provider};

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("telinvoice")
        .join("config.json")
}

/// Config file in effect: the `--config` argument or the default location.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; a missing default
/// file falls back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => Ok(AppConfig::from_file(Path::new(path))?),
        None => {
            let path = default_config_path();
            if path.exists() {
                Ok(AppConfig::from_file(&path)?)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Resolve the provider from the command line, then the configured default.
pub fn resolve_provider(name: Option<&str>, config: &AppConfig) -> anyhow::Result<Provider> {
    let name = name
        .or(config.batch.default_provider.as_deref())
        .ok_or_else(|| anyhow::anyhow!("No provider given. Use --provider or set batch.default_provider"))?;

    Ok(parser_for(name)?)
}
