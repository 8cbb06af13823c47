//! CLI configuration file loader.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI config filename under ~/.launchpad/
pub const DEFAULT_CONFIG_FILENAME: &str = "cli.toml";

/// Endpoint written by `config init`: a local wallet exposing JSON-RPC
pub const TEMPLATE_WALLET_RPC: &str = "http://127.0.0.1:1248";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub defaults: LaunchDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletConfig {
    pub rpc_url: Option<String>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LaunchDefaults {
    pub dev_wallet: Option<String>,
    pub unlock_days: Option<u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl CliConfig {
    /// Starter configuration written by `config init`
    pub fn template() -> Self {
        CliConfig {
            wallet: WalletConfig {
                rpc_url: Some(TEMPLATE_WALLET_RPC.to_string()),
                poll_interval_ms: Some(1000),
            },
            defaults: LaunchDefaults {
                dev_wallet: None,
                unlock_days: Some(lib_launchpad::DEFAULT_UNLOCK_DAYS),
            },
            logging: LoggingConfig {
                level: Some("warn".to_string()),
            },
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".launchpad").join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./launchpad-cli.toml")
    }
}

pub fn config_path(path: Option<&str>) -> PathBuf {
    path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the config file.
///
/// A missing default file yields an empty config; a missing file that was
/// named explicitly is an error.
pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = config_path(path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    parse_config_file(&config_path)
}

fn parse_config_file(path: &Path) -> CliResult<CliConfig> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::ConfigLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    toml::from_str(&raw).map_err(|e| CliError::ConfigLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn save_config(path: Option<&str>, config: &CliConfig) -> CliResult<PathBuf> {
    let config_path = config_path(path);
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::ConfigError(format!("Failed to create config directory: {}", e))
        })?;
    }

    let data = toml::to_string_pretty(config)
        .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {}", e)))?;
    fs::write(&config_path, data)
        .map_err(|e| CliError::ConfigError(format!("Failed to write config: {}", e)))?;
    Ok(config_path)
}
