//! Pure configuration logic
//!
//! Merges command-line values over the config file and validates them.

use std::time::Duration;

use crate::cli_config::CliConfig;
use crate::error::{CliError, CliResult};
use lib_launchpad::rpc::DEFAULT_POLL_INTERVAL;

/// Log level when neither `--verbose` nor the config file set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "Unknown output format: '{}'. Supported: text, json",
                other
            ))),
        }
    }
}

/// Effective settings after merging flags, environment and config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Wallet endpoint; `None` means no wallet binding
    pub wallet_rpc: Option<String>,
    pub poll_interval: Duration,
    pub dev_wallet: Option<String>,
    pub unlock_days: Option<u64>,
    pub log_level: String,
    pub format: OutputFormat,
}

/// Validate a wallet endpoint URL
pub fn validate_rpc_url(url: &str) -> CliResult<()> {
    if url.is_empty() {
        return Err(CliError::InvalidConfiguration(
            "Wallet RPC URL cannot be empty".to_string(),
        ));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::InvalidConfiguration(format!(
            "Wallet RPC URL must use http:// or https://, got '{}'",
            url
        )));
    }

    Ok(())
}

/// Validate log level
pub fn validate_log_level(level: &str) -> CliResult<()> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        other => Err(CliError::ConfigError(format!(
            "Unknown log level: '{}'. Supported: trace, debug, info, warn, error",
            other
        ))),
    }
}

/// Merge command-line values (already folded with env vars by clap) over
/// the config file.
pub fn resolve_settings(
    wallet_rpc: Option<&str>,
    format: &str,
    verbose: bool,
    config: &CliConfig,
) -> CliResult<Settings> {
    let wallet_rpc = wallet_rpc
        .map(str::to_string)
        .or_else(|| config.wallet.rpc_url.clone());
    if let Some(url) = &wallet_rpc {
        validate_rpc_url(url)?;
    }

    let poll_interval = match config.wallet.poll_interval_ms {
        Some(0) => {
            return Err(CliError::InvalidConfiguration(
                "wallet.poll_interval_ms must be greater than 0".to_string(),
            ))
        }
        Some(ms) => Duration::from_millis(ms),
        None => DEFAULT_POLL_INTERVAL,
    };

    let log_level = if verbose {
        "debug".to_string()
    } else {
        config
            .logging
            .level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_lowercase()
    };
    validate_log_level(&log_level)?;

    Ok(Settings {
        wallet_rpc,
        poll_interval,
        dev_wallet: config.defaults.dev_wallet.clone(),
        unlock_days: config.defaults.unlock_days,
        log_level,
        format: OutputFormat::from_str(format)?,
    })
}
