//! Launchpad CLI
//!
//! Command-line interface that fills the launch form, runs the workflow
//! against a JSON-RPC wallet and prints the result.

use crate::commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Launchpad CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "launchpad-cli")]
pub struct LaunchpadCli {
    /// Wallet JSON-RPC endpoint (no endpoint means no wallet provider)
    #[arg(short, long, env = "LAUNCHPAD_WALLET_RPC")]
    pub wallet_rpc: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "LAUNCHPAD_VERBOSE")]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", env = "LAUNCHPAD_FORMAT")]
    pub format: String,

    /// Configuration file path
    #[arg(short, long, env = "LAUNCHPAD_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: LaunchpadCommand,
}

/// Launchpad commands
#[derive(Subcommand, Debug, Clone)]
pub enum LaunchpadCommand {
    /// Launch a new token through the factory
    Launch(LaunchArgs),

    /// Show the factory address, ABI signatures and launch fee
    Info,

    /// Configuration management
    Config(ConfigArgs),
}

/// Token launch parameters
#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Token name (e.g., "Moon Dog")
    #[arg(short, long)]
    pub name: String,

    /// Token symbol (e.g., "MDOG")
    #[arg(short, long)]
    pub symbol: String,

    /// Total supply in whole tokens, decimals allowed (scaled by 18)
    #[arg(long)]
    pub supply: String,

    /// Developer wallet address (default: defaults.dev_wallet from config)
    #[arg(short, long)]
    pub dev_wallet: Option<String>,

    /// Lock days (min 10)
    #[arg(short, long)]
    pub unlock_days: Option<u64>,
}

/// Configuration commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the loaded configuration file as TOML
    Show,
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments, resolve settings and dispatch
pub async fn run_cli() -> Result<()> {
    let cli = LaunchpadCli::parse();

    let config = crate::cli_config::load_config(cli.config.as_deref())?;
    let settings = crate::logic::resolve_settings(
        cli.wallet_rpc.as_deref(),
        &cli.format,
        cli.verbose,
        &config,
    )?;

    init_logging(&settings.log_level);
    tracing::debug!(?settings, "resolved settings");

    match &cli.command {
        LaunchpadCommand::Launch(args) => {
            commands::launch::handle_launch_command(args.clone(), &settings).await?
        }
        LaunchpadCommand::Info => commands::info::handle_info_command(&settings)?,
        LaunchpadCommand::Config(args) => {
            commands::config::handle_config_command(args.clone(), &cli, &config)?
        }
    }

    Ok(())
}
