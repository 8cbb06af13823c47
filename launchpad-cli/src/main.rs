//! Launchpad Command-Line Interface
//!
//! Entry point for the launchpad-cli binary.

use launchpad_cli::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_cli().await
}
