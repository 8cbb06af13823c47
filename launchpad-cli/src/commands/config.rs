//! Config command: show or initialise the CLI configuration file

use crate::argument_parsing::{ConfigAction, ConfigArgs, LaunchpadCli};
use crate::cli_config::{self, CliConfig};
use crate::error::{CliError, CliResult};
use crate::output::Output;

/// Handle config command
pub fn handle_config_command(args: ConfigArgs, cli: &LaunchpadCli, loaded: &CliConfig) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    handle_config_command_with_output(args, cli.config.as_deref(), loaded, &output)
}

/// Handle config command with injected output (for testing)
pub fn handle_config_command_with_output<O: Output>(
    args: ConfigArgs,
    path: Option<&str>,
    loaded: &CliConfig,
    output: &O,
) -> CliResult<()> {
    match args.action {
        ConfigAction::Show => {
            output.info(&format!(
                "Config file: {}",
                cli_config::config_path(path).display()
            ))?;
            let rendered = toml::to_string_pretty(loaded)
                .map_err(|e| CliError::ConfigError(format!("Failed to render config: {}", e)))?;
            output.print(&rendered)
        }
        ConfigAction::Init { force } => {
            let target = cli_config::config_path(path);
            if target.exists() && !force {
                return Err(CliError::ConfigError(format!(
                    "{} already exists; use --force to overwrite",
                    target.display()
                )));
            }
            let written = cli_config::save_config(path, &CliConfig::template())?;
            output.success(&format!("Wrote {}", written.display()))
        }
    }
}
