//! Launch command
//!
//! Fills a [`LaunchForm`] from the arguments, runs it through the executor
//! and prints the rendered outcome.

use std::sync::Arc;

use lib_launchpad::{JsonRpcWallet, LaunchExecutor, WalletProvider};

use crate::argument_parsing::LaunchArgs;
use crate::error::{CliError, CliResult};
use crate::logic::{self, OutputFormat, Settings};
use crate::output::Output;

/// Wallet binding for the configured endpoint, if any
pub fn build_executor(settings: &Settings) -> LaunchExecutor {
    let provider = settings.wallet_rpc.as_ref().map(|url| {
        Arc::new(JsonRpcWallet::new(url.clone()).with_poll_interval(settings.poll_interval))
            as Arc<dyn WalletProvider>
    });
    LaunchExecutor::new(provider)
}

/// Handle launch command
pub async fn handle_launch_command(args: LaunchArgs, settings: &Settings) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    let executor = build_executor(settings);
    handle_launch_command_with_output(args, settings, &executor, &output).await
}

/// Handle launch command with injected executor and output (for testing)
pub async fn handle_launch_command_with_output<O: Output>(
    args: LaunchArgs,
    settings: &Settings,
    executor: &LaunchExecutor,
    output: &O,
) -> CliResult<()> {
    let mut form = logic::build_form(
        &args.name,
        &args.symbol,
        &args.supply,
        args.dev_wallet.as_deref(),
        args.unlock_days,
        settings,
    )?;

    if let Some(advisory) = logic::lock_advisory(form.unlock_days) {
        tracing::warn!(unlock_days = form.unlock_days, "short lock period requested");
        output.warning(&advisory)?;
    }

    if settings.format == OutputFormat::Text {
        output.info(&format!(
            "Launching {} ({}) with supply {}, locked {} day(s)",
            form.name, form.symbol, form.supply, form.unlock_days
        ))?;
    }

    let outcome = form.submit(executor).await;
    let message = form.message().unwrap_or_default();

    match settings.format {
        OutputFormat::Json => output.print_json(&logic::outcome_json(&outcome))?,
        OutputFormat::Text if outcome.is_success() => output.print(message)?,
        OutputFormat::Text => output.error(message)?,
    }

    if outcome.is_success() {
        Ok(())
    } else {
        Err(CliError::LaunchFailed)
    }
}
