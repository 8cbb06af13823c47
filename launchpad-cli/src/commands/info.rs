//! Info command: the fixed factory binding

use lib_launchpad::contract::{create_token_signature, token_launched_signature};
use lib_launchpad::units::NATIVE_DECIMALS;
use lib_launchpad::{
    format_units, FACTORY_ADDRESS, LAUNCH_FEE_WEI, MIN_UNLOCK_DAYS, SUPPLY_DECIMALS,
};
use serde_json::{json, Value};

use crate::error::CliResult;
use crate::logic::{OutputFormat, Settings};
use crate::output::Output;

/// Build the factory description
pub fn factory_info() -> Value {
    json!({
        "factory": FACTORY_ADDRESS,
        "function": create_token_signature(),
        "event": token_launched_signature(),
        "fee": format_units(LAUNCH_FEE_WEI, NATIVE_DECIMALS),
        "fee_wei": LAUNCH_FEE_WEI.to_string(),
        "supply_decimals": SUPPLY_DECIMALS,
        "min_unlock_days": MIN_UNLOCK_DAYS,
    })
}

/// Handle info command
pub fn handle_info_command(settings: &Settings) -> CliResult<()> {
    let output = crate::output::ConsoleOutput;
    handle_info_command_with_output(settings, &output)
}

/// Handle info command with injected output (for testing)
pub fn handle_info_command_with_output<O: Output>(settings: &Settings, output: &O) -> CliResult<()> {
    let info = factory_info();

    if settings.format == OutputFormat::Json {
        return output.print_json(&info);
    }

    output.header("Token Factory")?;
    output.print(&format!("Address:         {}", FACTORY_ADDRESS))?;
    output.print(&format!("Function:        {}", create_token_signature()))?;
    output.print(&format!("Event:           {}", token_launched_signature()))?;
    output.print(&format!(
        "Launch fee:      {} (native currency)",
        format_units(LAUNCH_FEE_WEI, NATIVE_DECIMALS)
    ))?;
    output.print(&format!("Supply decimals: {}", SUPPLY_DECIMALS))?;
    output.print(&format!("Minimum lock:    {} days (advisory)", MIN_UNLOCK_DAYS))?;
    match &settings.wallet_rpc {
        Some(url) => output.info(&format!("Wallet endpoint: {}", url))?,
        None => output.warning("No wallet endpoint configured")?,
    }
    Ok(())
}
