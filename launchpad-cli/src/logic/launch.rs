//! Pure launch command logic
//!
//! Fills the form from command-line values and config defaults, and shapes
//! outcomes for JSON output.

use lib_launchpad::{report, LaunchForm, LaunchOutcome, DEFAULT_UNLOCK_DAYS, MIN_UNLOCK_DAYS};
use serde_json::{json, Value};

use crate::error::{CliError, CliResult};
use crate::logic::config::Settings;

/// Fill a [`LaunchForm`].
///
/// Developer wallet and lock days fall back to the config defaults; lock
/// days then fall back to the form default.
pub fn build_form(
    name: &str,
    symbol: &str,
    supply: &str,
    dev_wallet: Option<&str>,
    unlock_days: Option<u64>,
    settings: &Settings,
) -> CliResult<LaunchForm> {
    let dev_wallet = dev_wallet
        .map(str::to_string)
        .or_else(|| settings.dev_wallet.clone())
        .ok_or_else(|| {
            CliError::MissingInput(
                "developer wallet: pass --dev-wallet or set defaults.dev_wallet".to_string(),
            )
        })?;

    let mut form = LaunchForm::new();
    form.name = name.to_string();
    form.symbol = symbol.to_string();
    form.supply = supply.to_string();
    form.dev_wallet = dev_wallet;
    form.unlock_days = unlock_days
        .or(settings.unlock_days)
        .unwrap_or(DEFAULT_UNLOCK_DAYS);
    Ok(form)
}

/// Warning text for a lock below the advertised minimum. Advisory only.
pub fn lock_advisory(unlock_days: u64) -> Option<String> {
    (unlock_days < MIN_UNLOCK_DAYS).then(|| {
        format!(
            "Lock of {} day(s) is below the {}-day minimum; the factory may reject it",
            unlock_days, MIN_UNLOCK_DAYS
        )
    })
}

/// JSON shape of an outcome. Failure detail is never included.
pub fn outcome_json(outcome: &LaunchOutcome) -> Value {
    match outcome {
        LaunchOutcome::Success(receipt) => json!({
            "status": "success",
            "creator": receipt.creator,
            "token": receipt.token,
            "pair": receipt.pair,
            "message": report::render(outcome),
        }),
        LaunchOutcome::Failure(_) => json!({
            "status": "failure",
            "message": report::render(outcome),
        }),
    }
}
