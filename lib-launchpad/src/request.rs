//! Launch data model
//!
//! A [`LaunchRequest`] is built from user input, consumed by one executor
//! invocation and then dropped. Nothing here is persisted.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// Seconds in one lock day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Minimum lock period shown to the user. Advisory only, never enforced here.
pub const MIN_UNLOCK_DAYS: u64 = 10;

/// Lock period a fresh form starts with
pub const DEFAULT_UNLOCK_DAYS: u64 = 10;

/// Parameters for one token launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub name: String,
    pub symbol: String,
    /// Human-readable decimal supply, scaled by 18 decimals at submission
    pub supply: String,
    /// Developer wallet address as typed
    pub dev_wallet: String,
    pub unlock_days: u64,
}

/// Addresses recovered from the `TokenLaunched` event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchReceipt {
    pub creator: Address,
    pub token: Address,
    pub pair: Address,
}

/// Terminal state of one launch invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success(LaunchReceipt),
    Failure(LaunchError),
}

impl LaunchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success(_))
    }

    pub fn receipt(&self) -> Option<&LaunchReceipt> {
        match self {
            LaunchOutcome::Success(receipt) => Some(receipt),
            LaunchOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LaunchError> {
        match self {
            LaunchOutcome::Success(_) => None,
            LaunchOutcome::Failure(err) => Some(err),
        }
    }
}

impl From<Result<LaunchReceipt, LaunchError>> for LaunchOutcome {
    fn from(result: Result<LaunchReceipt, LaunchError>) -> Self {
        match result {
            Ok(receipt) => LaunchOutcome::Success(receipt),
            Err(err) => LaunchOutcome::Failure(err),
        }
    }
}

/// Absolute unlock time: `now + days * 86400`, computed in 256 bits so any
/// `u64` day count is representable.
pub fn unlock_timestamp(now_secs: u64, unlock_days: u64) -> U256 {
    U256::from(now_secs) + U256::from(unlock_days) * U256::from(SECONDS_PER_DAY)
}
