//! Token Launch Workflow Library
//!
//! Submits a `createToken` call to the token factory through a wallet
//! provider and turns the confirmation into a user-facing message.
//!
//! # Components
//!
//! - **Input Collector** ([`LaunchForm`]): the five launch fields and the
//!   in-progress flag that gates re-submission
//! - **Launch Executor** ([`LaunchExecutor`]): provider check, exact supply
//!   scaling, signer acquisition, submission, confirmation and
//!   `TokenLaunched` extraction
//! - **Result Reporter** ([`report`]): success/failure rendering
//!
//! The wallet capability is injected as a [`WalletProvider`];
//! [`JsonRpcWallet`] is the HTTP JSON-RPC implementation.
//!
//! # Example
//!
//! ```ignore
//! use lib_launchpad::{JsonRpcWallet, LaunchExecutor, LaunchForm};
//! use std::sync::Arc;
//!
//! let wallet = Arc::new(JsonRpcWallet::new("http://127.0.0.1:1248"));
//! let executor = LaunchExecutor::new(Some(wallet));
//!
//! let mut form = LaunchForm::new();
//! form.name = "Meme".into();
//! form.symbol = "MEME".into();
//! form.supply = "1000000".into();
//! form.dev_wallet = "0x...".into();
//!
//! form.submit(&executor).await;
//! println!("{}", form.message().unwrap_or_default());
//! ```

pub mod clock;
pub mod contract;
pub mod error;
pub mod executor;
pub mod form;
pub mod provider;
pub mod report;
pub mod request;
pub mod rpc;
pub mod units;

// Re-exports for convenience
pub use clock::{Clock, SystemClock};
pub use contract::{FACTORY_ADDRESS, TokenLaunched};
pub use error::{LaunchError, LaunchResult};
pub use executor::LaunchExecutor;
pub use form::{LaunchForm, ProgressFlag};
pub use provider::{
    PendingTransaction, ProviderError, Signer, TransactionReceipt, TransactionRequest,
    WalletProvider,
};
pub use report::{render, FAILURE_MESSAGE};
pub use request::{
    unlock_timestamp, LaunchOutcome, LaunchReceipt, LaunchRequest, DEFAULT_UNLOCK_DAYS,
    MIN_UNLOCK_DAYS, SECONDS_PER_DAY,
};
pub use rpc::JsonRpcWallet;
pub use units::{format_units, parse_units, UnitsError, LAUNCH_FEE_WEI, SUPPLY_DECIMALS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
