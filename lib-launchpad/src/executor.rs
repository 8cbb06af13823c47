//! Launch Executor
//!
//! Runs one sequential call chain per invocation:
//! provider check -> input conversion -> signer -> submission -> confirmation
//! -> event extraction. Nothing is retried and nothing is cancelled; every
//! failure ends the invocation and is reported through [`LaunchOutcome`].

use std::sync::Arc;
use tracing::{error, info};

use crate::clock::{Clock, SystemClock};
use crate::contract::{self, FACTORY_ADDRESS};
use crate::error::{LaunchError, LaunchResult};
use crate::provider::{TransactionRequest, WalletProvider};
use crate::request::{unlock_timestamp, LaunchOutcome, LaunchReceipt, LaunchRequest};
use crate::units::{parse_units, LAUNCH_FEE_WEI, SUPPLY_DECIMALS};

/// Orchestrates the wallet/contract interaction for a launch
pub struct LaunchExecutor {
    provider: Option<Arc<dyn WalletProvider>>,
    clock: Arc<dyn Clock>,
}

impl LaunchExecutor {
    /// `None` models an environment without a wallet binding.
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Run the workflow and collapse the result into an outcome.
    ///
    /// The failure kind and detail go to the operator log only.
    pub async fn launch(&self, request: &LaunchRequest) -> LaunchOutcome {
        let result = self.try_launch(request).await;
        if let Err(err) = &result {
            error!(
                kind = err.kind(),
                name = %request.name,
                symbol = %request.symbol,
                "token launch failed: {}",
                err
            );
        }
        result.into()
    }

    /// Run the workflow, keeping the specific error.
    pub async fn try_launch(&self, request: &LaunchRequest) -> LaunchResult<LaunchReceipt> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(LaunchError::ProviderUnavailable)?;

        // Inputs are converted before the wallet is touched
        let supply = parse_units(&request.supply, SUPPLY_DECIMALS)?;
        let dev_wallet = contract::parse_address(&request.dev_wallet)?;

        let signer = provider
            .signer()
            .await
            .map_err(|e| LaunchError::SignerUnavailable(e.to_string()))?;

        // Read the clock only now: signer approval may have taken a while
        let unlock = unlock_timestamp(self.clock.unix_now(), request.unlock_days);

        let tx = TransactionRequest {
            from: signer.address(),
            to: FACTORY_ADDRESS,
            data: contract::encode_create_token(
                &request.name,
                &request.symbol,
                supply,
                dev_wallet,
                unlock,
            ),
            value: LAUNCH_FEE_WEI,
        };

        let pending = signer
            .send_transaction(tx)
            .await
            .map_err(|e| LaunchError::SubmissionFailed(e.to_string()))?;
        info!(hash = %pending.tx_hash(), from = %signer.address(), "createToken submitted");

        let receipt = pending
            .wait()
            .await
            .map_err(|e| LaunchError::SubmissionFailed(e.to_string()))?;
        if !receipt.status {
            return Err(LaunchError::SubmissionFailed(format!(
                "transaction {} reverted",
                receipt.transaction_hash
            )));
        }
        info!(
            hash = %receipt.transaction_hash,
            block = ?receipt.block_number,
            logs = receipt.logs.len(),
            "createToken confirmed"
        );

        contract::find_token_launched(&receipt.logs).ok_or(LaunchError::EventNotFound)
    }
}
