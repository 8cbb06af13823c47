//! Wallet-provider binding
//!
//! The workflow never reaches for an ambient wallet; the capability to sign
//! and submit transactions is handed to [`crate::LaunchExecutor`] as a
//! [`WalletProvider`]. [`crate::rpc::JsonRpcWallet`] is the production
//! implementation, tests substitute their own.

use alloy_primitives::{Address, Bytes, Log, B256, U256};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by a wallet provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The user declined the request in the wallet
    #[error("Request rejected by user: {0}")]
    Rejected(String),

    /// The wallet exposed no accounts
    #[error("Wallet exposed no accounts")]
    NoAccounts,

    /// JSON-RPC error object returned by the wallet or node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// HTTP transport failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Transaction handed to the signer (`eth_sendTransaction` object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// Confirmation of an included transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    /// `false` when execution reverted
    pub status: bool,
    pub logs: Vec<Log>,
}

/// Environment capability that yields a signing identity
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request a signer. May suspend on user approval in the wallet.
    async fn signer(&self) -> Result<Box<dyn Signer>, ProviderError>;
}

/// Signing identity able to submit transactions
#[async_trait]
pub trait Signer: Send + Sync {
    fn address(&self) -> Address;

    /// Sign and broadcast, returning a handle to the pending transaction
    async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<Box<dyn PendingTransaction>, ProviderError>;
}

/// Handle to a broadcast transaction
#[async_trait]
pub trait PendingTransaction: Send + Sync {
    fn tx_hash(&self) -> B256;

    /// Suspend until the transaction is included in a block
    async fn wait(&self) -> Result<TransactionReceipt, ProviderError>;
}
