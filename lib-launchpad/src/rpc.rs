//! JSON-RPC wallet binding
//!
//! Speaks the EIP-1193 request set over HTTP to a wallet endpoint (a wallet
//! exposing an RPC port, or a development node with unlocked accounts):
//! `eth_requestAccounts`, `eth_sendTransaction`, `eth_getTransactionReceipt`.

use alloy_primitives::{Address, Bytes, Log, LogData, B256, U64};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::provider::{
    PendingTransaction, ProviderError, Signer, TransactionReceipt, TransactionRequest,
    WalletProvider,
};

/// Receipt polling interval when none is configured
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// EIP-1193 "user rejected request"
const USER_REJECTED_CODE: i64 = 4001;

/// Wallet provider backed by a JSON-RPC endpoint
#[derive(Clone)]
pub struct JsonRpcWallet {
    client: Arc<RpcClient>,
    poll_interval: Duration,
}

struct RpcClient {
    url: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: B256,
    #[serde(default)]
    block_number: Option<U64>,
    #[serde(default)]
    status: Option<U64>,
    #[serde(default)]
    logs: Vec<RpcLog>,
}

#[derive(Debug, Deserialize)]
struct RpcLog {
    address: Address,
    topics: Vec<B256>,
    data: Bytes,
}

impl JsonRpcWallet {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(RpcClient {
                url: url.into(),
                http: reqwest::Client::new(),
                next_id: AtomicU64::new(1),
            }),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn url(&self) -> &str {
        &self.client.url
    }
}

impl RpcClient {
    async fn request<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        trace!(method, id, "rpc request");

        let response = self.http.post(&self.url).json(&body).send().await?;
        let status_error = response.error_for_status_ref().err();
        let raw = response.bytes().await?;

        // Some wallets answer a rejection with 4xx plus a JSON-RPC error body
        match (serde_json::from_slice::<RpcResponse>(&raw), status_error) {
            (Ok(response), None) => decode_response(response),
            (Ok(response), Some(_)) if response.error.is_some() => decode_response(response),
            (_, Some(err)) => Err(err.into()),
            (Err(err), None) => Err(err.into()),
        }
    }
}

fn decode_response<R: DeserializeOwned>(response: RpcResponse) -> Result<R, ProviderError> {
    if let Some(err) = response.error {
        return Err(rpc_error(err.code, err.message));
    }
    Ok(serde_json::from_value(response.result.unwrap_or(Value::Null))?)
}

fn rpc_error(code: i64, message: String) -> ProviderError {
    if code == USER_REJECTED_CODE {
        ProviderError::Rejected(message)
    } else {
        ProviderError::Rpc { code, message }
    }
}

impl RpcReceipt {
    fn into_receipt(self) -> Result<TransactionReceipt, ProviderError> {
        let logs = self
            .logs
            .into_iter()
            .map(|log| {
                LogData::new(log.topics, log.data)
                    .map(|data| Log {
                        address: log.address,
                        data,
                    })
                    .ok_or_else(|| {
                        ProviderError::InvalidResponse("log carries more than 4 topics".to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TransactionReceipt {
            transaction_hash: self.transaction_hash,
            block_number: self.block_number.map(|n| n.to::<u64>()),
            // pre-Byzantium receipts carry no status; treat them as executed
            status: self.status.map_or(true, |s| !s.is_zero()),
            logs,
        })
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn signer(&self) -> Result<Box<dyn Signer>, ProviderError> {
        let accounts: Vec<Address> = self
            .client
            .request("eth_requestAccounts", json!([]))
            .await?;
        let address = accounts.first().copied().ok_or(ProviderError::NoAccounts)?;
        debug!(%address, "wallet exposed signer");

        Ok(Box::new(RpcSigner {
            client: Arc::clone(&self.client),
            address,
            poll_interval: self.poll_interval,
        }))
    }
}

struct RpcSigner {
    client: Arc<RpcClient>,
    address: Address,
    poll_interval: Duration,
}

#[async_trait]
impl Signer for RpcSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<Box<dyn PendingTransaction>, ProviderError> {
        let hash: B256 = self
            .client
            .request("eth_sendTransaction", json!([tx]))
            .await?;

        Ok(Box::new(RpcPendingTransaction {
            client: Arc::clone(&self.client),
            hash,
            poll_interval: self.poll_interval,
        }))
    }
}

struct RpcPendingTransaction {
    client: Arc<RpcClient>,
    hash: B256,
    poll_interval: Duration,
}

#[async_trait]
impl PendingTransaction for RpcPendingTransaction {
    fn tx_hash(&self) -> B256 {
        self.hash
    }

    async fn wait(&self) -> Result<TransactionReceipt, ProviderError> {
        loop {
            let receipt: Option<RpcReceipt> = self
                .client
                .request("eth_getTransactionReceipt", json!([self.hash]))
                .await?;

            if let Some(receipt) = receipt {
                return receipt.into_receipt();
            }

            trace!(hash = %self.hash, "receipt not available yet");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
