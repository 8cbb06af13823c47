//! JSON-RPC wallet tests
//!
//! Runs `JsonRpcWallet` against a local HTTP endpoint that answers each
//! request with the next canned reply and records what it was sent.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolEvent;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use lib_launchpad::{
    JsonRpcWallet, LaunchError, LaunchExecutor, LaunchRequest, ProviderError, TokenLaunched,
    WalletProvider, FACTORY_ADDRESS, LAUNCH_FEE_WEI,
};

type Reply = (u16, String);

struct RpcStub {
    url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl RpcStub {
    async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let replies = Arc::new(Mutex::new(VecDeque::from(replies)));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (queue, seen) = (Arc::clone(&replies), Arc::clone(&requests));
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve_connection(stream, Arc::clone(&queue), Arc::clone(&seen)));
            }
        });

        Self { url, requests }
    }

    fn wallet(&self) -> JsonRpcWallet {
        JsonRpcWallet::new(self.url.clone()).with_poll_interval(Duration::from_millis(10))
    }

    fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r["method"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<Value>>>,
) {
    while let Some(request) = read_request(&mut stream).await {
        requests.lock().unwrap().push(request);
        let reply = { replies.lock().unwrap().pop_front() };
        let Some((status, body)) = reply else {
            return;
        };

        let head = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
            status,
            body.len()
        );
        if stream.write_all(head.as_bytes()).await.is_err()
            || stream.write_all(body.as_bytes()).await.is_err()
        {
            return;
        }
    }
}

/// Read one HTTP request and return its JSON body; `None` on EOF.
async fn read_request(stream: &mut TcpStream) -> Option<Value> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    serde_json::from_slice(&buf[body_start..body_start + length]).ok()
}

fn result(value: Value) -> Reply {
    (200, json!({ "jsonrpc": "2.0", "id": 1, "result": value }).to_string())
}

fn rpc_error(status: u16, code: i64, message: &str) -> Reply {
    (
        status,
        json!({ "jsonrpc": "2.0", "id": 1, "error": { "code": code, "message": message } })
            .to_string(),
    )
}

fn account() -> Address {
    Address::repeat_byte(0xc1)
}

fn tx_hash() -> String {
    format!("0x{}", "77".repeat(32))
}

fn receipt_with_event() -> Value {
    let event = TokenLaunched {
        creator: account(),
        token: Address::repeat_byte(0x70),
        pair: Address::repeat_byte(0x9a),
    }
    .encode_log_data();

    json!({
        "transactionHash": tx_hash(),
        "blockNumber": "0x2a",
        "status": "0x1",
        "logs": [{
            "address": FACTORY_ADDRESS,
            "topics": event.topics(),
            "data": event.data,
        }]
    })
}

fn request() -> LaunchRequest {
    LaunchRequest {
        name: "Moon Dog".to_string(),
        symbol: "MDOG".to_string(),
        supply: "1000".to_string(),
        dev_wallet: "0x00000000000000000000000000000000000000d3".to_string(),
        unlock_days: 30,
    }
}

fn executor(stub: &RpcStub) -> LaunchExecutor {
    LaunchExecutor::new(Some(Arc::new(stub.wallet()) as Arc<dyn WalletProvider>))
}

#[tokio::test]
async fn test_launch_over_json_rpc_polls_until_receipt() {
    let stub = RpcStub::start(vec![
        result(json!([account()])),
        result(json!(tx_hash())),
        result(Value::Null),
        result(Value::Null),
        result(receipt_with_event()),
    ])
    .await;

    let receipt = executor(&stub).try_launch(&request()).await.unwrap();

    assert_eq!(receipt.creator, account());
    assert_eq!(receipt.token, Address::repeat_byte(0x70));
    assert_eq!(receipt.pair, Address::repeat_byte(0x9a));
    assert_eq!(
        stub.methods(),
        vec![
            "eth_requestAccounts",
            "eth_sendTransaction",
            "eth_getTransactionReceipt",
            "eth_getTransactionReceipt",
            "eth_getTransactionReceipt",
        ]
    );

    let sent = &stub.requests()[1]["params"][0];
    let to: Address = serde_json::from_value(sent["to"].clone()).unwrap();
    let from: Address = serde_json::from_value(sent["from"].clone()).unwrap();
    let value: U256 = serde_json::from_value(sent["value"].clone()).unwrap();
    assert_eq!(to, FACTORY_ADDRESS);
    assert_eq!(from, account());
    assert_eq!(value, LAUNCH_FEE_WEI);
}

#[tokio::test]
async fn test_empty_account_list_is_no_accounts() {
    let stub = RpcStub::start(vec![result(json!([]))]).await;

    match stub.wallet().signer().await {
        Err(ProviderError::NoAccounts) => {}
        Err(other) => panic!("expected NoAccounts, got {other}"),
        Ok(_) => panic!("expected NoAccounts, got a signer"),
    }

    let stub = RpcStub::start(vec![result(json!([]))]).await;
    let err = executor(&stub).try_launch(&request()).await.unwrap_err();
    assert!(matches!(err, LaunchError::SignerUnavailable(ref m) if m.contains("no accounts")));
    assert_eq!(stub.methods(), vec!["eth_requestAccounts"]);
}

#[tokio::test]
async fn test_http_failure_while_polling_is_terminal() {
    let stub = RpcStub::start(vec![
        result(json!([account()])),
        result(json!(tx_hash())),
        result(Value::Null),
        (500, "upstream unavailable".to_string()),
        result(receipt_with_event()),
    ])
    .await;

    let err = executor(&stub).try_launch(&request()).await.unwrap_err();

    assert!(matches!(err, LaunchError::SubmissionFailed(ref m) if m.contains("500")));
    assert_eq!(stub.methods().len(), 4);
}

#[tokio::test]
async fn test_rejection_in_http_error_body() {
    let stub = RpcStub::start(vec![rpc_error(403, 4001, "User rejected the request.")]).await;

    match stub.wallet().signer().await {
        Err(ProviderError::Rejected(message)) => {
            assert_eq!(message, "User rejected the request.")
        }
        Err(other) => panic!("expected Rejected, got {other}"),
        Ok(_) => panic!("expected Rejected, got a signer"),
    }
}

#[tokio::test]
async fn test_rpc_error_on_send_is_submission_failure() {
    let stub = RpcStub::start(vec![
        result(json!([account()])),
        rpc_error(200, -32000, "insufficient funds for gas * price + value"),
    ])
    .await;

    let err = executor(&stub).try_launch(&request()).await.unwrap_err();

    assert!(matches!(err, LaunchError::SubmissionFailed(ref m) if m.contains("insufficient funds")));
    assert_eq!(stub.methods(), vec!["eth_requestAccounts", "eth_sendTransaction"]);
}
