//! Token factory contract binding
//!
//! The factory is pre-deployed at a fixed address with a fixed interface;
//! neither is configurable at runtime.

use alloy_primitives::{address, Address, Bytes, Log, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};
use std::str::FromStr;

use crate::error::{LaunchError, LaunchResult};
use crate::request::LaunchReceipt;

sol! {
    interface ITokenFactory {
        function createToken(
            string name,
            string symbol,
            uint256 supply,
            address devWallet,
            uint256 unlockTimestamp
        ) external payable returns (address);

        event TokenLaunched(address indexed creator, address token, address pair);
    }
}

pub use ITokenFactory::{createTokenCall, TokenLaunched};

/// Deployed token factory
pub const FACTORY_ADDRESS: Address = address!("30fbd01c741e136f5dd73e20a50fee8c34cfbd21");

/// Canonical signature of the launch function
pub fn create_token_signature() -> &'static str {
    createTokenCall::SIGNATURE
}

/// Canonical signature of the launch event
pub fn token_launched_signature() -> &'static str {
    TokenLaunched::SIGNATURE
}

/// ABI-encode a `createToken` call.
pub fn encode_create_token(
    name: &str,
    symbol: &str,
    supply: U256,
    dev_wallet: Address,
    unlock_timestamp: U256,
) -> Bytes {
    let call = createTokenCall {
        name: name.to_string(),
        symbol: symbol.to_string(),
        supply,
        devWallet: dev_wallet,
        unlockTimestamp: unlock_timestamp,
    };
    let calldata = call.abi_encode();
    tracing::debug!(
        selector = %hex::encode(createTokenCall::SELECTOR),
        len = calldata.len(),
        "encoded createToken call"
    );
    calldata.into()
}

/// Find the first `TokenLaunched` event among receipt logs.
///
/// Logs with another topic0, or that fail to decode against the event
/// layout, are skipped.
pub fn find_token_launched(logs: &[Log]) -> Option<LaunchReceipt> {
    logs.iter()
        .filter(|log| log.data.topics().first() == Some(&TokenLaunched::SIGNATURE_HASH))
        .find_map(|log| match TokenLaunched::decode_log_data(&log.data, true) {
            Ok(event) => Some(LaunchReceipt {
                creator: event.creator,
                token: event.token,
                pair: event.pair,
            }),
            Err(e) => {
                tracing::debug!(emitter = %log.address, "skipping undecodable TokenLaunched log: {}", e);
                None
            }
        })
}

/// Parse a wallet address typed by the user.
///
/// The `0x` prefix is optional. All-lowercase or all-uppercase hex is taken
/// as is; mixed case must be a valid EIP-55 checksum.
pub fn parse_address(text: &str) -> LaunchResult<Address> {
    let invalid = |reason: String| LaunchError::InvalidAddress {
        input: text.to_string(),
        reason,
    };

    let address = Address::from_str(text).map_err(|e| invalid(e.to_string()))?;

    let hex_part = text.strip_prefix("0x").unwrap_or(text);
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let checksummed = address.to_checksum(None);
        if checksummed.trim_start_matches("0x") != hex_part {
            return Err(invalid("bad EIP-55 checksum".to_string()));
        }
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn launched_log(emitter: Address, creator: u8, token: u8, pair: u8) -> Log {
        let event = TokenLaunched {
            creator: Address::repeat_byte(creator),
            token: Address::repeat_byte(token),
            pair: Address::repeat_byte(pair),
        };
        Log {
            address: emitter,
            data: event.encode_log_data(),
        }
    }

    #[test]
    fn test_signatures() {
        assert_eq!(
            create_token_signature(),
            "createToken(string,string,uint256,address,uint256)"
        );
        assert_eq!(token_launched_signature(), "TokenLaunched(address,address,address)");
    }

    #[test]
    fn test_encode_create_token_layout() {
        let data = encode_create_token(
            "Meme",
            "MEME",
            U256::from(1u8),
            Address::repeat_byte(0xaa),
            U256::from(42u8),
        );
        assert_eq!(&data[..4], &createTokenCall::SELECTOR[..]);

        let decoded = createTokenCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded.name, "Meme");
        assert_eq!(decoded.symbol, "MEME");
        assert_eq!(decoded.supply, U256::from(1u8));
        assert_eq!(decoded.devWallet, Address::repeat_byte(0xaa));
        assert_eq!(decoded.unlockTimestamp, U256::from(42u8));
    }

    #[test]
    fn test_find_token_launched() {
        let logs = vec![launched_log(FACTORY_ADDRESS, 1, 2, 3)];
        let receipt = find_token_launched(&logs).unwrap();
        assert_eq!(receipt.creator, Address::repeat_byte(1));
        assert_eq!(receipt.token, Address::repeat_byte(2));
        assert_eq!(receipt.pair, Address::repeat_byte(3));
    }

    #[test]
    fn test_find_skips_unrelated_logs() {
        let unrelated = Log::new(
            Address::repeat_byte(9),
            vec![B256::repeat_byte(7)],
            Bytes::from(vec![0u8; 64]),
        )
        .unwrap();
        let logs = vec![unrelated, launched_log(FACTORY_ADDRESS, 4, 5, 6)];
        let receipt = find_token_launched(&logs).unwrap();
        assert_eq!(receipt.token, Address::repeat_byte(5));
    }

    #[test]
    fn test_find_skips_truncated_event() {
        // right topic0, but creator topic and data are missing
        let truncated = Log::new(
            FACTORY_ADDRESS,
            vec![TokenLaunched::SIGNATURE_HASH],
            Bytes::new(),
        )
        .unwrap();
        assert!(find_token_launched(&[truncated]).is_none());
    }

    #[test]
    fn test_first_launch_event_wins() {
        let logs = vec![
            launched_log(FACTORY_ADDRESS, 1, 2, 3),
            launched_log(FACTORY_ADDRESS, 7, 8, 9),
        ];
        let receipt = find_token_launched(&logs).unwrap();
        assert_eq!(receipt.creator, Address::repeat_byte(1));
        assert_eq!(receipt.token, Address::repeat_byte(2));
        assert_eq!(receipt.pair, Address::repeat_byte(3));
    }

    #[test]
    fn test_find_none_when_empty() {
        assert!(find_token_launched(&[]).is_none());
    }

    #[test]
    fn test_parse_address_forms() {
        let lower = "0x30fbd01c741e136f5dd73e20a50fee8c34cfbd21";
        assert_eq!(parse_address(lower).unwrap(), FACTORY_ADDRESS);
        assert_eq!(parse_address(&lower[2..]).unwrap(), FACTORY_ADDRESS);

        let checksummed = FACTORY_ADDRESS.to_checksum(None);
        assert_eq!(parse_address(&checksummed).unwrap(), FACTORY_ADDRESS);
    }

    #[test]
    fn test_parse_address_rejects_bad_input() {
        assert!(matches!(parse_address(""), Err(LaunchError::InvalidAddress { .. })));
        assert!(matches!(parse_address("0x1234"), Err(LaunchError::InvalidAddress { .. })));
        assert!(matches!(parse_address("not-an-address"), Err(LaunchError::InvalidAddress { .. })));
    }

    #[test]
    fn test_parse_address_rejects_bad_checksum() {
        let checksummed = FACTORY_ADDRESS.to_checksum(None);
        // flip the case of the first letter after the prefix
        let mut chars: Vec<char> = checksummed.chars().collect();
        let idx = chars
            .iter()
            .skip(2)
            .position(|c| c.is_ascii_alphabetic())
            .unwrap()
            + 2;
        chars[idx] = if chars[idx].is_ascii_lowercase() {
            chars[idx].to_ascii_uppercase()
        } else {
            chars[idx].to_ascii_lowercase()
        };
        let tampered: String = chars.into_iter().collect();
        assert!(matches!(
            parse_address(&tampered),
            Err(LaunchError::InvalidAddress { .. })
        ));
    }
}
