//! Result Reporter: one user-facing string per outcome

use crate::request::LaunchOutcome;

/// Shown for every failure kind
pub const FAILURE_MESSAGE: &str = "❌ Failed to launch token.";

/// Render an outcome for the end user.
pub fn render(outcome: &LaunchOutcome) -> String {
    match outcome {
        LaunchOutcome::Success(receipt) => format!(
            "✅ Token Launched!\nToken: {}\nPair: {}",
            receipt.token, receipt.pair
        ),
        LaunchOutcome::Failure(_) => FAILURE_MESSAGE.to_string(),
    }
}

/// Label of the launch trigger
pub fn button_label(in_progress: bool) -> &'static str {
    if in_progress {
        "Launching..."
    } else {
        "Launch Token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use crate::request::LaunchReceipt;
    use alloy_primitives::Address;

    #[test]
    fn test_render_success() {
        let receipt = LaunchReceipt {
            creator: Address::repeat_byte(0x01),
            token: Address::repeat_byte(0xab),
            pair: Address::repeat_byte(0xcd),
        };
        let message = render(&LaunchOutcome::Success(receipt));
        assert_eq!(
            message,
            format!(
                "✅ Token Launched!\nToken: {}\nPair: {}",
                Address::repeat_byte(0xab).to_checksum(None),
                Address::repeat_byte(0xcd).to_checksum(None)
            )
        );
    }

    #[test]
    fn test_render_failure_hides_detail() {
        for err in [
            LaunchError::ProviderUnavailable,
            LaunchError::SubmissionFailed("execution reverted: fee".to_string()),
            LaunchError::EventNotFound,
        ] {
            let message = render(&LaunchOutcome::Failure(err));
            assert_eq!(message, FAILURE_MESSAGE);
            assert!(!message.contains("reverted"));
        }
    }

    #[test]
    fn test_button_label() {
        assert_eq!(button_label(true), "Launching...");
        assert_eq!(button_label(false), "Launch Token");
    }
}
