//! Error types for the launch workflow
//!
//! Every failure kind is collapsed into one generic message for the end user
//! (see [`crate::report`]); the variant and its detail are kept for the
//! operator log.

use thiserror::Error;

use crate::units::UnitsError;

/// Launch workflow error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// No wallet-provider binding is available
    #[error("Wallet provider not found")]
    ProviderUnavailable,

    /// The provider could not expose a signing identity
    #[error("Signer unavailable: {0}")]
    SignerUnavailable(String),

    /// Supply is not a non-negative decimal representable in base units
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Developer wallet is not a valid address
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// The call was rejected at submission or during confirmation
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Confirmation carried no `TokenLaunched` event
    #[error("TokenLaunched event not found in receipt logs")]
    EventNotFound,
}

impl LaunchError {
    /// Stable name of the failure kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::ProviderUnavailable => "ProviderUnavailable",
            LaunchError::SignerUnavailable(_) => "SignerUnavailable",
            LaunchError::InvalidAmount(_) => "InvalidAmount",
            LaunchError::InvalidAddress { .. } => "InvalidAddress",
            LaunchError::SubmissionFailed(_) => "SubmissionFailed",
            LaunchError::EventNotFound => "EventNotFound",
        }
    }
}

impl From<UnitsError> for LaunchError {
    fn from(err: UnitsError) -> Self {
        LaunchError::InvalidAmount(err.to_string())
    }
}

/// Result type alias for launch operations
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;
