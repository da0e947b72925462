//! # Session Error Types
//!
//! Error handling for the wallet session controller and its capabilities.
//!
//! Every error is terminal to the single operation that raised it. The controller
//! logs it and moves on; nothing here ever reaches the rendering surface as a panic.
//!
//! ## Error Categories
//!
//! - **Provider**: wallet extension missing, connection rejected, bad public key
//! - **Network**: HTTP transport failures and non-success status codes
//! - **Decode**: unexpected response bodies
//! - **Rpc**: JSON-RPC error objects returned by the Solana node
//!
//! ## Usage Pattern
//!
//! ```rust
//! use lib_session::error::{Result, SessionError};
//!
//! fn require_price(price: Option<f64>) -> Result<f64> {
//!     price.ok_or_else(|| SessionError::Decode("price missing from response".to_string()))
//! }
//!
//! assert!(require_price(None).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, SessionError>`.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Error type for wallet session operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// No Phantom provider is injected into the page.
    #[error("Phantom wallet provider not found")]
    ProviderMissing,

    /// The provider rejected or failed the request.
    ///
    /// Covers user rejection of the connect prompt and the expected failure of a
    /// silent reconnect when the origin is not trusted yet.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider returned something that is not a valid Solana public key.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// HTTP transport failure or non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// JSON-RPC error object returned by the Solana node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::ProviderMissing.to_string(),
            "Phantom wallet provider not found"
        );
        assert_eq!(
            SessionError::Provider("User rejected the request.".to_string()).to_string(),
            "Provider error: User rejected the request."
        );
        assert_eq!(
            SessionError::Rpc { code: -32602, message: "Invalid param".to_string() }.to_string(),
            "RPC error -32602: Invalid param"
        );
    }
}
