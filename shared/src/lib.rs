//! # Shared Wire Types and Formatting
//!
//! This library defines the response shapes of the external HTTP boundaries the
//! wallet front-end talks to, and the display formatting used by the session
//! render model.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the external APIs
//!   - **[`dto::price`]**: CoinGecko simple price response
//!   - **[`dto::history`]**: Transaction history records
//!   - **[`dto::rpc`]**: Solana JSON-RPC `getBalance` request/response
//! - **[`utils`]**: Display formatting
//!   - **[`utils::format_lamports_to_sol`]**: Lamports as SOL with 4 decimals
//!   - **[`utils::format_usd`]**: Dollar amounts with comma separators
//!   - **[`utils::truncate_hash`]**: Signature prefix with ellipsis
//!   - **[`utils::format_address`]**: Address prefix/suffix with ellipsis
//!
//! ## Wire Format
//!
//! The external APIs are not ours, so field names follow whatever each API sends
//! (`txHash`, `blockTime`, `jsonrpc`) via `#[serde(rename)]`. Unknown fields are
//! ignored on decode.
//!
//! ## Usage in Frontend
//!
//! ```rust,no_run
//! use shared::dto::price::SimplePriceResponse;
//! use shared::utils::format_usd;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let body = r#"{"solana":{"usd":142.37}}"#;
//! let response: SimplePriceResponse = serde_json::from_str(body)?;
//! let display = response.sol_usd().map(format_usd);
//! assert_eq!(display.as_deref(), Some("$142.37"));
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
