//! # Data Transfer Objects (DTOs)
//!
//! Response shapes of the three external boundaries the wallet front-end reads.
//!
//! ## Module Organization
//!
//! - [`price`] - `GET /simple/price?ids=solana&vs_currencies=usd`
//! - [`history`] - `GET /account/transactions?account=<address>&limit=<n>`
//! - [`rpc`] - Solana JSON-RPC `getBalance`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST https://api.devnet.solana.com
//! Content-Type: application/json
//!
//! {"jsonrpc":"2.0","id":1,"method":"getBalance","params":["So11111111111111111111111111111111111111112"]}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {"jsonrpc":"2.0","result":{"context":{"slot":1},"value":2500000000},"id":1}
//! ```

pub mod history;
pub mod price;
pub mod rpc;

pub use history::*;
pub use price::*;
pub use rpc::*;
