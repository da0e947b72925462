//! # Data Sources
//!
//! The three external fetches that feed a connected session. Each one is
//! independently fallible; the controller decides what a failure means for
//! the displayed value.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::{PublicKey, TransactionSummary};

/// Account balance lookup (Solana JSON-RPC `getBalance`).
#[async_trait(?Send)]
pub trait BalanceSource {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &PublicKey) -> Result<u64>;
}

/// SOL/USD price feed.
#[async_trait(?Send)]
pub trait PriceSource {
    /// Current price of one SOL in USD.
    async fn get_sol_price(&self) -> Result<f64>;
}

/// Recent transaction history.
#[async_trait(?Send)]
pub trait HistorySource {
    /// Up to `limit` most recent transactions touching `address`.
    async fn get_transactions(
        &self,
        address: &PublicKey,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>>;
}
