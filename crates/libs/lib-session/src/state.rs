//! Session state, data snapshots and the render model handed to the UI.

use std::fmt;
use std::str::FromStr;

use shared::utils::{format_block_time, format_lamports_to_sol, format_usd, truncate_hash};

use crate::config::Cluster;
use crate::error::SessionError;

/// Base58-encoded Solana account address.
///
/// Parsing checks that the string decodes to exactly 32 bytes, so a
/// `Connected` session always carries a well-formed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PublicKey {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = bs58::decode(trimmed)
            .into_vec()
            .map_err(|e| SessionError::InvalidAddress(format!("{}: {}", trimmed, e)))?;

        if bytes.len() != 32 {
            return Err(SessionError::InvalidAddress(format!(
                "{}: expected 32 bytes, got {}",
                trimmed,
                bytes.len()
            )));
        }

        Ok(PublicKey(trimmed.to_string()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wallet connection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connecting,
    Connected(PublicKey),
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected(_))
    }

    pub fn address(&self) -> Option<&PublicKey> {
        match self {
            SessionState::Connected(address) => Some(address),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Disconnected => f.write_str("disconnected"),
            SessionState::Connecting => f.write_str("connecting"),
            SessionState::Connected(address) => write!(f, "connected({})", address),
        }
    }
}

/// Last known SOL balance of the connected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceSnapshot {
    pub lamports: u64,
}

impl BalanceSnapshot {
    pub fn new(lamports: u64) -> Self {
        Self { lamports }
    }

    /// Balance in SOL with four decimals, e.g. `2.5000`.
    pub fn display(&self) -> String {
        format_lamports_to_sol(self.lamports)
    }
}

/// Last known SOL/USD price. `None` until the first successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceSnapshot {
    pub usd_per_sol: Option<f64>,
}

impl PriceSnapshot {
    pub fn new(usd_per_sol: f64) -> Self {
        Self { usd_per_sol: Some(usd_per_sol) }
    }

    /// Price formatted as dollars, e.g. `$142.37`.
    pub fn display(&self) -> Option<String> {
        self.usd_per_sol.map(format_usd)
    }
}

/// One entry of the recent transaction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub tx_hash: String,
    /// Unix seconds; `None` while the node has not assigned a block time
    pub block_time: Option<i64>,
}

impl TransactionSummary {
    pub fn new(tx_hash: impl Into<String>, block_time: Option<i64>) -> Self {
        Self { tx_hash: tx_hash.into(), block_time }
    }

    /// First 8 characters of the signature followed by `...`.
    pub fn short_hash(&self) -> String {
        truncate_hash(&self.tx_hash, 8)
    }

    pub fn explorer_url(&self, cluster: Cluster) -> String {
        cluster.explorer_tx_url(&self.tx_hash)
    }

    pub fn block_time_display(&self) -> String {
        self.block_time
            .and_then(format_block_time)
            .unwrap_or_else(|| "pending".to_string())
    }
}

impl From<shared::dto::TransactionRecord> for TransactionSummary {
    fn from(record: shared::dto::TransactionRecord) -> Self {
        Self {
            tx_hash: record.tx_hash,
            block_time: record.block_time,
        }
    }
}

/// Immutable snapshot of everything the UI renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionView {
    pub state: SessionState,
    pub balance: BalanceSnapshot,
    pub price: PriceSnapshot,
    pub transactions: Vec<TransactionSummary>,
    /// A user-initiated connect is waiting for the wallet prompt
    pub awaiting_approval: bool,
    pub cluster: Cluster,
}

impl SessionView {
    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self.state, SessionState::Connecting)
    }

    pub fn address(&self) -> Option<&PublicKey> {
        self.state.address()
    }

    /// `"2.5000 SOL"`
    pub fn balance_display(&self) -> String {
        format!("{} SOL", self.balance.display())
    }

    /// `"$142.37"`, or `"Loading..."` before the first price arrives
    pub fn price_display(&self) -> String {
        self.price.display().unwrap_or_else(|| "Loading...".to_string())
    }
}
