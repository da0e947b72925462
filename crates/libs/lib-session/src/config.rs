//! # Session Configuration
//!
//! Static endpoints, polling intervals and the Solana cluster the session reads from.
//! There are no environment variables or config files: the browser build bakes these
//! in, and [`SessionConfig::default`] matches what the front-end ships with.
//!
//! ```rust
//! use lib_session::config::{Cluster, SessionConfig};
//! use std::time::Duration;
//!
//! let config = SessionConfig::default()
//!     .cluster(Cluster::Mainnet)
//!     .balance_interval(Duration::from_secs(15));
//!
//! assert_eq!(config.cluster.rpc_url(), "https://api.mainnet-beta.solana.com");
//! assert_eq!(config.history_limit, 5);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::SessionError;

/// Default CoinGecko simple price endpoint.
pub const DEFAULT_PRICE_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Default transaction history endpoint.
pub const DEFAULT_HISTORY_ENDPOINT: &str = "https://public-api.solscan.io/account/transactions";

/// Balance refresh period while connected.
pub const BALANCE_REFRESH: Duration = Duration::from_secs(10);

/// Price refresh period while connected.
pub const PRICE_REFRESH: Duration = Duration::from_secs(30);

/// Number of recent transactions shown.
pub const HISTORY_PAGE_SIZE: usize = 5;

/// Alert shown when the user clicks "Connect" without the extension installed.
pub const PROVIDER_MISSING_ALERT: &str =
    "Phantom wallet not found! Install it from https://phantom.app";

/// Solana cluster selection.
///
/// Determines the JSON-RPC endpoint used for balance queries and the
/// `cluster` query parameter on explorer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    /// Solana mainnet-beta (production network)
    Mainnet,
    /// Solana devnet (test network)
    #[default]
    Devnet,
    /// Solana testnet (validator test network)
    Testnet,
}

impl Cluster {
    /// Public JSON-RPC endpoint for this cluster.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
        }
    }

    /// Cluster name as used by the explorer and `@solana/web3.js`.
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        }
    }

    /// Explorer link for a transaction signature on this cluster.
    pub fn explorer_tx_url(&self, signature: &str) -> String {
        match self {
            Cluster::Mainnet => format!("https://explorer.solana.com/tx/{}", signature),
            other => format!(
                "https://explorer.solana.com/tx/{}?cluster={}",
                signature,
                other.name()
            ),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cluster {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(SessionError::Decode(format!("unknown cluster: {}", other))),
        }
    }
}

/// Configuration for a [`SessionController`](crate::SessionController).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Cluster used for balance queries and explorer links
    pub cluster: Cluster,
    /// Base URL of the SOL/USD price endpoint
    pub price_endpoint: String,
    /// Base URL of the transaction history endpoint
    pub history_endpoint: String,
    /// How often the balance is refreshed while connected
    pub balance_interval: Duration,
    /// How often the price is refreshed while connected
    pub price_interval: Duration,
    /// Maximum number of transactions kept in the summary
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            price_endpoint: DEFAULT_PRICE_ENDPOINT.to_string(),
            history_endpoint: DEFAULT_HISTORY_ENDPOINT.to_string(),
            balance_interval: BALANCE_REFRESH,
            price_interval: PRICE_REFRESH,
            history_limit: HISTORY_PAGE_SIZE,
        }
    }
}

impl SessionConfig {
    /// Set the Solana cluster.
    pub fn cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    /// Set the price endpoint base URL.
    pub fn price_endpoint(mut self, url: impl Into<String>) -> Self {
        self.price_endpoint = url.into();
        self
    }

    /// Set the transaction history endpoint base URL.
    pub fn history_endpoint(mut self, url: impl Into<String>) -> Self {
        self.history_endpoint = url.into();
        self
    }

    /// Set the balance refresh period.
    pub fn balance_interval(mut self, period: Duration) -> Self {
        self.balance_interval = period;
        self
    }

    /// Set the price refresh period.
    pub fn price_interval(mut self, period: Duration) -> Self {
        self.price_interval = period;
        self
    }

    /// Set the transaction page size.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Full price query URL (`?ids=solana&vs_currencies=usd`).
    pub fn price_url(&self) -> String {
        format!("{}?ids=solana&vs_currencies=usd", self.price_endpoint)
    }
}
