//! Browser adapters for the session controller

pub mod browser;
pub mod feeds;
pub mod phantom;

pub use browser::{BrowserAlerts, BrowserScheduler};
pub use feeds::{CoinGeckoPrices, HistoryClient, RpcConnection};
pub use phantom::PhantomWallet;
