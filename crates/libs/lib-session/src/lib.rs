//! # Wallet Session Library
//!
//! The wallet-session state machine behind the Phantom wallet front-end.
//!
//! ## Structure
//!
//! - **[`controller`]**: [`SessionController`], the `Disconnected → Connecting → Connected`
//!   state machine and its balance/price/history refresh lifecycle
//! - **[`state`]**: Session state, snapshots and the [`SessionView`] render model
//! - **[`provider`]**: The injected browser wallet capability ([`WalletProvider`])
//! - **[`sources`]**: Balance, price and transaction history data sources
//! - **[`timer`]**: Scoped recurring timers and task spawning ([`Scheduler`])
//! - **[`alert`]**: User-visible alerts ([`AlertSink`])
//! - **[`config`]**: Endpoints, polling intervals and the Solana [`Cluster`]
//! - **[`error`]**: [`SessionError`] and the crate [`Result`] alias
//!
//! Everything here is platform-agnostic and single-threaded: the browser adapters
//! live in `wallet-web`, and the controller can be driven by fakes in native tests.

pub mod alert;
pub mod config;
pub mod controller;
pub mod error;
pub mod provider;
pub mod sources;
pub mod state;
pub mod timer;

pub use alert::AlertSink;
pub use config::{Cluster, SessionConfig};
pub use controller::{Services, SessionController};
pub use error::{Result, SessionError};
pub use provider::{ConnectOptions, EventHandler, ProviderEventKind, WalletProvider};
pub use sources::{BalanceSource, HistorySource, PriceSource};
pub use state::{
    BalanceSnapshot, PriceSnapshot, PublicKey, SessionState, SessionView, TransactionSummary,
};
pub use timer::{Scheduler, TimerHandle};
