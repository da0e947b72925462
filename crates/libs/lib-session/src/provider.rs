//! # Wallet Provider Capability
//!
//! The browser-injected wallet (Phantom) as seen by the session controller.
//!
//! The controller never reaches for `window.solana` itself. It is handed an
//! `Option<Rc<dyn WalletProvider>>` at construction, which lets tests substitute
//! a fake and lets the browser build pass `None` when no extension is installed.
//!
//! ## Events
//!
//! Phantom emits three events the controller cares about:
//!
//! | Event            | Payload                         |
//! |------------------|---------------------------------|
//! | `connect`        | public key of the connected account |
//! | `disconnect`     | none                            |
//! | `accountChanged` | new public key, or `null` when the selected account is not authorised for this origin |
//!
//! Handlers receive the payload as `Option<String>` (base58).

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Callback registered for a provider event.
pub type EventHandler = Rc<dyn Fn(Option<String>)>;

/// Provider events the controller subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEventKind {
    Connect,
    Disconnect,
    AccountChanged,
}

impl ProviderEventKind {
    /// All subscribed events, in subscription order.
    pub const ALL: [ProviderEventKind; 3] = [
        ProviderEventKind::Connect,
        ProviderEventKind::Disconnect,
        ProviderEventKind::AccountChanged,
    ];

    /// Event name as used by the provider's `on` / `removeAllListeners`.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderEventKind::Connect => "connect",
            ProviderEventKind::Disconnect => "disconnect",
            ProviderEventKind::AccountChanged => "accountChanged",
        }
    }
}

impl fmt::Display for ProviderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options passed to the provider's `connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    /// Only succeed if the origin is already trusted; never show a prompt.
    pub only_if_trusted: bool,
}

impl ConnectOptions {
    /// Interactive connect, may prompt the user.
    pub fn prompt() -> Self {
        Self { only_if_trusted: false }
    }

    /// Silent reconnect, succeeds only for a previously authorised origin.
    pub fn silent() -> Self {
        Self { only_if_trusted: true }
    }
}

/// Browser wallet capability set consumed by the controller.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `true` when the injected object identifies as Phantom.
    fn is_phantom(&self) -> bool;

    /// Request a connection. Resolves to the base58 public key.
    async fn connect(&self, options: ConnectOptions) -> Result<String>;

    /// Disconnect this origin from the wallet.
    async fn disconnect(&self) -> Result<()>;

    /// Register `handler` for `event`.
    fn on(&self, event: ProviderEventKind, handler: EventHandler);

    /// Remove every handler registered for `event`.
    fn remove_all_listeners(&self, event: ProviderEventKind);
}
