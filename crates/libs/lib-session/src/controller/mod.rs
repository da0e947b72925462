//! # Wallet Session Controller
//!
//! Drives the wallet connection and the data shown for the connected account.
//!
//! ## State Machine
//!
//! ```text
//!                connect() / silent reconnect at mount
//!  Disconnected ───────────────────────────────────────▶ Connecting
//!       ▲  ▲                                               │    │
//!       │  └──────── rejected / untrusted / no provider ───┘    │ public key
//!       │                                                       ▼
//!       └──── disconnect() / provider `disconnect` ──── Connected(address)
//!                                                         │    ▲
//!                                                         └────┘
//!                                                  provider `accountChanged`
//! ```
//!
//! A user `connect()` while the startup silent reconnect is still pending
//! replaces it; a second `connect()` while the prompt is open is ignored.
//!
//! ## Refresh Lifecycle
//!
//! Entering `Connected` fetches balance, transactions and price once, then starts
//! two timers (balance, price) owned by [`SessionTimers`]. Leaving `Connected`,
//! including an account change, drops that struct and resets the balance and
//! transaction list in the same mutation.
//!
//! ## Stale Results
//!
//! Every session entry or exit bumps an epoch. Balance and history results carry
//! the epoch and address they were issued for and are discarded if either no
//! longer matches. Within a session, per-kind request sequences drop responses
//! that resolve out of issue order.
//!
//! ## Threading
//!
//! Single-threaded: shared state lives in `Rc<RefCell<_>>`. No borrow is held
//! while calling the observer, the provider or the scheduler's spawned tasks.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::alert::AlertSink;
use crate::config::{SessionConfig, PROVIDER_MISSING_ALERT};
use crate::error::Result;
use crate::provider::{ConnectOptions, EventHandler, ProviderEventKind, WalletProvider};
use crate::sources::{BalanceSource, HistorySource, PriceSource};
use crate::state::{
    BalanceSnapshot, PriceSnapshot, PublicKey, SessionState, SessionView, TransactionSummary,
};
use crate::timer::{Scheduler, TimerHandle};


/// Capabilities injected into the controller.
#[derive(Clone)]
pub struct Services {
    /// Injected wallet, `None` when no extension is installed
    pub provider: Option<Rc<dyn WalletProvider>>,
    pub balances: Rc<dyn BalanceSource>,
    pub prices: Rc<dyn PriceSource>,
    pub history: Rc<dyn HistorySource>,
    pub scheduler: Rc<dyn Scheduler>,
    pub alerts: Rc<dyn AlertSink>,
}

/// Observer notified with a fresh [`SessionView`] after every change.
pub type Observer = Rc<dyn Fn(&SessionView)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectMode {
    /// User clicked "Connect"
    Prompt,
    /// Automatic reconnect, only for an already trusted origin
    Silent,
}

impl ConnectMode {
    fn options(self) -> ConnectOptions {
        match self {
            ConnectMode::Prompt => ConnectOptions::prompt(),
            ConnectMode::Silent => ConnectOptions::silent(),
        }
    }
}

/// Issue/apply counter for one kind of fetch.
#[derive(Debug, Default)]
struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept `seq` if it is newer than the last applied response.
    fn accept(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

/// Recurring timers of one connected session. Dropping cancels both.
#[derive(Debug)]
struct SessionTimers {
    _balance: TimerHandle,
    _price: TimerHandle,
}

struct Inner {
    lifecycle: Lifecycle,
    state: SessionState,
    epoch: u64,
    balance: BalanceSnapshot,
    price: PriceSnapshot,
    transactions: Vec<TransactionSummary>,
    timers: Option<SessionTimers>,
    /// Mode of the attempt in flight, meaningful only while `Connecting`
    connect_mode: ConnectMode,
    balance_seq: RequestSequence,
    price_seq: RequestSequence,
    history_seq: RequestSequence,
}

impl Inner {
    fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Created,
            state: SessionState::Disconnected,
            epoch: 0,
            balance: BalanceSnapshot::default(),
            price: PriceSnapshot::default(),
            transactions: Vec::new(),
            timers: None,
            connect_mode: ConnectMode::Silent,
            balance_seq: RequestSequence::default(),
            price_seq: RequestSequence::default(),
            history_seq: RequestSequence::default(),
        }
    }

    /// Address of the session `epoch`, if it is still the connected one.
    fn session_address(&self, epoch: u64) -> Option<PublicKey> {
        if self.epoch != epoch {
            return None;
        }
        self.state.address().cloned()
    }

    fn awaiting_approval(&self) -> bool {
        self.state == SessionState::Connecting && self.connect_mode == ConnectMode::Prompt
    }

    fn clear_account_data(&mut self) {
        self.timers = None;
        self.balance = BalanceSnapshot::default();
        self.transactions.clear();
    }
}

struct Shared {
    config: SessionConfig,
    services: Services,
    inner: RefCell<Inner>,
    observer: RefCell<Option<Observer>>,
}

/// Wallet session state machine.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct SessionController {
    shared: Rc<Shared>,
}

impl SessionController {
    pub fn new(config: SessionConfig, services: Services) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                services,
                inner: RefCell::new(Inner::new()),
                observer: RefCell::new(None),
            }),
        }
    }

    fn from_weak(weak: &Weak<Shared>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }

    /// Register the observer that receives a [`SessionView`] after every change.
    pub fn set_observer(&self, observer: impl Fn(&SessionView) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Current render snapshot.
    pub fn view(&self) -> SessionView {
        let inner = self.shared.inner.borrow();
        SessionView {
            state: inner.state.clone(),
            balance: inner.balance,
            price: inner.price,
            transactions: inner.transactions.clone(),
            awaiting_approval: inner.awaiting_approval(),
            cluster: self.shared.config.cluster,
        }
    }

    pub fn state(&self) -> SessionState {
        self.shared.inner.borrow().state.clone()
    }

    fn notify(&self) {
        let observer = self.shared.observer.borrow().clone();
        if let Some(observer) = observer {
            let view = self.view();
            observer(&view);
        }
    }

    /// Provider usable for connecting, `None` if absent or not Phantom.
    fn phantom(&self) -> Option<Rc<dyn WalletProvider>> {
        self.shared
            .services
            .provider
            .as_ref()
            .filter(|provider| provider.is_phantom())
            .cloned()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Subscribe to provider events and attempt a silent reconnect.
    ///
    /// Runs once per controller; later calls are ignored.
    pub fn mount(&self) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.lifecycle != Lifecycle::Created {
                warn!("Session controller already mounted, ignoring");
                return;
            }
            inner.lifecycle = Lifecycle::Mounted;
        }

        match self.phantom() {
            Some(provider) => {
                for kind in ProviderEventKind::ALL {
                    provider.on(kind, self.event_handler(kind));
                }
                debug!("Subscribed to provider events");
            }
            None => debug!("No Phantom provider, skipping event subscription"),
        }

        self.begin_connect(ConnectMode::Silent);
    }

    /// Unsubscribe all provider events and stop every timer.
    ///
    /// The controller ignores events and fetch results afterwards.
    pub fn unmount(&self) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.lifecycle != Lifecycle::Mounted {
                warn!("Session controller not mounted, ignoring unmount");
                return;
            }
            inner.lifecycle = Lifecycle::TornDown;
            inner.epoch += 1;
            inner.timers = None;
        }

        if let Some(provider) = self.phantom() {
            for kind in ProviderEventKind::ALL {
                provider.remove_all_listeners(kind);
            }
            debug!("Unsubscribed from provider events");
        }
    }

    fn is_torn_down(&self) -> bool {
        self.shared.inner.borrow().lifecycle == Lifecycle::TornDown
    }

    fn event_handler(&self, kind: ProviderEventKind) -> EventHandler {
        let weak = Rc::downgrade(&self.shared);
        Rc::new(move |payload: Option<String>| {
            if let Some(controller) = Self::from_weak(&weak) {
                controller.handle_event(kind, payload);
            }
        })
    }

    // ------------------------------------------------------------------
    // Connection
    // ------------------------------------------------------------------

    /// User-initiated connect. Alerts once if no wallet is installed.
    pub fn connect(&self) {
        self.begin_connect(ConnectMode::Prompt);
    }

    /// User-initiated disconnect.
    pub fn disconnect(&self) {
        if self.is_torn_down() {
            return;
        }
        if !self.leave_session("user disconnect") {
            return;
        }

        if let Some(provider) = self.phantom() {
            self.shared.services.scheduler.spawn(Box::pin(async move {
                if let Err(e) = provider.disconnect().await {
                    warn!("Wallet disconnect failed: {}", e);
                }
            }));
        }
    }

    fn begin_connect(&self, mode: ConnectMode) {
        let Some(provider) = self.phantom() else {
            match mode {
                ConnectMode::Prompt => {
                    warn!("Connect requested but Phantom is not installed");
                    self.shared.services.alerts.alert(PROVIDER_MISSING_ALERT);
                }
                ConnectMode::Silent => debug!("No Phantom provider, skipping silent reconnect"),
            }
            return;
        };

        let attempt = {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.lifecycle == Lifecycle::TornDown {
                return;
            }
            match (&inner.state, inner.connect_mode, mode) {
                (SessionState::Disconnected, _, _) => {}
                // A user click replaces a silent reconnect that may never settle
                (SessionState::Connecting, ConnectMode::Silent, ConnectMode::Prompt) => {
                    debug!("Prompt connect supersedes pending silent reconnect");
                }
                (state, _, _) => {
                    debug!("Connect ignored, session is {}", state);
                    return;
                }
            }
            inner.epoch += 1;
            inner.state = SessionState::Connecting;
            inner.connect_mode = mode;
            inner.epoch
        };
        self.notify();

        let weak = Rc::downgrade(&self.shared);
        self.shared.services.scheduler.spawn(Box::pin(async move {
            let result = provider.connect(mode.options()).await;
            if let Some(controller) = Self::from_weak(&weak) {
                controller.finish_connect(attempt, mode, result);
            }
        }));
    }

    fn finish_connect(&self, attempt: u64, mode: ConnectMode, result: Result<String>) {
        let result = result.and_then(|key| key.parse::<PublicKey>());

        let still_pending = {
            let inner = self.shared.inner.borrow();
            inner.epoch == attempt && inner.state == SessionState::Connecting
        };

        match result {
            Ok(address) if still_pending => {
                info!("Connected with public key {}", address);
                self.enter_connected(address);
            }
            Ok(address) => {
                debug!("Connect response for {} superseded, ignoring", address);
            }
            Err(e) => {
                match mode {
                    ConnectMode::Prompt => warn!("Error connecting to wallet: {}", e),
                    ConnectMode::Silent => info!("No wallet connected yet: {}", e),
                }
                if still_pending {
                    self.shared.inner.borrow_mut().state = SessionState::Disconnected;
                    self.notify();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Provider events
    // ------------------------------------------------------------------

    /// Dispatch a provider event. Normally called by the registered handlers.
    pub fn handle_event(&self, kind: ProviderEventKind, payload: Option<String>) {
        if self.is_torn_down() {
            debug!("Ignoring provider {} event after unmount", kind);
            return;
        }

        match kind {
            ProviderEventKind::Connect => self.on_provider_connect(payload),
            ProviderEventKind::Disconnect => {
                self.leave_session("provider disconnect");
            }
            ProviderEventKind::AccountChanged => self.on_account_changed(payload),
        }
    }

    fn on_provider_connect(&self, payload: Option<String>) {
        let address = match payload.as_deref().map(str::parse::<PublicKey>) {
            Some(Ok(address)) => address,
            Some(Err(e)) => {
                warn!("Ignoring provider connect event: {}", e);
                return;
            }
            None => {
                debug!("Provider connect event without public key");
                return;
            }
        };

        if self.shared.inner.borrow().state.address() == Some(&address) {
            return;
        }
        info!("Provider connected {}", address);
        self.enter_connected(address);
    }

    fn on_account_changed(&self, payload: Option<String>) {
        if !self.shared.inner.borrow().state.is_connected() {
            debug!("Account change while not connected, ignoring");
            return;
        }

        match payload.as_deref().map(str::parse::<PublicKey>) {
            Some(Ok(address)) => {
                info!("Account changed to {}", address);
                self.enter_connected(address);
            }
            Some(Err(e)) => {
                warn!("Account change with invalid key: {}", e);
                self.leave_session("invalid account change");
            }
            None => {
                // Selected account is not authorised for this origin yet.
                self.leave_session("account change without key");
                self.begin_connect(ConnectMode::Silent);
            }
        }
    }

    // ------------------------------------------------------------------
    // Session entry / exit
    // ------------------------------------------------------------------

    fn enter_connected(&self, address: PublicKey) {
        let epoch = {
            let mut inner = self.shared.inner.borrow_mut();
            inner.clear_account_data();
            inner.epoch += 1;
            inner.state = SessionState::Connected(address);
            let epoch = inner.epoch;
            inner.timers = Some(self.start_timers(epoch));
            epoch
        };
        self.notify();

        self.refresh_balance(epoch);
        self.refresh_transactions(epoch);
        self.refresh_price(epoch);
    }

    /// Returns `false` if there was no session to leave.
    fn leave_session(&self, reason: &str) -> bool {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.state == SessionState::Disconnected && inner.timers.is_none() {
                return false;
            }
            inner.clear_account_data();
            inner.epoch += 1;
            inner.state = SessionState::Disconnected;
        }
        info!("Wallet session ended ({})", reason);
        self.notify();
        true
    }

    fn start_timers(&self, epoch: u64) -> SessionTimers {
        let scheduler = &self.shared.services.scheduler;
        let config = &self.shared.config;

        let weak = Rc::downgrade(&self.shared);
        let balance = scheduler.every(
            config.balance_interval,
            Rc::new(move || {
                if let Some(controller) = Self::from_weak(&weak) {
                    controller.refresh_balance(epoch);
                }
            }),
        );

        let weak = Rc::downgrade(&self.shared);
        let price = scheduler.every(
            config.price_interval,
            Rc::new(move || {
                if let Some(controller) = Self::from_weak(&weak) {
                    controller.refresh_price(epoch);
                }
            }),
        );

        SessionTimers { _balance: balance, _price: price }
    }

    // ------------------------------------------------------------------
    // Fetches
    // ------------------------------------------------------------------

    fn refresh_balance(&self, epoch: u64) {
        let (address, seq) = {
            let mut inner = self.shared.inner.borrow_mut();
            let Some(address) = inner.session_address(epoch) else {
                return;
            };
            (address, inner.balance_seq.issue())
        };

        let balances = Rc::clone(&self.shared.services.balances);
        let weak = Rc::downgrade(&self.shared);
        self.shared.services.scheduler.spawn(Box::pin(async move {
            let result = balances.get_balance(&address).await;
            if let Some(controller) = Self::from_weak(&weak) {
                controller.apply_balance(epoch, &address, seq, result);
            }
        }));
    }

    fn apply_balance(&self, epoch: u64, address: &PublicKey, seq: u64, result: Result<u64>) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.session_address(epoch).as_ref() != Some(address) {
                debug!("Discarding balance for previous session {}", address);
                return;
            }
            match result {
                Ok(lamports) => {
                    if !inner.balance_seq.accept(seq) {
                        debug!("Discarding out-of-order balance response #{}", seq);
                        return;
                    }
                    inner.balance = BalanceSnapshot::new(lamports);
                }
                Err(e) => {
                    warn!("Failed to fetch balance, keeping last value: {}", e);
                    return;
                }
            }
        }
        self.notify();
    }

    fn refresh_price(&self, epoch: u64) {
        let seq = {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.session_address(epoch).is_none() {
                return;
            }
            inner.price_seq.issue()
        };

        let prices = Rc::clone(&self.shared.services.prices);
        let weak = Rc::downgrade(&self.shared);
        self.shared.services.scheduler.spawn(Box::pin(async move {
            let result = prices.get_sol_price().await;
            if let Some(controller) = Self::from_weak(&weak) {
                controller.apply_price(seq, result);
            }
        }));
    }

    fn apply_price(&self, seq: u64, result: Result<f64>) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.lifecycle == Lifecycle::TornDown {
                return;
            }
            match result {
                Ok(price) if price.is_finite() && price >= 0.0 => {
                    if !inner.price_seq.accept(seq) {
                        debug!("Discarding out-of-order price response #{}", seq);
                        return;
                    }
                    inner.price = PriceSnapshot::new(price);
                }
                Ok(price) => {
                    warn!("Ignoring invalid SOL price {}", price);
                    return;
                }
                Err(e) => {
                    warn!("Failed to fetch SOL price, keeping last value: {}", e);
                    return;
                }
            }
        }
        self.notify();
    }

    fn refresh_transactions(&self, epoch: u64) {
        let (address, seq) = {
            let mut inner = self.shared.inner.borrow_mut();
            let Some(address) = inner.session_address(epoch) else {
                return;
            };
            (address, inner.history_seq.issue())
        };

        let history = Rc::clone(&self.shared.services.history);
        let limit = self.shared.config.history_limit;
        let weak = Rc::downgrade(&self.shared);
        self.shared.services.scheduler.spawn(Box::pin(async move {
            let result = history.get_transactions(&address, limit).await;
            if let Some(controller) = Self::from_weak(&weak) {
                controller.apply_transactions(epoch, &address, seq, result);
            }
        }));
    }

    fn apply_transactions(
        &self,
        epoch: u64,
        address: &PublicKey,
        seq: u64,
        result: Result<Vec<TransactionSummary>>,
    ) {
        {
            let mut inner = self.shared.inner.borrow_mut();
            if inner.session_address(epoch).as_ref() != Some(address) {
                debug!("Discarding transactions for previous session {}", address);
                return;
            }
            if !inner.history_seq.accept(seq) {
                debug!("Discarding out-of-order history response #{}", seq);
                return;
            }
            inner.transactions = match result {
                Ok(transactions) => {
                    let mut seen = HashSet::new();
                    transactions
                        .into_iter()
                        .filter(|tx| seen.insert(tx.tx_hash.clone()))
                        .take(self.shared.config.history_limit)
                        .collect()
                }
                Err(e) => {
                    warn!("Failed to fetch transactions: {}", e);
                    Vec::new()
                }
            };
        }
        self.notify();
    }
}
