//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use lib_session::{
    Cluster, Services, SessionConfig, SessionController, SessionView, WalletProvider,
};

use crate::services::{
    BrowserAlerts, BrowserScheduler, CoinGeckoPrices, HistoryClient, PhantomWallet, RpcConnection,
};
use crate::utils::constants::{HISTORY_API, NETWORK, PRICE_API};

/// Global wallet context
///
/// `session` mirrors the controller's render model; the controller itself is
/// `!Send`, so it lives in local storage.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<SessionView>,
    controller: StoredValue<SessionController, LocalStorage>,
}

impl WalletContext {
    pub fn is_connected(&self) -> bool {
        self.session.with(|view| view.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.session.with(|view| view.is_connecting())
    }

    /// User clicked "Connect" and the wallet prompt is open.
    pub fn awaiting_approval(&self) -> bool {
        self.session.with(|view| view.awaiting_approval)
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|view| view.address().map(|key| key.to_string()))
    }

    pub fn connect(&self) {
        self.controller.with_value(|controller| controller.connect());
    }

    pub fn disconnect(&self) {
        self.controller.with_value(|controller| controller.disconnect());
    }
}

fn session_config() -> SessionConfig {
    let cluster = NETWORK.parse::<Cluster>().unwrap_or_else(|e| {
        log::warn!("{}, falling back to {}", e, Cluster::default());
        Cluster::default()
    });

    SessionConfig::default()
        .cluster(cluster)
        .price_endpoint(PRICE_API)
        .history_endpoint(HISTORY_API)
}

fn browser_services(config: &SessionConfig) -> Services {
    let provider = PhantomWallet::detect().map(|wallet| Rc::new(wallet) as Rc<dyn WalletProvider>);
    if provider.is_none() {
        log::info!("No wallet provider injected");
    }

    Services {
        provider,
        balances: Rc::new(RpcConnection::new(config.cluster)),
        prices: Rc::new(CoinGeckoPrices::new(config)),
        history: Rc::new(HistoryClient::new(config)),
        scheduler: Rc::new(BrowserScheduler),
        alerts: Rc::new(BrowserAlerts),
    }
}

/// Create the session controller, mount it and provide the context.
///
/// The controller is unmounted when the owning reactive scope is cleaned up.
pub fn provide_wallet_context() -> WalletContext {
    let config = session_config();
    let services = browser_services(&config);
    let controller = SessionController::new(config, services);

    let session = RwSignal::new(controller.view());
    controller.set_observer(move |view| {
        let _ = session.try_set(view.clone());
    });
    controller.mount();

    let context = WalletContext {
        session,
        controller: StoredValue::new_local(controller),
    };

    on_cleanup(move || {
        let _ = context.controller.try_with_value(|controller| controller.unmount());
    });

    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
