//! Phantom Wallet Integration via wasm-bindgen
//!
//! Binds the provider object Phantom injects into the page and adapts it to
//! [`lib_session::WalletProvider`].
//!
//! Phantom exposes itself as `window.phantom.solana` and, for older
//! integrations, as `window.solana`. Public keys come back as `PublicKey`
//! objects; they are converted to base58 strings on the JS side.

use std::cell::RefCell;

use async_trait::async_trait;
use lib_session::{
    ConnectOptions, EventHandler, ProviderEventKind, Result, SessionError, WalletProvider,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function phantomProvider() {
    if (window.phantom && window.phantom.solana) {
        return window.phantom.solana;
    }
    return window.solana || null;
}

export function keyToString(value) {
    if (value === null || value === undefined) {
        return null;
    }
    const key = value.publicKey !== undefined ? value.publicKey : value;
    if (key === null || key === undefined) {
        return null;
    }
    return typeof key === 'string' ? key : key.toString();
}

export function errorMessage(error) {
    if (error && error.message) {
        return error.message;
    }
    return String(error);
}
")]
extern "C" {
    #[wasm_bindgen(js_name = phantomProvider)]
    fn phantom_provider() -> Option<PhantomProvider>;

    #[wasm_bindgen(js_name = keyToString)]
    fn key_to_string(value: &JsValue) -> Option<String>;

    #[wasm_bindgen(js_name = errorMessage)]
    fn error_message(error: &JsValue) -> String;
}

#[wasm_bindgen]
extern "C" {
    /// The injected provider object.
    pub type PhantomProvider;

    #[wasm_bindgen(method, getter, js_name = isPhantom)]
    fn is_phantom(this: &PhantomProvider) -> Option<bool>;

    #[wasm_bindgen(method, catch, js_name = connect)]
    async fn connect_js(this: &PhantomProvider, options: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = disconnect)]
    async fn disconnect_js(this: &PhantomProvider) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = on)]
    fn on_js(this: &PhantomProvider, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeAllListeners)]
    fn remove_all_listeners_js(this: &PhantomProvider, event: &str);
}

/// Rust-side handle to the injected provider.
///
/// Owns the closures handed to `provider.on(...)`; they are dropped when the
/// listeners for their event are removed.
pub struct PhantomWallet {
    provider: PhantomProvider,
    listeners: RefCell<Vec<(ProviderEventKind, Closure<dyn FnMut(JsValue)>)>>,
}

impl PhantomWallet {
    /// Look up the injected provider. `None` when no wallet extension is installed.
    pub fn detect() -> Option<Self> {
        let provider = phantom_provider()?;
        log::debug!(
            "Wallet provider detected (isPhantom = {})",
            provider.is_phantom().unwrap_or(false)
        );
        Some(Self {
            provider,
            listeners: RefCell::new(Vec::new()),
        })
    }
}

fn provider_error(error: JsValue) -> SessionError {
    SessionError::Provider(error_message(&error))
}

#[async_trait(?Send)]
impl WalletProvider for PhantomWallet {
    fn is_phantom(&self) -> bool {
        self.provider.is_phantom().unwrap_or(false)
    }

    async fn connect(&self, options: ConnectOptions) -> Result<String> {
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| SessionError::Provider(e.to_string()))?;
        let response = self.provider.connect_js(options).await.map_err(provider_error)?;
        key_to_string(&response)
            .ok_or_else(|| SessionError::Provider("connect returned no public key".to_string()))
    }

    async fn disconnect(&self) -> Result<()> {
        self.provider.disconnect_js().await.map_err(provider_error)?;
        Ok(())
    }

    fn on(&self, event: ProviderEventKind, handler: EventHandler) {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            handler(key_to_string(&payload));
        });
        self.provider.on_js(event.name(), closure.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push((event, closure));
    }

    fn remove_all_listeners(&self, event: ProviderEventKind) {
        self.provider.remove_all_listeners_js(event.name());
        self.listeners.borrow_mut().retain(|(kind, _)| *kind != event);
    }
}
