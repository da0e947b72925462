//! Wallet Page - connect button, or account details once connected

use leptos::prelude::*;

use crate::components::{TransactionList, WalletSummary};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::PHANTOM_INSTALL_URL;

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let network = Memo::new(move |_| wallet_ctx.session.with(|view| view.cluster.name()));
    let connected = Memo::new(move |_| wallet_ctx.is_connected());
    let awaiting_approval = Memo::new(move |_| wallet_ctx.awaiting_approval());

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: flex-start; min-height: calc(100vh - 60px); padding-top: 48px;">
            <div class="card" style="max-width: 560px; width: 100%;">
                <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                    "Phantom Wallet"
                </h1>
                <p class="subtitle">
                    {move || format!("Network: {}", network.get())}
                </p>

                <Show
                    when=move || connected.get()
                    fallback=move || view! {
                        <div>
                            <div class="info">
                                <p style="text-align: center; font-size: 0.9em;">
                                    "Don't have Phantom? "
                                    <a href=PHANTOM_INSTALL_URL target="_blank" rel="noopener noreferrer">
                                        "Install it"
                                    </a>
                                </p>
                            </div>
                            <button
                                class="wallet-button"
                                style="width: 100%;"
                                disabled=move || awaiting_approval.get()
                                on:click=move |_| wallet_ctx.connect()
                            >
                                <span style="font-weight: 600; flex: 1; text-align: center;">
                                    {move || if awaiting_approval.get() {
                                        "Connecting..."
                                    } else {
                                        "Connect Phantom Wallet"
                                    }}
                                </span>
                            </button>
                        </div>
                    }
                >
                    <div>
                        <WalletSummary/>
                        <TransactionList/>
                        <button
                            class="btn btn-secondary"
                            style="width: 100%; margin-top: 24px;"
                            on:click=move |_| wallet_ctx.disconnect()
                        >
                            "Disconnect"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
