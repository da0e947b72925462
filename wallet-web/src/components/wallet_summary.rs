//! Address, balance and price of the connected account

use leptos::prelude::*;
use shared::utils::format_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletSummary() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let session = wallet_ctx.session;

    let address = move || wallet_ctx.address().unwrap_or_default();
    let short_address = move || format_address(&address(), 6, 6);
    let balance = move || session.with(|view| view.balance_display());
    let price = move || session.with(|view| view.price_display());

    view! {
        <div class="success">
            <p style="text-align: center; font-weight: bold; margin-bottom: 8px;">
                "Wallet Connected"
            </p>
            <div class="wallet-address" title=address>
                {short_address}
            </div>
        </div>
        <div class="info" style="display: flex; justify-content: space-between; gap: 16px;">
            <div>
                <p style="font-size: 0.8em; opacity: 0.8;">"Balance"</p>
                <p style="font-size: 1.4em; font-weight: 700;">{balance}</p>
            </div>
            <div style="text-align: right;">
                <p style="font-size: 0.8em; opacity: 0.8;">"SOL Price"</p>
                <p style="font-size: 1.4em; font-weight: 700;">{price}</p>
            </div>
        </div>
    }
}
