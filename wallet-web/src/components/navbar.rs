//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let status = move || match wallet_ctx.address() {
        Some(address) => shared::utils::truncate_address(&address),
        None if wallet_ctx.is_connecting() => "Connecting...".to_string(),
        None => "Not connected".to_string(),
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="xf-red">"XF"</span><span class="terminal-white">"Wallet"</span>
                    </span>
                </A>
                <span class="nav-status" style="font-family: monospace; opacity: 0.8;">
                    {status}
                </span>
            </div>
        </nav>
    }
}
