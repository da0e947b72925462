//! Recent transactions of the connected account

use leptos::prelude::*;
use lib_session::TransactionSummary;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn TransactionList() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let session = wallet_ctx.session;

    let transactions = move || session.with(|view| view.transactions.clone());
    let is_empty = move || session.with(|view| view.transactions.is_empty());

    view! {
        <div style="margin-top: 24px;">
            <h2 style="color: #ffffff; font-size: 18px; margin-bottom: 12px; font-weight: 600;">
                "Recent Transactions"
            </h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="subtitle">"No recent transactions"</p> }
            >
                <ul style="list-style: none; padding: 0; margin: 0;">
                    <For
                        each=transactions
                        key=|tx: &TransactionSummary| tx.tx_hash.clone()
                        children=move |tx: TransactionSummary| {
                            let cluster = session.with_untracked(|view| view.cluster);
                            view! {
                                <li style="display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid rgba(255, 255, 255, 0.1);">
                                    <a
                                        href=tx.explorer_url(cluster)
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        style="font-family: monospace;"
                                    >
                                        {tx.short_hash()}
                                    </a>
                                    <span style="font-size: 0.85em; opacity: 0.8;">
                                        {tx.block_time_display()}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
