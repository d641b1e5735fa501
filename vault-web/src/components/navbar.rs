//! Navigation bar: network, account, connect button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::truncate_address;

use crate::services::wallet::{connect_wallet, WalletState};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar(#[prop(into)] network: Signal<&'static str>) -> impl IntoView {
    let wallet = use_wallet_context();

    let connect = move |_| {
        wallet.set_connecting();
        spawn_local(async move {
            match connect_wallet().await {
                Ok(connection) => {
                    log::info!("Wallet connected: {:?}", connection.address);
                    wallet.apply(connection);
                }
                Err(e) => {
                    log::warn!("Wallet connection failed: {}", e);
                    wallet.set_error(e.to_string());
                }
            }
        });
    };
    let connecting = move || wallet.wallet.with(|state| matches!(state, WalletState::Connecting));

    view! {
        <nav>
            <span class="nav-title">"Stablecoin Vault"</span>
            <div>
                <span class="network">{move || network.get()}</span>
                {move || match wallet.address() {
                    Some(address) => view! {
                        <span class="address" title=address.clone()>{truncate_address(&address)}</span>
                    }
                    .into_any(),
                    None => view! {
                        <button class="btn" on:click=connect disabled=connecting>
                            {move || if connecting() { "Connecting..." } else { "Connect Wallet" }}
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
