//! Root component: owns the wallet connection and derives which backend
//! deployment every panel talks to.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DepositPanel, Navbar, StatsPanel, WithdrawPanel};
use crate::services::wallet::{hasEthereum, restore_session};
use crate::state::config::provide_config_context;
use crate::state::wallet::{provide_wallet_context, use_wallet_context};

#[component]
pub fn App() -> impl IntoView {
    let config = provide_config_context();
    let wallet = provide_wallet_context();

    // Pick up an already-authorized account, then follow wallet-side changes
    spawn_local(async move {
        if !hasEthereum() {
            log::warn!("No injected Ethereum provider found");
            return;
        }
        match restore_session().await {
            Ok(connection) => wallet.apply(connection),
            Err(e) => log::warn!("Could not restore wallet session: {}", e),
        }
        wallet.listen_for_changes();
    });

    // Chain 1 -> main deployment, any other chain -> alternate
    let base_url = Memo::new(move |_| {
        let chain_id = wallet.chain_id.get();
        config.with_value(|config| config.base_url(chain_id))
    });
    let network = Memo::new(move |_| {
        let chain_id = wallet.chain_id.get();
        config.with_value(|config| config.deployment(chain_id).network_label())
    });

    Effect::new(move |_| log::info!("Using backend {}", base_url.get()));

    view! {
        <Navbar network=network/>
        <main class="app-container">
            <Show when=move || wallet.is_connected() fallback=|| view! { <ConnectPrompt/> }>
                <StatsPanel base_url=base_url/>
                <div class="panels">
                    <DepositPanel base_url=base_url/>
                    <WithdrawPanel base_url=base_url/>
                </div>
            </Show>
        </main>
    }
}

#[component]
fn ConnectPrompt() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="card">
            <h2>"Connect a wallet"</h2>
            <p>"Connect an Ethereum wallet to deposit stablecoins into the vault or withdraw them."</p>
            {move || wallet.error().map(|error| view! { <p class="status error">{error}</p> })}
        </div>
    }
}
