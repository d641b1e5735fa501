//! Deposit and withdraw panels.
//!
//! Both run the same [`TransferFlow`]; they differ only in [`Direction`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::service::VaultApi;
use lib_core::{Amount, Direction, RequestSequencer, Result, TransferFlow};
use shared::dto::vault::Stablecoin;

use crate::components::StablecoinSelector;
use crate::services::api::GlooVaultApi;
use crate::services::wallet::Eip1193Wallet;
use crate::state::config::use_config;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_slippage;

/// Outcome of the last button press.
#[derive(Debug, Clone, PartialEq)]
enum PanelStatus {
    Pending(&'static str),
    Submitted { action: &'static str, hash: String },
    Failed { action: &'static str, error: String },
}

impl PanelStatus {
    fn from_outcome(action: &'static str, outcome: Result<String>) -> Self {
        match outcome {
            Ok(hash) => PanelStatus::Submitted { action, hash },
            Err(e) => {
                log::warn!("{} failed: {}", action, e);
                PanelStatus::Failed {
                    action,
                    error: e.to_string(),
                }
            }
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PanelStatus::Pending(_) => "status",
            PanelStatus::Submitted { .. } => "status ok",
            PanelStatus::Failed { .. } => "status error",
        }
    }

    fn message(&self) -> String {
        match self {
            PanelStatus::Pending(message) => message.to_string(),
            PanelStatus::Submitted { action, hash } => format!("{} sent: {}", action, hash),
            PanelStatus::Failed { action, error } => format!("{} failed: {}", action, error),
        }
    }
}

#[component]
pub fn DepositPanel(#[prop(into)] base_url: Signal<String>) -> impl IntoView {
    view! { <TransferPanel direction=Direction::Deposit base_url=base_url/> }
}

#[component]
pub fn WithdrawPanel(#[prop(into)] base_url: Signal<String>) -> impl IntoView {
    view! { <TransferPanel direction=Direction::Withdraw base_url=base_url/> }
}

#[component]
fn TransferPanel(direction: Direction, #[prop(into)] base_url: Signal<String>) -> impl IntoView {
    let wallet = use_wallet_context();
    let config = use_config();

    let (coins, set_coins) = signal(Vec::<Stablecoin>::new());
    let (selected, set_selected) = signal(None::<Stablecoin>);
    let (amount_text, set_amount_text) = signal(String::new());
    let amount = Memo::new(move |_| Amount::parse(&amount_text.get()));
    let (slippage, set_slippage) = signal(0.0_f64);
    let (status, set_status) = signal(None::<PanelStatus>);

    // Supported coins for the current deployment
    let catalog_requests = RequestSequencer::new();
    Effect::new(move |_| {
        let url = base_url.get();
        let ticket = catalog_requests.issue();
        let sequencer = catalog_requests.clone();
        spawn_local(async move {
            match GlooVaultApi::new(url).supported_stablecoins().await {
                Ok(list) => {
                    if let Some(list) = sequencer.accept(ticket, list) {
                        log::debug!("{} panel: {} supported stablecoins", direction.title(), list.len());
                        set_coins.set(list);
                    }
                }
                Err(e) => log::warn!("Failed to fetch supported stablecoins: {}", e),
            }
        });
    });

    // Slippage estimate; only the most recently issued quote is displayed
    let slippage_requests = RequestSequencer::new();
    Effect::new(move |_| {
        let amount = amount.get();
        let url = base_url.get();
        let owner = wallet.address();
        let Some(coin) = selected.get() else {
            return;
        };

        let ticket = slippage_requests.issue();
        let sequencer = slippage_requests.clone();
        let config = config.get_value();
        spawn_local(async move {
            let api = GlooVaultApi::new(url);
            let flow = TransferFlow::new(&api, &Eip1193Wallet, &config, direction);
            if let Some(value) = flow
                .quote_latest(&sequencer, ticket, &amount, &coin, owner.as_deref())
                .await
            {
                set_slippage.set(value);
            }
        });
    });

    let on_approve = move |_| {
        let Some(coin) = selected.get_untracked() else {
            return;
        };
        let amount = amount.get_untracked();
        let connection = wallet.connection_untracked();
        let url = base_url.get_untracked();
        let config = config.get_value();

        set_status.set(Some(PanelStatus::Pending("Waiting for wallet approval...")));
        spawn_local(async move {
            let api = GlooVaultApi::new(url);
            let flow = TransferFlow::new(&api, &Eip1193Wallet, &config, direction);
            let outcome = flow.approve(&amount, &coin, &connection).await;
            set_status.set(Some(PanelStatus::from_outcome("Approval", outcome)));
        });
    };

    let on_submit = move |_| {
        let Some(coin) = selected.get_untracked() else {
            return;
        };
        let amount = amount.get_untracked();
        let connection = wallet.connection_untracked();
        let url = base_url.get_untracked();
        let config = config.get_value();

        set_status.set(Some(PanelStatus::Pending("Building transaction...")));
        spawn_local(async move {
            let api = GlooVaultApi::new(url);
            let flow = TransferFlow::new(&api, &Eip1193Wallet, &config, direction);
            let outcome = flow.execute(&amount, &coin, &connection).await;
            set_status.set(Some(PanelStatus::from_outcome(direction.title(), outcome)));
        });
    };

    // Gate on the scaled amount: "0.0000009" is non-zero but not a whole USDC unit
    let transferable = move || {
        selected.with(|coin| {
            coin.as_ref()
                .is_some_and(|c| amount.with(|a| a.is_transferable(c.decimals)))
        })
    };
    let disabled = move || !transferable() || !wallet.is_connected();
    let precision_hint = move || {
        selected.with(|coin| {
            coin.as_ref()
                .filter(|c| amount.with(|a| !a.is_zero() && a.to_base_units(c.decimals).is_err()))
                .map(|c| format!("{} supports at most {} decimal places", c.symbol, c.decimals))
        })
    };
    let symbol = move || selected.with(|coin| coin.as_ref().map(|c| c.symbol.clone()).unwrap_or_default());

    view! {
        <div class="card">
            <h2>{direction.title()}</h2>
            <StablecoinSelector
                supported=coins
                selected=selected
                on_select=move |coin: Stablecoin| set_selected.set(Some(coin))
            />
            <input
                class="amount-input"
                type="text"
                inputmode="decimal"
                placeholder="0.0"
                prop:value=move || amount_text.get()
                on:input=move |ev| set_amount_text.set(event_target_value(&ev))
            />
            {move || precision_hint().map(|hint| view! { <p class="status error">{hint}</p> })}
            <p>"Estimated slippage: " {move || format_slippage(slippage.get())}</p>
            <button class="btn" disabled=disabled on:click=on_approve>
                {move || format!("Approve {} {}", amount.get(), symbol())}
            </button>
            <button class="btn" disabled=disabled on:click=on_submit>
                {move || format!("Create {} transaction for {} {}", direction.noun(), amount.get(), symbol())}
            </button>
            {move || status.get().map(|status| view! { <p class=status.class()>{status.message()}</p> })}
        </div>
    }
}
