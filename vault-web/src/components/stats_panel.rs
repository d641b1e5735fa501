//! Account statistics: position, local and canonical receipt token price,
//! and how far apart the two prices are.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{RequestSequencer, StatsFlow, StatsSnapshot};

use crate::services::api::GlooVaultApi;
use crate::state::config::use_config;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::{format_deviation, format_optional};

#[component]
pub fn StatsPanel(#[prop(into)] base_url: Signal<String>) -> impl IntoView {
    let wallet = use_wallet_context();
    let config = use_config();
    let stats = RwSignal::new(StatsSnapshot::default());
    let sequencer = RequestSequencer::new();

    Effect::new(move |_| {
        let url = base_url.get();
        let connection = wallet.connection();
        let ticket = sequencer.issue();
        let sequencer = sequencer.clone();
        let config = config.get_value();
        spawn_local(async move {
            let api = GlooVaultApi::new(url);
            let previous = stats.get_untracked();
            let refreshed = StatsFlow::new(&api, &config)
                .refresh(&sequencer, ticket, &connection, previous)
                .await;
            if let Some(snapshot) = refreshed {
                stats.set(snapshot);
            }
        });
    });

    view! {
        <div class="card stats">
            <div>
                <div class="stat-label">"Position"</div>
                <div>{move || format_optional(stats.with(|s| s.position), 2)}</div>
            </div>
            <div>
                <div class="stat-label">"Price"</div>
                <div>{move || format_optional(stats.with(|s| s.price), 4)}</div>
            </div>
            <div>
                <div class="stat-label">"Canonical price"</div>
                <div>{move || format_optional(stats.with(|s| s.canonical_price), 4)}</div>
            </div>
            <div>
                <div class="stat-label">"Deviation"</div>
                <div>{move || format_deviation(stats.with(StatsSnapshot::deviation_percent))}</div>
            </div>
        </div>
    }
}
