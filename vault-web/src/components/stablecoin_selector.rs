//! Stablecoin picker: the catalog coins the backend supports, in catalog order.

use leptos::prelude::*;
use lib_core::catalog::{default_selection, selectable};
use shared::dto::vault::Stablecoin;

/// Emits the backend's first coin each time a supported list arrives, and the
/// clicked coin on every click. Renders nothing for an empty list.
#[component]
pub fn StablecoinSelector(
    #[prop(into)] supported: Signal<Vec<Stablecoin>>,
    #[prop(into)] selected: Signal<Option<Stablecoin>>,
    #[prop(into)] on_select: Callback<Stablecoin>,
) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(first) = supported.with(|list| default_selection(list)) {
            on_select.run(first);
        }
    });

    let options = Memo::new(move |_| supported.with(|list| selectable(list)));

    view! {
        <div class="stablecoin-selector">
            <For
                each=move || options.get()
                key=|option| option.coin.symbol.clone()
                children=move |option| {
                    let coin = option.coin.clone();
                    let symbol = coin.symbol.clone();
                    let is_selected = {
                        let symbol = symbol.clone();
                        move || selected.with(|current| current.as_ref().is_some_and(|c| c.symbol == symbol))
                    };
                    view! {
                        <button
                            class="coin"
                            class:selected=is_selected
                            on:click=move |_| on_select.run(coin.clone())
                        >
                            <img src=option.entry.icon alt=option.entry.symbol width="24" height="24"/>
                            <span>{symbol}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
