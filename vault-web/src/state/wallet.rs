//! Wallet state management

use leptos::prelude::*;
use lib_core::service::Connection;

use crate::services::wallet::{parse_chain_id, subscribe, WalletState};

/// Global wallet context: account status plus the chain the wallet is on.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    pub chain_id: RwSignal<Option<u64>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            chain_id: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn error(&self) -> Option<String> {
        self.wallet.with(|state| match state {
            WalletState::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn connection(&self) -> Connection {
        Connection {
            address: self.address(),
            chain_id: self.chain_id.get(),
        }
    }

    /// Snapshot for event handlers; does not subscribe.
    pub fn connection_untracked(&self) -> Connection {
        Connection {
            address: self
                .wallet
                .with_untracked(|state| state.address().map(|s| s.to_string())),
            chain_id: self.chain_id.get_untracked(),
        }
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    /// Apply a connection reported by the wallet. No address means disconnected.
    pub fn apply(&self, connection: Connection) {
        self.chain_id.set(connection.chain_id);
        match connection.address {
            Some(address) => self.wallet.set(WalletState::Connected { address }),
            None => self.wallet.set(WalletState::Disconnected),
        }
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// Follow account and network switches made in the wallet UI.
    pub fn listen_for_changes(self) {
        let accounts_registered = subscribe("accountsChanged", move |accounts| {
            let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
            match accounts.into_iter().next() {
                Some(address) => {
                    log::info!("Wallet account changed to {}", address);
                    self.wallet.set(WalletState::Connected { address });
                }
                None => {
                    log::info!("Wallet disconnected");
                    self.disconnect();
                }
            }
        });

        let chain_registered = subscribe("chainChanged", move |chain| {
            let chain_id = chain.as_string().as_deref().and_then(parse_chain_id);
            log::info!("Wallet switched to chain {:?}", chain_id);
            self.chain_id.set(chain_id);
        });

        if !(accounts_registered && chain_registered) {
            log::debug!("Wallet does not emit change events");
        }
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
