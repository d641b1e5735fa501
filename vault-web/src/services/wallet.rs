//! EIP-1193 Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected Ethereum provider (`window.ethereum`):
//! account access, chain id, transaction submission and change events.

use async_trait::async_trait;
use lib_core::service::{Connection, TransactionRequest, WalletSigner};
use lib_core::{AppError, Result};
use shared::dto::wire::parse_quantity;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// EIP-1193 PROVIDER (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function provider() {
    return (typeof window !== 'undefined' && window.ethereum) ? window.ethereum : null;
}

function requireProvider() {
    const p = provider();
    if (!p) {
        throw new Error('No Ethereum wallet found. Install MetaMask or another EIP-1193 wallet.');
    }
    return p;
}

export function hasEthereum() {
    return provider() !== null;
}

export async function requestAccounts() {
    return await requireProvider().request({ method: 'eth_requestAccounts' });
}

export async function currentAccounts() {
    const p = provider();
    if (!p) {
        return [];
    }
    return await p.request({ method: 'eth_accounts' });
}

export async function currentChainId() {
    const p = provider();
    if (!p) {
        return null;
    }
    return await p.request({ method: 'eth_chainId' });
}

export async function sendTransaction(tx) {
    return await requireProvider().request({ method: 'eth_sendTransaction', params: [tx] });
}

export function onWalletEvent(event, handler) {
    const p = provider();
    if (!p || typeof p.on !== 'function') {
        return false;
    }
    p.on(event, handler);
    return true;
}
")]
extern "C" {
    /// Whether an injected provider exists
    pub fn hasEthereum() -> bool;

    /// `eth_requestAccounts`: prompts the user, resolves to an address array
    #[wasm_bindgen(catch)]
    pub async fn requestAccounts() -> std::result::Result<JsValue, JsValue>;

    /// `eth_accounts`: already-authorized accounts, no prompt
    #[wasm_bindgen(catch)]
    pub async fn currentAccounts() -> std::result::Result<JsValue, JsValue>;

    /// `eth_chainId`: hex string, or null without a provider
    #[wasm_bindgen(catch)]
    pub async fn currentChainId() -> std::result::Result<JsValue, JsValue>;

    /// `eth_sendTransaction`: resolves to the transaction hash
    #[wasm_bindgen(catch)]
    pub async fn sendTransaction(tx: &JsValue) -> std::result::Result<JsValue, JsValue>;

    /// Subscribe to a provider event (`accountsChanged`, `chainChanged`)
    pub fn onWalletEvent(event: &str, handler: &js_sys::Function) -> bool;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Readable message out of whatever a provider threw. EIP-1193 errors are
/// plain `{code, message}` objects rather than `Error` instances.
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

fn wallet_error(error: JsValue) -> AppError {
    AppError::Wallet(js_error_message(&error))
}

/// `0x`-prefixed chain id as reported by `eth_chainId` / `chainChanged`.
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    parse_quantity(raw).and_then(|id| u64::try_from(id).ok())
}

fn first_account(value: JsValue) -> Result<Option<String>> {
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::Decoding(format!("unexpected accounts payload: {}", e)))?;
    Ok(accounts.into_iter().next())
}

async fn chain_id() -> Option<u64> {
    match currentChainId().await {
        Ok(value) => value.as_string().as_deref().and_then(parse_chain_id),
        Err(e) => {
            log::warn!("eth_chainId failed: {}", js_error_message(&e));
            None
        }
    }
}

/// Prompt the user to connect (`eth_requestAccounts`).
pub async fn connect_wallet() -> Result<Connection> {
    let accounts = requestAccounts().await.map_err(wallet_error)?;
    let address = first_account(accounts)?
        .ok_or_else(|| AppError::Wallet("wallet returned no accounts".to_string()))?;

    Ok(Connection {
        address: Some(address),
        chain_id: chain_id().await,
    })
}

/// Pick up an already-authorized session without prompting.
pub async fn restore_session() -> Result<Connection> {
    let accounts = currentAccounts().await.map_err(wallet_error)?;
    Ok(Connection {
        address: first_account(accounts)?,
        chain_id: chain_id().await,
    })
}

/// Register `handler` for a provider event for the lifetime of the page.
pub fn subscribe(event: &str, handler: impl FnMut(JsValue) + 'static) -> bool {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    let registered = onWalletEvent(event, closure.as_ref().unchecked_ref());
    // the provider keeps calling it until the page unloads
    closure.forget();
    registered
}

/// [`WalletSigner`] over the injected provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip1193Wallet;

#[async_trait(?Send)]
impl WalletSigner for Eip1193Wallet {
    async fn send_transaction(&self, transaction: &TransactionRequest) -> Result<String> {
        let params = serde_wasm_bindgen::to_value(&transaction.to_rpc())
            .map_err(|e| AppError::Wallet(format!("failed to encode transaction: {}", e)))?;

        let hash = sendTransaction(&params).await.map_err(wallet_error)?;
        hash.as_string()
            .ok_or_else(|| AppError::Decoding("wallet returned a non-string transaction hash".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0xa"), Some(10));
        assert_eq!(parse_chain_id("0x"), None);
        assert_eq!(parse_chain_id("0x1ffffffffffffffff"), None);
    }

    #[test]
    fn test_wallet_state() {
        let state = WalletState::Connected {
            address: "0x00000000000000000000000000000000000000aa".to_string(),
        };
        assert!(state.is_connected());
        assert!(WalletState::Error("rejected".to_string()).address().is_none());
    }
}
