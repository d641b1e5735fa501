//! # Front-End Configuration
//!
//! Everything the panels need to know about where the backend lives and which
//! policy choices are in effect. The browser has no process environment, so
//! the configuration is built from a key lookup: the web app passes URL query
//! parameters, tests pass a map.
//!
//! Keys that decide what the wallet is asked to sign (where calldata and the
//! vault address come from, which token gets approved) are only honored from
//! a trusted source. [`FrontendConfig::from_sources`] takes only
//! [`UNTRUSTED_KEYS`] from its untrusted lookup, so a crafted link cannot
//! point the app at another backend.
//!
//! | Key | Default | Meaning |
//! |---|---|---|
//! | `backend` | page origin | Origin serving the deployments |
//! | `mainPath` | `main` | Path segment of the mainnet deployment |
//! | `alternatePath` | `opt` | Path segment of the alternate deployment |
//! | `mainChainId` | `1` | Chain id routed to the main deployment |
//! | `unknownChain` | `alternate` | Deployment used before a chain is known |
//! | `approveDeposit` | `stablecoin` | Token approved before a deposit |
//! | `approveWithdraw` | `stablecoin` | Token approved before a withdrawal |
//! | `positionStablecoin` | `USDC` | Denomination requested from `/position` |
//!
//! ```rust
//! use lib_core::config::FrontendConfig;
//!
//! let config = FrontendConfig::with_origin("https://vault.example");
//! assert_eq!(config.base_url(Some(1)), "https://vault.example/main");
//! assert_eq!(config.base_url(Some(10)), "https://vault.example/opt");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::deployment::{Deployment, MAINNET_CHAIN_ID};
use crate::error::{AppError, Result};
use crate::transfer::Direction;

/// Which token contract receives the `approve` call ahead of a transfer.
///
/// Deposits move the stablecoin into the vault, but withdrawals burn the
/// vault's receipt token, and the backend has not pinned down which allowance
/// its withdraw calldata relies on. Both are configurable per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalTarget {
    /// Approve the selected stablecoin's contract.
    Stablecoin,
    /// Approve the vault's own receipt token (the vault contract address).
    ReceiptToken,
}

impl fmt::Display for ApprovalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalTarget::Stablecoin => f.write_str("stablecoin"),
            ApprovalTarget::ReceiptToken => f.write_str("receipt"),
        }
    }
}

impl FromStr for ApprovalTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stablecoin" | "coin" => Ok(ApprovalTarget::Stablecoin),
            "receipt" | "receipttoken" | "vault" => Ok(ApprovalTarget::ReceiptToken),
            other => Err(AppError::Config(format!(
                "unknown approval target '{}', expected 'stablecoin' or 'receipt'",
                other
            ))),
        }
    }
}

/// Keys that may come from an untrusted source such as the page URL. Neither
/// changes the origin calldata is fetched from nor the approved token.
pub const UNTRUSTED_KEYS: &[&str] = &["unknownChain", "positionStablecoin"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Scheme + host (+ port) of the backend, without trailing slash
    pub origin: String,
    pub main_path: String,
    pub alternate_path: String,
    pub main_chain_id: u64,
    /// Deployment used while no chain id is known
    pub unknown_chain: Deployment,
    pub approve_deposit: ApprovalTarget,
    pub approve_withdraw: ApprovalTarget,
    /// Denomination sent with `/position`; `None` lets the backend pick
    pub position_stablecoin: Option<String>,
}

impl FrontendConfig {
    /// Default configuration pointed at `origin`.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: normalize_origin(&origin.into()),
            main_path: "main".to_string(),
            alternate_path: "opt".to_string(),
            main_chain_id: MAINNET_CHAIN_ID,
            unknown_chain: Deployment::Alternate,
            approve_deposit: ApprovalTarget::Stablecoin,
            approve_withdraw: ApprovalTarget::Stablecoin,
            position_stablecoin: Some("USDC".to_string()),
        }
    }

    /// Build a configuration from `origin` plus whatever overrides `lookup` knows about.
    ///
    /// Keys missing from `lookup` keep their defaults; keys present but
    /// unparseable are an error.
    pub fn from_lookup<F>(origin: impl Into<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_origin(origin);

        if let Some(origin) = lookup("backend") {
            config.origin = normalize_origin(&origin);
        }
        if let Some(path) = lookup("mainPath") {
            config.main_path = path.trim_matches('/').to_string();
        }
        if let Some(path) = lookup("alternatePath") {
            config.alternate_path = path.trim_matches('/').to_string();
        }
        if let Some(raw) = lookup("mainChainId") {
            config.main_chain_id = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("mainChainId must be a valid number: {}", e)))?;
        }
        if let Some(raw) = lookup("unknownChain") {
            config.unknown_chain = raw.parse()?;
        }
        if let Some(raw) = lookup("approveDeposit") {
            config.approve_deposit = raw.parse()?;
        }
        if let Some(raw) = lookup("approveWithdraw") {
            config.approve_withdraw = raw.parse()?;
        }
        if let Some(raw) = lookup("positionStablecoin") {
            let raw = raw.trim();
            config.position_stablecoin = (!raw.is_empty()).then(|| raw.to_string());
        }

        config.validate()?;
        Ok(config)
    }

    /// Combine a trusted lookup (build-time settings) with an untrusted one
    /// (the page URL). The untrusted lookup is consulted for
    /// [`UNTRUSTED_KEYS`] only, where it wins over the trusted value.
    pub fn from_sources<T, U>(origin: impl Into<String>, trusted: T, untrusted: U) -> Result<Self>
    where
        T: Fn(&str) -> Option<String>,
        U: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(origin, |key| {
            let overridden = if UNTRUSTED_KEYS.contains(&key) {
                untrusted(key)
            } else {
                None
            };
            overridden.or_else(|| trusted(key))
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "backend origin must start with http:// or https://, got '{}'",
                self.origin
            )));
        }
        if self.main_path.is_empty() || self.alternate_path.is_empty() {
            return Err(AppError::Config("deployment paths cannot be empty".to_string()));
        }
        if self.main_path == self.alternate_path {
            return Err(AppError::Config(format!(
                "main and alternate deployments share the path '{}'",
                self.main_path
            )));
        }
        Ok(())
    }

    pub fn deployment(&self, chain_id: Option<u64>) -> Deployment {
        Deployment::for_chain(chain_id, self.main_chain_id, self.unknown_chain)
    }

    pub fn deployment_path(&self, deployment: Deployment) -> &str {
        match deployment {
            Deployment::Main => &self.main_path,
            Deployment::Alternate => &self.alternate_path,
        }
    }

    /// Base URL of the deployment serving `chain_id`, e.g. `https://host/main`.
    pub fn base_url(&self, chain_id: Option<u64>) -> String {
        let deployment = self.deployment(chain_id);
        format!("{}/{}", self.origin, self.deployment_path(deployment))
    }

    pub fn approval_target(&self, direction: Direction) -> ApprovalTarget {
        match direction {
            Direction::Deposit => self.approve_deposit,
            Direction::Withdraw => self.approve_withdraw,
        }
    }
}

fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}
