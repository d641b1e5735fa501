//! Backend deployment selection.
//!
//! The backend serves one deployment per network under a path segment of the
//! same origin. Which one the front-end talks to follows the wallet's chain.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Ethereum mainnet chain id.
pub const MAINNET_CHAIN_ID: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    /// Mainnet deployment; its prices are the canonical reference.
    Main,
    /// Any other network (an L2 deployment of the same vault).
    Alternate,
}

impl Deployment {
    /// Pick the deployment for a connected chain.
    ///
    /// `main_chain_id` maps to [`Deployment::Main`], every other id to
    /// [`Deployment::Alternate`]. With no chain (nothing connected yet) the
    /// caller-configured `unknown` default is used.
    pub fn for_chain(chain_id: Option<u64>, main_chain_id: u64, unknown: Deployment) -> Self {
        match chain_id {
            Some(id) if id == main_chain_id => Deployment::Main,
            Some(_) => Deployment::Alternate,
            None => unknown,
        }
    }

    /// Label shown next to the connection status.
    pub fn network_label(&self) -> &'static str {
        match self {
            Deployment::Main => "mainnet",
            Deployment::Alternate => "optimism",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Main => f.write_str("main"),
            Deployment::Alternate => f.write_str("alternate"),
        }
    }
}

impl FromStr for Deployment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Deployment::Main),
            "alternate" | "alt" | "opt" => Ok(Deployment::Alternate),
            other => Err(AppError::Config(format!(
                "unknown deployment '{}', expected 'main' or 'alternate'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_resolves_main() {
        let d = Deployment::for_chain(Some(1), MAINNET_CHAIN_ID, Deployment::Alternate);
        assert_eq!(d, Deployment::Main);
    }

    #[test]
    fn test_other_chains_resolve_alternate() {
        for chain in [10, 137, 8453, 0] {
            let d = Deployment::for_chain(Some(chain), MAINNET_CHAIN_ID, Deployment::Main);
            assert_eq!(d, Deployment::Alternate, "chain {}", chain);
        }
    }

    #[test]
    fn test_unknown_chain_uses_configured_default() {
        assert_eq!(
            Deployment::for_chain(None, MAINNET_CHAIN_ID, Deployment::Alternate),
            Deployment::Alternate
        );
        assert_eq!(
            Deployment::for_chain(None, MAINNET_CHAIN_ID, Deployment::Main),
            Deployment::Main
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("main".parse::<Deployment>().unwrap(), Deployment::Main);
        assert_eq!(" OPT ".parse::<Deployment>().unwrap(), Deployment::Alternate);
        assert!("sepolia".parse::<Deployment>().is_err());
    }
}
