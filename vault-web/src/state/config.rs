//! Front-end configuration, read once at startup.
//!
//! Trusted settings are fixed when the bundle is built:
//!
//! - `VAULT_BACKEND_ORIGIN` sets the backend origin; without it the page's own origin is used
//! - `VAULT_APPROVE_DEPOSIT` and `VAULT_APPROVE_WITHDRAW` set the approval targets
//!
//! The page URL may only tweak display keys (`?unknownChain=main`,
//! `?positionStablecoin=DAI`). Debug builds accept every key from the URL
//! for local development.

use leptos::prelude::*;
use lib_core::config::UNTRUSTED_KEYS;
use lib_core::FrontendConfig;

use crate::utils::url::get_query_params;

const FALLBACK_ORIGIN: &str = "http://localhost:8080";

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| origin.starts_with("http"))
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

/// Settings baked into the bundle at build time.
fn build_setting(key: &str) -> Option<String> {
    let value = match key {
        "backend" => option_env!("VAULT_BACKEND_ORIGIN"),
        "approveDeposit" => option_env!("VAULT_APPROVE_DEPOSIT"),
        "approveWithdraw" => option_env!("VAULT_APPROVE_WITHDRAW"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Build the configuration from build-time settings and the page location.
/// Overrides that do not parse or validate are dropped in favor of the
/// build-time settings.
pub fn load_config() -> FrontendConfig {
    let origin = page_origin();
    let params = get_query_params();
    let from_url = |key: &str| params.get(key).cloned();

    let loaded = if cfg!(debug_assertions) {
        FrontendConfig::from_lookup(origin.clone(), |key| from_url(key).or_else(|| build_setting(key)))
    } else {
        for key in params.keys().filter(|key| !UNTRUSTED_KEYS.contains(&key.as_str())) {
            log::warn!("Ignoring URL override '{}' in a release build", key);
        }
        FrontendConfig::from_sources(origin.clone(), build_setting, from_url)
    };

    match loaded {
        Ok(config) => {
            log::info!(
                "Backend origin {} (main: /{}, alternate: /{})",
                config.origin,
                config.main_path,
                config.alternate_path
            );
            config
        }
        Err(e) => {
            log::warn!("Ignoring URL overrides: {}", e);
            FrontendConfig::from_lookup(origin.clone(), build_setting).unwrap_or_else(|e| {
                log::error!("Invalid build-time configuration: {}", e);
                FrontendConfig::with_origin(origin)
            })
        }
    }
}

pub fn provide_config_context() -> StoredValue<FrontendConfig> {
    let config = StoredValue::new(load_config());
    provide_context(config);
    config
}

pub fn use_config() -> StoredValue<FrontendConfig> {
    expect_context::<StoredValue<FrontendConfig>>()
}
