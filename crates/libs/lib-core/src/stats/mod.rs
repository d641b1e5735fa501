//! Account statistics: position and the local/canonical price spread.
//!
//! A refresh fires `/price`, `/canonicalPrice` and `/position` together. Each
//! figure lands independently; a failed fetch keeps whatever was shown before,
//! and a refresh overtaken by a newer one is dropped whole.

use shared::dto::vault::PositionRequest;
use tracing::{debug, warn};

use crate::config::FrontendConfig;
use crate::error::Result;
use crate::sequence::{RequestSequencer, RequestTicket};
use crate::service::{Connection, VaultApi};

/// Position query for the connected account, tagged with the configured
/// stablecoin (if any).
pub fn position_request(config: &FrontendConfig, connection: &Connection) -> Result<PositionRequest> {
    let address = connection.require_address()?;
    Ok(PositionRequest {
        address: address.to_string(),
        stablecoin: config.position_stablecoin.clone(),
    })
}

/// Percentage deviation of the local price from the canonical one:
/// `|local − canonical| × 100 / canonical`.
///
/// `None` while the canonical price is not loaded (zero) or when either input
/// is not finite, so the panel never renders `NaN%` or `inf%`.
///
/// ```rust
/// use lib_core::stats::deviation_percent;
///
/// let deviation = deviation_percent(1.02, 1.00).unwrap();
/// assert!((deviation - 2.0).abs() < 1e-9);
/// assert_eq!(deviation_percent(1.02, 0.0), None);
/// ```
pub fn deviation_percent(local: f64, canonical: f64) -> Option<f64> {
    if !local.is_finite() || !canonical.is_finite() || canonical == 0.0 {
        return None;
    }
    let deviation = (local - canonical).abs() * 100.0 / canonical;
    deviation.is_finite().then_some(deviation)
}

/// What the stats panel knows so far. Each field fills in independently as
/// its request resolves; a failed request leaves the field as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsSnapshot {
    pub position: Option<f64>,
    pub price: Option<f64>,
    pub canonical_price: Option<f64>,
}

impl StatsSnapshot {
    pub fn deviation_percent(&self) -> Option<f64> {
        deviation_percent(self.price?, self.canonical_price?)
    }
}

/// Fetches the statistics for one backend and account.
pub struct StatsFlow<'a> {
    api: &'a dyn VaultApi,
    config: &'a FrontendConfig,
}

impl<'a> StatsFlow<'a> {
    pub fn new(api: &'a dyn VaultApi, config: &'a FrontendConfig) -> Self {
        Self { api, config }
    }

    /// Fetch all three figures concurrently and fold them into `previous`.
    ///
    /// `/position` is not called without a connected address. Returns `None`
    /// when a refresh issued after `ticket` exists by the time the fetches
    /// resolve.
    pub async fn refresh(
        &self,
        sequencer: &RequestSequencer,
        ticket: RequestTicket,
        connection: &Connection,
        previous: StatsSnapshot,
    ) -> Option<StatsSnapshot> {
        let position = async {
            match position_request(self.config, connection) {
                Ok(request) => Some(self.api.position(&request).await),
                Err(e) => {
                    debug!(error = %e, "Skipping position fetch");
                    None
                }
            }
        };
        let (position, price, canonical_price) =
            futures::join!(position, self.api.price(), self.api.canonical_price());

        let mut snapshot = previous;
        if let Some(position) = position {
            snapshot.position = keep_on_error("position", position, previous.position);
        }
        snapshot.price = keep_on_error("price", price, previous.price);
        snapshot.canonical_price = keep_on_error("canonical price", canonical_price, previous.canonical_price);

        let accepted = sequencer.accept(ticket, snapshot);
        if accepted.is_none() {
            debug!(?ticket, "dropping superseded stats refresh");
        }
        accepted
    }
}

fn keep_on_error(label: &str, fetched: Result<f64>, previous: Option<f64>) -> Option<f64> {
    match fetched {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "Failed to fetch {}", label);
            previous
        }
    }
}
