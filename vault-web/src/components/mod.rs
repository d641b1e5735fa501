pub mod navbar;
pub mod stablecoin_selector;
pub mod stats_panel;
pub mod transfer_panel;

pub use navbar::Navbar;
pub use stablecoin_selector::StablecoinSelector;
pub use stats_panel::StatsPanel;
pub use transfer_panel::{DepositPanel, WithdrawPanel};
