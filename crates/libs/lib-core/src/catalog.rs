//! Stablecoin catalog and selection.
//!
//! The front-end only knows how to present a fixed set of coins (icon and
//! ticker). The backend decides which of them the connected deployment
//! supports; what the selector shows is the intersection, in catalog order.

use shared::dto::vault::Stablecoin;

/// A coin the front-end knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub symbol: &'static str,
    pub icon: &'static str,
}

pub const REFERENCE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        symbol: "DAI",
        icon: "https://assets.coingecko.com/coins/images/9956/small/dai-multi-collateral-mcd.png",
    },
    CatalogEntry {
        symbol: "USDC",
        icon: "https://assets.coingecko.com/coins/images/6319/small/USD_Coin_icon.png",
    },
    CatalogEntry {
        symbol: "USDT",
        icon: "https://assets.coingecko.com/coins/images/325/small/Tether-logo.png",
    },
];

/// One clickable entry of the selector: presentation from the catalog, token
/// details (address, decimals) from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub entry: CatalogEntry,
    pub coin: Stablecoin,
}

/// Catalog ∩ `supported`, in catalog order.
pub fn selectable(supported: &[Stablecoin]) -> Vec<SelectorOption> {
    REFERENCE_CATALOG
        .iter()
        .filter_map(|entry| {
            supported
                .iter()
                .find(|coin| coin.symbol == entry.symbol)
                .map(|coin| SelectorOption {
                    entry: *entry,
                    coin: coin.clone(),
                })
        })
        .collect()
}

/// Coin selected automatically whenever a new supported list arrives: the
/// first one the backend lists, or nothing for an empty list.
pub fn default_selection(supported: &[Stablecoin]) -> Option<Stablecoin> {
    supported.first().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn coin(symbol: &str) -> Stablecoin {
        Stablecoin {
            symbol: symbol.to_string(),
            address: format!("0x{:0>40}", symbol.len()),
            decimals: 6,
        }
    }

    #[test]
    fn test_intersection_in_catalog_order() {
        let supported = vec![coin("USDT"), coin("FRAX"), coin("DAI")];
        let symbols: Vec<_> = selectable(&supported).iter().map(|o| o.entry.symbol).collect();
        assert_eq!(symbols, vec!["DAI", "USDT"]);
    }

    #[test]
    fn test_backend_details_win() {
        let mut usdc = coin("USDC");
        usdc.decimals = 18;
        let options = selectable(&[usdc.clone()]);
        assert_eq!(options[0].coin, usdc);
        assert_eq!(options[0].coin.decimals, 18);
        assert_eq!(options[0].entry.symbol, "USDC");
    }

    #[test]
    fn test_default_is_first_supported() {
        let supported = vec![coin("USDC"), coin("DAI")];
        assert_eq!(default_selection(&supported), Some(coin("USDC")));
        assert_eq!(default_selection(&[]), None);
        assert!(selectable(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn rendered_set_is_intersection(
            symbols in proptest::collection::vec(
                prop_oneof![Just("DAI"), Just("USDC"), Just("USDT"), Just("FRAX"), Just("LUSD")],
                0..6,
            )
        ) {
            let supported: Vec<Stablecoin> = symbols.iter().map(|s| coin(s)).collect();

            let rendered: BTreeSet<&str> = selectable(&supported).iter().map(|o| o.entry.symbol).collect();
            let expected: BTreeSet<&str> = REFERENCE_CATALOG
                .iter()
                .map(|e| e.symbol)
                .filter(|s| symbols.contains(s))
                .collect();
            prop_assert_eq!(rendered, expected);

            prop_assert_eq!(default_selection(&supported), supported.first().cloned());
        }
    }
}
