//! Query parameters for the `coins/markets` endpoint.

use serde::Serialize;

use crate::vs_currency::VsCurrency;

/// Ordering of the markets listing, as understood by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    VolumeDesc,
    VolumeAsc,
    IdAsc,
    IdDesc,
}

/// The query string sent with the single load.
///
/// Field order is the order the parameters appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketQuery {
    pub vs_currency: VsCurrency,
    pub order: MarketOrder,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl MarketQuery {
    /// Top ten by market cap, in USD, first page, without sparklines.
    pub const fn top_ten_usd() -> Self {
        Self {
            vs_currency: VsCurrency::Usd,
            order: MarketOrder::MarketCapDesc,
            per_page: 10,
            page: 1,
            sparkline: false,
        }
    }
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self::top_ten_usd()
    }
}
