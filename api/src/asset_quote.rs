//! The market snapshot record for a single asset.

use serde::Deserialize;

use crate::quote_amount::round_half_away;
use crate::quote_amount::QuoteAmount;
use crate::serde_util::null_as_zero;
use crate::vs_currency::VsCurrency;

/// One row of the `coins/markets` response.
///
/// Only the fields the dashboard shows are decoded; anything else in the
/// payload is ignored. A quote is never mutated after it has been loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetQuote {
    /// Unique within a single load (e.g. "bitcoin").
    pub id: String,
    pub name: String,
    /// Lowercase ticker as reported (e.g. "btc").
    pub symbol: String,
    /// Icon URL.
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_zero::deserialize")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_as_zero::deserialize")]
    pub market_cap: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

impl AssetQuote {
    /// True when `needle_lower` occurs in the name or the symbol, ignoring case.
    ///
    /// `needle_lower` must already be lowercased. An empty needle matches.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.symbol.to_lowercase().contains(needle_lower)
    }

    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn price(&self, currency: VsCurrency) -> QuoteAmount {
        QuoteAmount::new(self.current_price, currency)
    }

    pub fn market_cap(&self, currency: VsCurrency) -> QuoteAmount {
        QuoteAmount::new(self.market_cap, currency)
    }

    /// The 24h change to two decimals with a percent sign, or an empty string
    /// when the endpoint did not report one.
    pub fn change_24h_display(&self) -> String {
        match self.price_change_percentage_24h {
            Some(change) => format!("{:.2}%", round_half_away(change, 2)),
            None => String::new(),
        }
    }

    pub fn change_24h_trend(&self) -> ChangeTrend {
        match self.price_change_percentage_24h {
            Some(change) if change > 0.0 => ChangeTrend::Up,
            Some(_) => ChangeTrend::Down,
            None => ChangeTrend::Unknown,
        }
    }
}

/// Sign of the 24h change, used to pick the cell colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ChangeTrend {
    Up,
    /// Zero counts as down.
    Down,
    Unknown,
}

impl ChangeTrend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Up => "green",
            Self::Down => "red",
            Self::Unknown => "",
        }
    }
}
