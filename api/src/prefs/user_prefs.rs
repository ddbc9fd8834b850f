use crate::market_query::MarketQuery;

/// The public CoinGecko markets endpoint.
pub const COINGECKO_MARKETS_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Represents all user prefs: where quotes come from and which slice of the
/// market is requested. Nothing is persisted; `Default` is the only source.
#[derive(Clone, PartialEq, Debug)]
pub struct UserPrefs {
    endpoint: String,
    market_query: MarketQuery,
}

impl UserPrefs {
    pub fn new(endpoint: impl Into<String>, market_query: MarketQuery) -> Self {
        Self {
            endpoint: endpoint.into(),
            market_query,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn market_query(&self) -> &MarketQuery {
        &self.market_query
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::new(COINGECKO_MARKETS_URL, MarketQuery::default())
    }
}
