//! Defines the trait and implementation for the external market data provider.

use crate::asset_quote::AssetQuote;
use crate::ApiError;

/// A trait for any service that can provide the top market quotes.
pub trait QuoteProvider {
    /// Fetches one page of quotes, in the order the provider returns them.
    async fn top_quotes(&self) -> Result<Vec<AssetQuote>, ApiError>;
}

/// Decodes a markets response body.
pub fn parse_quotes(body: &str) -> Result<Vec<AssetQuote>, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Provides quote data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use crate::market_query::MarketQuery;
    use crate::prefs::user_prefs::UserPrefs;

    /// An implementation of the `QuoteProvider` trait for CoinGecko's
    /// `coins/markets` endpoint.
    #[derive(Debug, Clone)]
    pub struct CoinGecko {
        client: reqwest::Client,
        endpoint: String,
        query: MarketQuery,
    }

    impl CoinGecko {
        pub fn new(prefs: &UserPrefs) -> Self {
            Self {
                client: reqwest::Client::new(),
                endpoint: prefs.endpoint().to_string(),
                query: *prefs.market_query(),
            }
        }

        /// Builds the GET request without sending it.
        pub fn request(&self) -> Result<reqwest::Request, ApiError> {
            Ok(self
                .client
                .get(&self.endpoint)
                .query(&self.query)
                .build()?)
        }
    }

    impl QuoteProvider for CoinGecko {
        async fn top_quotes(&self) -> Result<Vec<AssetQuote>, ApiError> {
            let request = self.request()?;
            dioxus_logger::tracing::debug!("GET {}", request.url());

            let resp = self.client.execute(request).await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                });
            }

            // read as text first so a malformed body is reported as a decode error
            let body = resp.text().await?;
            parse_quotes(&body)
        }
    }
}
