//! This crate contains the market data types and the quote provider used by
//! the dashboard. It has no UI dependency.

pub mod asset_quote;
pub mod market_query;
pub mod prefs;
pub mod quote_amount;
pub mod quote_providers;
mod serde_util;
pub mod vs_currency;

use thiserror::Error;

/// An error from the single market data load.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of quotes.
    #[error("malformed market data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two recognized failure classes. Both are handled the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ErrorKind {
    Network,
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Decode(_) => ErrorKind::Parse,
        }
    }
}
