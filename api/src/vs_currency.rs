//! Defines the quote currencies the market endpoint can denominate prices in.

use serde::Serialize;

/// A "vs currency" accepted by the markets endpoint.
///
/// Serializes to the lowercase code the endpoint expects in its query string
/// (e.g. `usd`), and parses case-insensitively.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VsCurrency {
    Aud,
    Brl,
    Cad,
    Chf,
    Cny,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Krw,
    #[default]
    Usd,
    Btc,
    Eth,
}

impl VsCurrency {
    /// Returns the code sent on the wire (e.g. "usd").
    pub fn query_code(&self) -> &'static str {
        self.into()
    }

    /// Returns the graphical symbol used as a display prefix (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Aud => "A$",
            Self::Brl => "R$",
            Self::Cad => "C$",
            Self::Chf => "CHF ",
            Self::Cny => "¥",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Krw => "₩",
            Self::Usd => "$",
            Self::Btc => "₿",
            Self::Eth => "Ξ",
        }
    }
}
