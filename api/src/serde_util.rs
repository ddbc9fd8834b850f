//! Custom serde helpers for the markets wire format.

/// Deserializes a number that the endpoint may report as `null` into `0.0`.
///
/// Pair with `#[serde(default)]` to also cover a missing key.
pub mod null_as_zero {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
    }
}
