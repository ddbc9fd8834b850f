//! Display type for prices and market caps denominated in a vs currency.

use std::fmt;

use crate::vs_currency::VsCurrency;

/// Largest number of fraction digits shown, matching the en-US locale default.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// A monetary value as reported by the markets endpoint.
///
/// The endpoint reports floats, and sub-cent prices are common, so the value
/// is kept as an `f64` and only rounded when displayed. The `Display`
/// implementation produces a grouped plain number (e.g. "67,123.45").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteAmount {
    value: f64,
    currency: VsCurrency,
}

impl QuoteAmount {
    pub fn new(value: f64, currency: VsCurrency) -> Self {
        Self { value, currency }
    }

    /// Formats the amount with its currency symbol (e.g., "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }
}

impl fmt::Display for QuoteAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grouped(self.value, MAX_FRACTION_DIGITS))
    }
}

/// Rounds `value` to `digits` fraction digits, ties away from zero.
///
/// Exact binary ties round up ("1.0625" to "1.063"), unlike `format!`.
/// Values too large to scale exactly are returned unchanged.
pub fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 1e15 {
        return value;
    }
    scaled.round() / scale
}

/// Formats `value` with comma-grouped thousands and at most
/// `max_fraction_digits` fraction digits, trailing zeros trimmed.
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!(
        "{:.*}",
        max_fraction_digits,
        round_half_away(value.abs(), max_fraction_digits)
    );
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    // "-0" is never shown
    let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
