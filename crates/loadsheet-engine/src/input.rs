//! Raw text → station value.
//!
//! Input arrives one keystroke at a time, so half-typed numbers like `"12."`
//! or `"."` must pass. Anything with a sign, exponent, letter or second dot is
//! refused and the caller keeps its previous value.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// ASCII digits only: `\d` would also admit other Unicode digit classes.
static UNSIGNED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("unsigned decimal pattern compiles"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` is not an unsigned decimal number")]
    Malformed(String),
}

/// Parse without clamping. Empty text and a lone `.` read as 0.
///
/// A digit string too long to fit an `f64` is refused like any other
/// malformed entry.
pub fn parse_unsigned(raw: &str) -> Result<f64, InputError> {
    let text = raw.trim();
    if !UNSIGNED_DECIMAL.is_match(text) {
        return Err(InputError::Malformed(raw.to_owned()));
    }
    let value = text.parse::<f64>().unwrap_or(0.0);
    if !value.is_finite() {
        return Err(InputError::Malformed(raw.to_owned()));
    }
    Ok(value)
}

/// Clamp down to `max` when one is given. Never raises a value.
pub fn clamp_to(value: f64, max: Option<f64>) -> f64 {
    match max {
        Some(max) if value > max => max,
        _ => value,
    }
}

/// Validate a raw entry and clamp it to `max`. Every edit goes through here.
pub fn validate(raw: &str, max: Option<f64>) -> Result<f64, InputError> {
    parse_unsigned(raw).map(|value| clamp_to(value, max))
}
