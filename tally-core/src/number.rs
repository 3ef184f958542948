//! Numeric parsing and display policy
//!
//! Every command applies the same rules to its operand tokens: each token
//! must parse as a finite `f64`. Non-finite literals ("inf", "NaN") are
//! rejected here so that no non-finite operand can ever reach the history
//! store. Results, by contrast, are allowed to be non-finite.

use crate::CalcError;
use tracing::debug;

/// Parse a single operand token.
///
/// Accepts anything `f64::from_str` does except the non-finite literals.
pub fn parse_number(token: &str) -> Result<f64, CalcError> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => {
            debug!(token, "rejected non-finite operand token");
            Err(CalcError::InvalidNumberFormat(token.to_string()))
        }
        Err(_) => Err(CalcError::InvalidNumberFormat(token.to_string())),
    }
}

/// Render a result for the prompt.
///
/// Integral values print without a fractional part ("8", not "8.000"),
/// everything else falls back to the shortest `f64` round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
