//! Power and square root with real-domain edge cases

use tally_plugin::prelude::*;
use tracing::debug;

pub struct Pow;
pub struct Sqrt;

static POW_EXAMPLES: [&str; 2] = ["pow 2 3", "pow 0.5"];
static SQRT_EXAMPLES: [&str; 2] = ["sqrt 16", "sqrt"];

/// Raise `x` to the power `y`.
///
/// Undefined in the real domain: a fractional power of a negative base,
/// and a negative power of zero — both are hard failures. NaN operands
/// propagate. Overflow saturates to positive infinity rather than
/// failing, so an overflowed result stays representable downstream.
pub fn power(x: f64, y: f64) -> CalcResult<f64> {
    if x.is_nan() || y.is_nan() {
        return Ok(f64::NAN);
    }
    if x < 0.0 && y.fract() != 0.0 {
        return Err(CalcError::InvalidExponent(
            "fractional power of a negative base".to_string(),
        ));
    }
    if x == 0.0 && y < 0.0 {
        return Err(CalcError::InvalidExponent(
            "negative power of zero".to_string(),
        ));
    }

    let result = x.powf(y);
    if result.is_infinite() {
        debug!(x, y, "power overflowed");
        return Ok(f64::INFINITY);
    }
    Ok(result)
}

/// Square root of `x`. Negative input is a hard failure; NaN propagates;
/// infinity yields infinity.
pub fn sqrt_of(x: f64) -> CalcResult<f64> {
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x < 0.0 {
        return Err(CalcError::NegativeRadicand);
    }
    Ok(x.sqrt())
}

impl OperationPlugin for Pow {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "pow",
            arity: 2,
            description: "Raise a number to a power",
            usage: "pow [x] y",
            examples: &POW_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        power(operands[0], operands[1])
    }
}

impl OperationPlugin for Sqrt {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "sqrt",
            arity: 1,
            description: "Square root of a number",
            usage: "sqrt [x]",
            examples: &SQRT_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        sqrt_of(operands[0])
    }
}
