//! Core arithmetic operations

use tally_plugin::prelude::*;
use tracing::debug;

pub struct Add;
pub struct Subtract;
pub struct Multiply;
pub struct Divide;

static ADD_EXAMPLES: [&str; 2] = ["add 2 3", "add 5"];
static SUBTRACT_EXAMPLES: [&str; 2] = ["subtract 5 3", "subtract 1"];
static MULTIPLY_EXAMPLES: [&str; 2] = ["multiply 4 6", "multiply 2"];
static DIVIDE_EXAMPLES: [&str; 2] = ["divide 10 4", "divide 2"];

impl OperationPlugin for Add {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "add",
            arity: 2,
            description: "Add two numbers",
            usage: "add [x] y",
            examples: &ADD_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        debug!(x = operands[0], y = operands[1], "adding");
        Ok(operands[0] + operands[1])
    }
}

impl OperationPlugin for Subtract {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "subtract",
            arity: 2,
            description: "Subtract two numbers",
            usage: "subtract [x] y",
            examples: &SUBTRACT_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        debug!(x = operands[0], y = operands[1], "subtracting");
        Ok(operands[0] - operands[1])
    }
}

impl OperationPlugin for Multiply {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "multiply",
            arity: 2,
            description: "Multiply two numbers",
            usage: "multiply [x] y",
            examples: &MULTIPLY_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        debug!(x = operands[0], y = operands[1], "multiplying");
        Ok(operands[0] * operands[1])
    }
}

impl OperationPlugin for Divide {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "divide",
            arity: 2,
            description: "Divide two numbers",
            usage: "divide [x] y",
            examples: &DIVIDE_EXAMPLES,
        }
    }

    fn call(&self, operands: &[f64]) -> CalcResult<f64> {
        if operands[1] == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        debug!(x = operands[0], y = operands[1], "dividing");
        Ok(operands[0] / operands[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Add.call(&[2.0, 3.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Subtract.call(&[5.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Multiply.call(&[4.0, 6.0]).unwrap(), 24.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Divide.call(&[10.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_by_zero() {
        for x in [0.0, 1.0, -7.5, 1e300] {
            assert_eq!(Divide.call(&[x, 0.0]).unwrap_err(), CalcError::DivisionByZero);
        }
    }

    #[test]
    fn test_divide_inverts_multiply() {
        let samples = [(1.0, 3.0), (-7.5, 0.25), (1e10, -2.0), (0.1, 0.3)];
        for (x, y) in samples {
            let q = Divide.call(&[x, y]).unwrap();
            assert!((q * y - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
