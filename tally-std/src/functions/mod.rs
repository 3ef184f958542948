//! Standard arithmetic operations

mod arithmetic;

pub use arithmetic::{Add, Divide, Multiply, Subtract};
