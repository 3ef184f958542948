//! Calculation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the history table.
///
/// The operand fields are finite by construction (the store rejects
/// anything else at insertion). The result may be non-finite, e.g. an
/// overflowed power, and every consumer has to tolerate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub x: f64,
    pub y: f64,
    pub result: f64,
}

impl CalculationRecord {
    /// Create a record stamped with the current time
    pub fn new(operation: impl Into<String>, x: f64, y: f64, result: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: operation.into(),
            x,
            y,
            result,
        }
    }
}
