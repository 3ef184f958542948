//! Aggregate statistics over the history table

use crate::CalculationRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of every calculation seen so far.
///
/// Averages, maxima and minima are computed over finite results only;
/// NaN and infinite results still count towards the totals. With no
/// finite result the fields keep their fold identities: average `0.0`,
/// max `-inf`, min `+inf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_calculations: usize,
    pub operations_count: BTreeMap<String, usize>,
    pub average_result: f64,
    pub max_result: f64,
    pub min_result: f64,
}

impl Statistics {
    pub fn compute(records: &[CalculationRecord]) -> Self {
        let mut operations_count: BTreeMap<String, usize> = BTreeMap::new();
        let mut sum = 0.0;
        let mut finite = 0usize;
        let mut max_result = f64::NEG_INFINITY;
        let mut min_result = f64::INFINITY;

        for record in records {
            *operations_count.entry(record.operation.clone()).or_insert(0) += 1;
            if record.result.is_finite() {
                sum += record.result;
                finite += 1;
                max_result = max_result.max(record.result);
                min_result = min_result.min(record.result);
            }
        }

        Self {
            total_calculations: records.len(),
            operations_count,
            average_result: if finite > 0 { sum / finite as f64 } else { 0.0 },
            max_result,
            min_result,
        }
    }
}
