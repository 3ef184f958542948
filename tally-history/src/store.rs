//! History storage operations
//!
//! The store keeps the full table in memory and rewrites the backing CSV
//! file on every mutation. Loading is best-effort: a missing, unreadable
//! or malformed file yields an empty store so that corruption can never
//! keep the calculator from starting.

use std::fs;
use std::path::{Path, PathBuf};

use tally_core::{CalcError, CalcResult};
use tracing::{debug, info, warn};

use crate::record::CalculationRecord;
use crate::stats::Statistics;

/// Durable, append-only log of calculations
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<CalculationRecord>,
}

impl HistoryStore {
    /// Load the store from disk, falling back to empty on any failure
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::read_records(&path) {
            Ok(records) => {
                info!(path = %path.display(), count = records.len(), "loaded history");
                records
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "starting with empty history");
                Vec::new()
            }
        };
        Self { path, records }
    }

    fn read_records(path: &Path) -> CalcResult<Vec<CalculationRecord>> {
        if !path.exists() {
            debug!(path = %path.display(), "no history file");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| CalcError::Persistence(e.to_string()))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CalculationRecord =
                row.map_err(|e| CalcError::Persistence(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Rewrite the backing file with the full in-memory table
    fn save(&self) -> CalcResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| CalcError::Persistence(e.to_string()))?;
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| CalcError::Persistence(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| CalcError::Persistence(e.to_string()))?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved history");
        Ok(())
    }

    /// Append a calculation and persist the store.
    ///
    /// Operands must be finite. On a save failure the in-memory append is
    /// kept: the caller sees the error, and the in-memory view may run
    /// ahead of the durable copy.
    pub fn add_calculation(
        &mut self,
        operation: &str,
        x: f64,
        y: f64,
        result: f64,
    ) -> CalcResult<()> {
        for operand in [x, y] {
            if !operand.is_finite() {
                return Err(CalcError::NonFiniteOperand(operand));
            }
        }

        self.records
            .push(CalculationRecord::new(operation, x, y, result));
        info!(operation, x, y, result, "added calculation");
        self.save()
    }

    /// Records ordered most-recent-first. `None` or `Some(0)` returns
    /// everything.
    pub fn get_history(&self, limit: Option<usize>) -> Vec<&CalculationRecord> {
        let iter = self.records.iter().rev();
        match limit {
            Some(n) if n > 0 => iter.take(n).collect(),
            _ => iter.collect(),
        }
    }

    /// Drop every record and remove the backing file.
    ///
    /// The in-memory store is empty when this returns, even if file
    /// removal failed.
    pub fn clear_history(&mut self) -> CalcResult<()> {
        self.records.clear();
        info!("cleared history");
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| CalcError::Persistence(e.to_string()))?;
        }
        Ok(())
    }

    pub fn get_statistics(&self) -> Statistics {
        Statistics::compute(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
