use crate::calculation::Calculation;
use crate::error::HistoryError;
use operations::OperationRegistry;
use std::path::Path;

/// A size-capped, chronological list of calculations with CSV persistence.
///
/// The store owns its records in memory; `save` and `load` move the whole
/// list at once, matching the calculator's small-history usage rather than
/// appending row by row.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<Calculation>,
    max_size: usize,
}

impl HistoryStore {
    /// Creates an empty store that will retain at most `max_size` records.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
        }
    }

    /// Appends a record, evicting the oldest entries once the cap is hit.
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
            tracing::debug!("history cap {} reached, dropped {excess} oldest", self.max_size);
        }
    }

    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    /// The most recently pushed record, if any.
    pub fn latest(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes all records to `path` as CSV, replacing whatever was there.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let mut writer = csv::Writer::from_path(path)?;
        for calculation in &self.entries {
            writer.serialize(calculation)?;
        }
        writer.flush()?;
        tracing::info!("saved {} calculation(s) to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Reads a history file back into a store.
    ///
    /// A missing file is an empty history, not an error (first run). Each row
    /// is re-validated: malformed operands or results fail the load with
    /// "Invalid calculation data", and every record is recomputed through the
    /// registry so results that have drifted from the core's current output
    /// are warned about on the spot.
    pub fn load(
        path: &Path,
        registry: &OperationRegistry,
        max_size: usize,
    ) -> Result<Self, HistoryError> {
        let mut store = Self::new(max_size);
        if !path.exists() {
            tracing::debug!("no history file at {}, starting empty", path.display());
            return Ok(store);
        }

        let mut reader = csv::Reader::from_path(path)?;
        for row in reader.deserialize::<Calculation>() {
            let calculation =
                row.map_err(|e| HistoryError::InvalidRecord(e.to_string()))?;
            calculation.check_consistency(registry)?;
            store.push(calculation);
        }
        tracing::info!("loaded {} calculation(s) from {}", store.len(), path.display());
        Ok(store)
    }
}
