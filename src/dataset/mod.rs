//! Persisted value-history dataset.
//!
//! One flat CSV file, append-only in spirit: each run's rows are prepended
//! ahead of everything already on disk and the whole file is rewritten.
//! There is no deduplication, so re-running a date repeats its rows.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::info;

pub mod models;
use models::TeamGameRecord;

use crate::error::Result;

/// CSV-backed store of every `TeamGameRecord` ever screened.
#[derive(Debug, Clone)]
pub struct HistoryDataset {
    path: PathBuf,
}

impl HistoryDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryDataset { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every persisted row. A missing file is an empty dataset (first
    /// run).
    pub fn load(&self) -> Result<Vec<TeamGameRecord>> {
        if !self.path.exists() {
            info!("History file {} not found, starting fresh", self.path.display());
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<TeamGameRecord>, _>>()?;
        Ok(rows)
    }

    /// Overwrite the file with the given rows.
    pub fn save(&self, rows: &[TeamGameRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Put `new_rows` ahead of everything already persisted and rewrite the
    /// file. Returns the total row count afterwards.
    pub fn prepend(&self, new_rows: Vec<TeamGameRecord>) -> Result<usize> {
        let mut combined = new_rows;
        combined.extend(self.load()?);
        self.save(&combined)?;
        Ok(combined.len())
    }
}

/// Order a run's rows the way they are stored: newest run date first, best
/// value index first within it. Rows without an index sort last.
pub fn sort_for_history(rows: &mut [TeamGameRecord]) {
    rows.sort_by(|a, b| {
        b.today_date.cmp(&a.today_date).then_with(|| {
            let a_idx = a.ml_value_idx.unwrap_or(f64::NEG_INFINITY);
            let b_idx = b.ml_value_idx.unwrap_or(f64::NEG_INFINITY);
            b_idx.partial_cmp(&a_idx).unwrap_or(Ordering::Equal)
        })
    });
}
