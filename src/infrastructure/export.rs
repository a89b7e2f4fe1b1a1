//! CSV export for cleaned reviews
//!
//! Writes the serially numbered review rows to disk, overwriting any
//! existing file at the target path.

use crate::domain::ReviewRecord;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Exporter serializing review rows with a `Serial No.,Review` header
#[derive(Debug, Default)]
pub struct ReviewCsvExporter;

impl ReviewCsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the reviews to `path` with 1-based serial numbers.
    ///
    /// The header row comes from the serde renames on [`ReviewRecord`].
    /// Fails only when the file cannot be created or written; those errors
    /// propagate to the caller.
    pub fn write(&self, reviews: &[String], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;

        for (index, review) in reviews.iter().enumerate() {
            let record = ReviewRecord::new(index as u32 + 1, review.clone());
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write review row {}", index + 1))?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush output file {}", path.display()))?;

        info!("Wrote {} review rows to {}", reviews.len(), path.display());
        Ok(())
    }
}
