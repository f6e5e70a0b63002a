//! Post-export bookkeeping seam
//!
//! After an export file is written, the engine reports an [`ExportRecord`]
//! to the surrounding application through this trait. Recording is best
//! effort: a sink failure is logged by the caller and never fails the
//! export itself.

use std::sync::Mutex;
use task_model::ExportRecord;

/// Receives a record of each successful export
pub trait ExportLog: Send + Sync {
    /// Persist one export record
    fn record(&self, record: &ExportRecord) -> anyhow::Result<()>;
}

/// In-memory export log
#[derive(Debug, Default)]
pub struct MemoryExportLog {
    records: Mutex<Vec<ExportRecord>>,
}

impl MemoryExportLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded exports
    pub fn records(&self) -> Vec<ExportRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ExportLog for MemoryExportLog {
    fn record(&self, record: &ExportRecord) -> anyhow::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
