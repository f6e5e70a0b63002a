//! Export entry points
//!
//! The `Exporter` ties the pieces together: capture the clock once, render
//! the payload, serialize it for the requested format, write the bytes in a
//! single filesystem operation, then report the export to the bookkeeping
//! sink. Serialization completes in memory before the write, so a failure
//! mid-serialization never leaves a truncated file.

use crate::clock::{Clock, SystemClock};
use crate::formatter::{build_request, ExportRequest};
use crate::pdf;
use crate::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use task_model::{ExportFormat, ExportRecord, Task};
use uuid::Uuid;

/// Task export engine.
///
/// One instance serves any number of export calls; each call captures the
/// clock once and uses that instant for the report footer, the file name,
/// and the bookkeeping record.
pub struct Exporter {
    user_id: Uuid,
    clock: Box<dyn Clock>,
    log: Option<Arc<dyn crate::ExportLog>>,
}

impl Exporter {
    /// Create an exporter for the given user, with the system clock and no
    /// bookkeeping sink
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            clock: Box::new(SystemClock),
            log: None,
        }
    }

    /// Replace the clock (tests pin it to a fixed instant)
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Attach a sink notified after each successful export
    pub fn with_log(mut self, log: Arc<dyn crate::ExportLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Format and serialize a task without touching the filesystem.
    /// Returns the derived file name and the complete payload bytes.
    pub fn export_bytes(&self, task: &Task, format: ExportFormat) -> Result<(String, Vec<u8>)> {
        let request = build_request(task, format, self.clock.now());
        let bytes = serialize_request(&request)?;
        Ok((request.file_name, bytes))
    }

    /// Export a task into `dir`, returning the path of the written file
    pub async fn export(
        &self,
        task: &Task,
        format: ExportFormat,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let requested_at = self.clock.now();
        let request = build_request(task, format, requested_at);
        let bytes = serialize_request(&request)?;

        let path = dir.as_ref().join(&request.file_name);
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(path = %path.display(), ?format, "task export written");

        self.record_export(task, format, requested_at);
        Ok(path)
    }

    /// Synchronous variant of [`export`](Self::export)
    pub fn export_sync(
        &self,
        task: &Task,
        format: ExportFormat,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let requested_at = self.clock.now();
        let request = build_request(task, format, requested_at);
        let bytes = serialize_request(&request)?;

        let path = dir.as_ref().join(&request.file_name);
        std::fs::write(&path, &bytes)?;
        tracing::debug!(path = %path.display(), ?format, "task export written");

        self.record_export(task, format, requested_at);
        Ok(path)
    }

    /// Report the export to the sink. Best effort: a sink failure is logged
    /// and swallowed, the export has already succeeded.
    fn record_export(&self, task: &Task, format: ExportFormat, requested_at: DateTime<Local>) {
        let Some(log) = &self.log else {
            return;
        };
        let record = ExportRecord {
            user_id: self.user_id,
            task_id: task.id,
            format,
            requested_at,
        };
        if let Err(e) = log.record(&record) {
            tracing::warn!("failed to record export of task {}: {e}", task.id);
        }
    }
}

/// Serialize a formatted request to its on-disk bytes
fn serialize_request(request: &ExportRequest) -> Result<Vec<u8>> {
    match request.format {
        ExportFormat::Text => Ok(request.body.clone().into_bytes()),
        ExportFormat::Pdf => pdf::render_report(&request.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::sink::{ExportLog, MemoryExportLog};
    use crate::ExportError;
    use chrono::TimeZone;
    use task_model::{TaskPriority, TaskStatus};

    struct FailingLog;

    impl ExportLog for FailingLog {
        fn record(&self, _record: &ExportRecord) -> anyhow::Result<()> {
            anyhow::bail!("bookkeeping store unavailable")
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap())
    }

    fn sample_task() -> Task {
        let mut task = Task::new("Finish Report", "Q3 numbers");
        task.status = TaskStatus::InProgress;
        task.priority = TaskPriority::High;
        task.due_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1);
        task
    }

    fn exporter() -> Exporter {
        Exporter::new(Uuid::new_v4()).with_clock(fixed_clock())
    }

    #[test]
    fn test_text_export_writes_rendered_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = exporter()
            .export_sync(&sample_task(), ExportFormat::Text, dir.path())
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Finish Report_20240510_143000.txt"
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title: Finish Report\n"));
        assert!(content.contains("Priority: High\n"));
        assert!(content.contains("Export generated on: 2024-05-10 14:30:00\n"));
    }

    #[test]
    fn test_pdf_export_writes_pdf_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = exporter()
            .export_sync(&sample_task(), ExportFormat::Pdf, dir.path())
            .unwrap();

        assert!(path.to_str().unwrap().ends_with(".pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let pdf = String::from_utf8(bytes).unwrap();
        assert!(pdf.contains("(Title: Finish Report) Tj"));
    }

    #[test]
    fn test_export_bytes_matches_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let engine = exporter();
        let task = sample_task();
        let (file_name, bytes) = engine.export_bytes(&task, ExportFormat::Pdf).unwrap();
        let path = engine
            .export_sync(&task, ExportFormat::Pdf, dir.path())
            .unwrap();

        assert_eq!(path.file_name().unwrap().to_str().unwrap(), file_name);
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_successful_export_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(MemoryExportLog::new());
        let user_id = Uuid::new_v4();
        let task = sample_task();

        Exporter::new(user_id)
            .with_clock(fixed_clock())
            .with_log(log.clone())
            .export_sync(&task, ExportFormat::Text, dir.path())
            .unwrap();

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, user_id);
        assert_eq!(records[0].task_id, task.id);
        assert_eq!(records[0].format, ExportFormat::Text);
        assert_eq!(records[0].requested_at, fixed_clock().0);
    }

    #[test]
    fn test_sink_failure_does_not_fail_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = exporter()
            .with_log(Arc::new(FailingLog))
            .export_sync(&sample_task(), ExportFormat::Text, dir.path())
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_export_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(MemoryExportLog::new());
        let mut task = sample_task();
        task.description = "total: 10\u{20AC}".to_string();

        let result = exporter()
            .with_log(log.clone())
            .export_sync(&task, ExportFormat::Pdf, dir.path());

        assert!(matches!(result, Err(ExportError::Encoding('\u{20AC}'))));
        assert!(log.records().is_empty());
        // nothing was written either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let result = exporter().export_sync(
            &sample_task(),
            ExportFormat::Text,
            "/nonexistent-export-target",
        );
        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[tokio::test]
    async fn test_async_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = exporter()
            .export(&sample_task(), ExportFormat::Pdf, dir.path())
            .await
            .unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(String::from_utf8_lossy(&bytes).trim_end().ends_with("%%EOF"));
    }
}
