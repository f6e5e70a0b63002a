//! Report formatting and file-name derivation
//!
//! Assembles the textual export payload from a task record and a clock
//! capture, and derives the sanitized, timestamp-qualified file name. No
//! disk I/O happens in this module.

use chrono::{DateTime, Local};
use task_model::{ExportFormat, Task};

/// Application name stamped into the report footer
pub const GENERATOR_NAME: &str = "Taskdeck";

/// Date-only field format
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp field format
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Compact stamp appended to file names
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Characters replaced by `_` in file names. A fixed portable set, so a
/// title maps to the same file name on every platform.
const INVALID_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// A fully formatted export, ready for serialization.
///
/// Built once per export call and consumed by the writer stage.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Task title the request was built from
    pub title: String,
    /// Rendered report payload, newline-delimited
    pub body: String,
    /// Derived file name, including extension
    pub file_name: String,
    /// Requested output format
    pub format: ExportFormat,
}

/// Build an export request from a task, a format choice, and a clock
/// capture. The same capture feeds the report footer and the file name.
pub fn build_request(task: &Task, format: ExportFormat, now: DateTime<Local>) -> ExportRequest {
    ExportRequest {
        title: task.title.clone(),
        body: render_task_report(task, now),
        file_name: export_file_name(&task.title, now, format),
        format,
    }
}

/// Render the report payload for a task.
///
/// The template is fixed; `now` is the render-time capture, so re-rendering
/// at a different instant changes the footer line.
pub fn render_task_report(task: &Task, now: DateTime<Local>) -> String {
    let due_date = task
        .due_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    format!(
        "Title: {title}\n\
         Description: {description}\n\
         Status: {status}\n\
         Priority: {priority}\n\
         Due Date: {due_date}\n\
         Created: {created}\n\
         Last Updated: {updated}\n\
         \n\
         Task Details:\n\
         -------------\n\
         {description}\n\
         \n\
         Export generated on: {now}\n\
         Generated by: {generator}\n",
        title = task.title,
        description = task.description,
        status = task.status,
        priority = task.priority,
        due_date = due_date,
        created = task.created_at.format(DATETIME_FORMAT),
        updated = task.updated_at.format(DATETIME_FORMAT),
        now = now.format(DATETIME_FORMAT),
        generator = GENERATOR_NAME,
    )
}

/// Replace every character invalid in file names with `_`
pub fn sanitize_file_name(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Derive the export file name: sanitized title, compact timestamp,
/// format extension
pub fn export_file_name(title: &str, now: DateTime<Local>, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        sanitize_file_name(title),
        now.format(FILE_STAMP_FORMAT),
        format.extension()
    )
}
