//! Task record and its field enums

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Workflow state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Archived,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Archived => "Archived",
        };
        f.write_str(s)
    }
}

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// A task record as supplied by the surrounding application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable task id
    pub id: Uuid,
    /// Short title, also the basis of export file names
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Workflow state
    pub status: TaskStatus,
    /// Priority
    pub priority: TaskPriority,
    /// Due date, if one has been set
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Local>,
    /// Last modification timestamp
    pub updated_at: DateTime<Local>,
}

impl Task {
    /// Create a new task with the given title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}
