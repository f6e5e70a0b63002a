//! Task Model - Core task domain types
//!
//! This crate provides the pure domain types for Taskdeck: the task record
//! with its status and priority enums, the export format token, and the
//! bookkeeping record created after a successful export. No I/O and no
//! clock reads happen here.

mod export;
mod task;

pub use export::*;
pub use task::*;
