//! Wall-clock capability
//!
//! The report template embeds the render-time timestamp, so the clock is an
//! injected dependency rather than an ambient read. Production code uses
//! [`SystemClock`]; tests pin [`FixedClock`] to compare rendered output
//! byte for byte.

use chrono::{DateTime, Local};

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
