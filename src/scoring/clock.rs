//! Calendar year source for open-ended tenure ("present", "current")

use chrono::{Datelike, Local};

pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year; used for reproducible runs and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
