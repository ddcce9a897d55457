//! Wall-clock capability.
//!
//! Handlers never read the system time directly; they ask a [`Clock`] held in
//! the shared application state. Production uses [`SystemClock`], tests pin
//! the time with [`FixedClock`].

use chrono::{Local, NaiveDateTime};

/// Source of the current local date-time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current local date-time, without offset.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
