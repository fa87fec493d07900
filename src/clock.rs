//! Clock display component
//!
//! Writes the current epoch-millisecond timestamp into the page's clock
//! element immediately on startup and then once per interval, for the
//! application's lifetime. A page without the clock element disables the
//! feature entirely.

use crate::page::{ElementId, Page};
use chrono::Utc;
use std::time::{Duration, Instant};

/// Drives the clock display on a fixed cadence
#[derive(Debug)]
pub struct ClockUpdater {
    interval: Duration,
    next_due: Instant,
}

impl ClockUpdater {
    /// Create the updater and write the first timestamp immediately
    pub fn start(page: &mut Page, interval: Duration) -> Self {
        if !page.contains(ElementId::UserTime) {
            tracing::debug!(
                target = ElementId::UserTime.as_str(),
                "clock display absent, updater disabled"
            );
        }
        Self::write(page, Utc::now().timestamp_millis());
        Self {
            interval,
            next_due: Instant::now() + interval,
        }
    }

    /// Write a timestamp into the clock element as a decimal string;
    /// no-op when the element is absent.
    pub fn write(page: &mut Page, epoch_ms: i64) {
        page.set_text(ElementId::UserTime, epoch_ms.to_string());
    }

    /// How long the event loop may block before the next write is due
    pub fn poll_timeout(&self) -> Duration {
        self.next_due.saturating_duration_since(Instant::now())
    }

    /// Write the current time if the interval has elapsed. Returns
    /// whether a write happened.
    pub fn tick(&mut self, page: &mut Page) -> bool {
        if Instant::now() < self.next_due {
            return false;
        }
        Self::write(page, Utc::now().timestamp_millis());
        self.next_due = Instant::now() + self.interval;
        true
    }
}
