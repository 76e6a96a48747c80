//! Time utilities for the shared project timeline.
//!
//! All times are seconds as `f64`, measured from the start of the project.
//! The playback engine corrects drift above a 250ms tolerance rather than
//! chasing frame-exact lockstep, so rational frame arithmetic is not modeled.

use serde::{Deserialize, Serialize};

/// Format a time in seconds as `MM:SS`.
///
/// Negative and non-finite inputs render as `00:00`; minutes grow past two
/// digits for projects longer than an hour.
pub fn format_timecode(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// On-timeline duration of a trim window, floored at zero.
pub fn trimmed_duration(source_start: f64, source_end: f64) -> f64 {
    (source_end - source_start).max(0.0)
}

/// A half-open time range: start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time (inclusive)
    pub start: f64,
    /// Duration of the range
    pub duration: f64,
}

impl TimeRange {
    /// Create a new time range from start and duration.
    #[inline]
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// Create a time range from start and end times.
    #[inline]
    pub fn from_start_end(start: f64, end: f64) -> Self {
        Self {
            start,
            duration: end - start,
        }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(self) -> f64 {
        self.start + self.duration
    }

    /// Check if a time is within this range.
    #[inline]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time < self.end()
    }

    /// Check if two ranges overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// True when the range covers no time at all.
    pub fn is_empty(self) -> bool {
        self.duration <= 0.0
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
