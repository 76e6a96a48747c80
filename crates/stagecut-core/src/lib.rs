//! StageCut Core - Foundation types for the editing engine
//!
//! This crate provides the fundamental pieces used throughout StageCut:
//! - Time utilities over wall-clock seconds (timecode formatting, TimeRange)
//! - The workspace-wide error type
//! - Engine-wide timing defaults

pub mod error;
pub mod time;

pub use error::{Result, StagecutError};
pub use time::{format_timecode, trimmed_duration, TimeRange};

/// Engine-wide timing defaults.
pub mod defaults {
    /// Minimum project length shown on the timeline (seconds).
    pub const DEFAULT_PROJECT_DURATION: f64 = 60.0;

    /// Shortest source window a trim may leave behind (seconds).
    pub const MIN_CLIP_DURATION: f64 = 0.1;

    /// Length of a freshly added caption clip (seconds).
    pub const DEFAULT_CAPTION_DURATION: f64 = 5.0;

    /// How far a surface may lag or lead the global clock before it is
    /// snapped back (seconds).
    pub const DRIFT_TOLERANCE: f64 = 0.25;
}
