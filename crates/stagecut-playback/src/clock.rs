//! The authoritative playback clock.
//!
//! Owns the global playhead and the playing/paused state. Time advances by
//! wall-clock deltas accumulated tick over tick — each tick re-anchors to
//! "now", so irregular frame cadence never drifts the playhead. All entry
//! points take the current `Instant` explicitly, which keeps the clock
//! deterministic under test.

use std::time::Instant;

use crate::scheduler::TickHandle;

/// Two-state playback clock: paused (initial) or playing.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    time: f64,
    anchor: Option<Instant>,
    handle: TickHandle,
}

impl PlaybackClock {
    /// Create a paused clock at time zero.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            anchor: None,
            handle: TickHandle::new(),
        }
    }

    /// Current playhead position, seconds.
    pub fn current_time(&self) -> f64 {
        self.time
    }

    /// Whether the update loop is running.
    pub fn is_playing(&self) -> bool {
        self.handle.is_running()
    }

    /// Start playback. A playhead already at or past the end restarts from
    /// zero.
    pub fn play(&mut self, project_duration: f64, now: Instant) {
        if self.time >= project_duration {
            self.time = 0.0;
        }
        self.anchor = Some(now);
        self.handle.start();
    }

    /// Stop playback, retaining the playhead position.
    pub fn pause(&mut self) {
        self.handle.stop();
        self.anchor = None;
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self, project_duration: f64, now: Instant) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(project_duration, now);
        }
    }

    /// Jump the playhead, clamped to `[0, project_duration]`, in either
    /// state. While playing, the wall-clock anchor is reset so the next tick
    /// measures from the seek point, and the loop is kept running.
    pub fn seek(&mut self, time: f64, project_duration: f64, now: Instant) {
        self.time = time.clamp(0.0, project_duration);
        if self.is_playing() {
            self.anchor = Some(now);
            self.handle.start();
        }
    }

    /// Seek relative to the current playhead (transport skip buttons).
    pub fn skip(&mut self, delta: f64, project_duration: f64, now: Instant) {
        self.seek(self.time + delta, project_duration, now);
    }

    /// Advance the playhead by the wall-clock delta since the last tick.
    /// Returns the (possibly clamped) playhead. A paused clock ignores
    /// ticks entirely. Reaching the project end clamps and auto-pauses.
    pub fn tick(&mut self, now: Instant, project_duration: f64) -> f64 {
        if !self.handle.is_running() {
            return self.time;
        }
        let delta = self
            .anchor
            .map(|anchor| now.duration_since(anchor).as_secs_f64())
            .unwrap_or(0.0);
        self.time += delta;
        self.anchor = Some(now);
        if self.time >= project_duration {
            self.time = project_duration;
            self.pause();
        }
        self.time
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
