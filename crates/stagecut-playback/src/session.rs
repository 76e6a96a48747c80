//! The editor session: one project plus its ephemeral playback state.
//!
//! Groups the data model with the clock and the synchronizer in a single
//! explicit container — nothing here is ambient or module-global, and the
//! whole session is scoped to one open project. Only the project is worth
//! serializing; clock and surfaces are runtime state.
//!
//! `tick` fixes the per-frame order: advance the clock against the freshly
//! derived project duration, then reconcile surfaces. Because duration is
//! derived on read, any mutation made between ticks is already visible to
//! the clamping logic of the next tick.

use std::time::Instant;

use smallvec::SmallVec;
use stagecut_timeline::{Clip, Project};
use uuid::Uuid;

use crate::captions::active_captions;
use crate::clock::PlaybackClock;
use crate::sync::{ElementSync, MediaSurface};

/// What the presentation layer needs from one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Playhead position, seconds.
    pub time: f64,
    /// Whether the clock is still running after this tick.
    pub playing: bool,
    /// The video clip to display, if any is active.
    pub primary_video: Option<Uuid>,
}

/// All mutable editor state for one open project.
#[derive(Debug)]
pub struct EditorSession<S> {
    /// The data model. Mutations go through the engine methods on
    /// [`Project`]; they take effect on the next tick.
    pub project: Project,
    clock: PlaybackClock,
    sync: ElementSync<S>,
}

impl<S: MediaSurface + Default> EditorSession<S> {
    /// Wrap a project in a fresh session: paused at zero, mute off.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            clock: PlaybackClock::new(),
            sync: ElementSync::new(),
        }
    }

    /// Read access to the clock.
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Read access to the synchronizer (surfaces, primary, mute).
    pub fn sync(&self) -> &ElementSync<S> {
        &self.sync
    }

    /// Advance one frame: clock first, then surface reconciliation.
    pub fn tick(&mut self, now: Instant) -> FrameState {
        let duration = self.project.duration();
        let time = self.clock.tick(now, duration);
        let playing = self.clock.is_playing();
        let primary_video = self.sync.reconcile(&self.project, time, playing);
        FrameState {
            time,
            playing,
            primary_video,
        }
    }

    /// Play/pause toggle.
    pub fn toggle_playback(&mut self, now: Instant) {
        let duration = self.project.duration();
        self.clock.toggle(duration, now);
    }

    /// Jump the playhead.
    pub fn seek(&mut self, time: f64, now: Instant) {
        let duration = self.project.duration();
        self.clock.seek(time, duration, now);
    }

    /// Transport skip (e.g. ±10s).
    pub fn skip(&mut self, delta: f64, now: Instant) {
        let duration = self.project.duration();
        self.clock.skip(delta, duration, now);
    }

    /// Global mute toggle.
    pub fn set_muted(&mut self, muted: bool) {
        self.sync.set_muted(muted);
    }

    /// Captions visible at the current playhead, in track order.
    pub fn captions_at_playhead(&self) -> SmallVec<[&Clip; 2]> {
        active_captions(&self.project, self.clock.current_time())
    }
}
