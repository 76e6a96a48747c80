//! Multi-element playback synchronization.
//!
//! Every non-caption clip gets one backing media surface. Each tick the
//! synchronizer reconciles all of them against the global clock: loads
//! sources, snaps drifted positions, propagates play/pause across the
//! active-window boundary, picks the single primary video surface, and
//! routes mute state. Surfaces for hidden videos stay loaded so switching
//! the primary never pays a reload.

use std::collections::{HashMap, HashSet};

use stagecut_core::defaults::DRIFT_TOLERANCE;
use stagecut_timeline::{MediaFile, Project, TrackKind};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// A surface refused to start playback (autoplay policy, not enough data
/// after all, runtime teardown). The synchronizer logs it and retries on a
/// later tick.
#[derive(Debug, Error)]
#[error("playback rejected: {0}")]
pub struct PlayRejected(pub String);

/// A decodable, displayable media element owned by the presentation runtime.
///
/// The engine never decodes media itself — it drives these through position,
/// play state, mute, and visibility. Implementations wrap whatever the host
/// runtime renders with.
pub trait MediaSurface {
    /// Id of the asset currently loaded, if any.
    fn loaded_media(&self) -> Option<&str>;

    /// Assign and (re)load a source asset.
    fn load(&mut self, media: &MediaFile);

    /// Current position within the source, seconds.
    fn position(&self) -> f64;

    /// Jump to a position within the source.
    fn set_position(&mut self, seconds: f64);

    /// True while an earlier `set_position` is still settling.
    fn is_seeking(&self) -> bool;

    fn is_playing(&self) -> bool;

    /// Enough data buffered to start playback.
    fn is_ready(&self) -> bool;

    fn play(&mut self) -> Result<(), PlayRejected>;

    fn pause(&mut self);

    fn set_muted(&mut self, muted: bool);

    fn set_visible(&mut self, visible: bool);
}

/// Reconciles the per-clip surfaces against the global clock.
#[derive(Debug)]
pub struct ElementSync<S> {
    surfaces: HashMap<Uuid, S>,
    muted: bool,
    primary_video: Option<Uuid>,
}

impl<S: MediaSurface + Default> ElementSync<S> {
    /// Create a synchronizer with no surfaces and mute off.
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
            muted: false,
            primary_video: None,
        }
    }

    /// Global mute toggle: silences the primary video and all audio
    /// surfaces. Non-primary videos are muted regardless.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The video clip currently chosen for visible, unmuted display.
    pub fn primary_video(&self) -> Option<Uuid> {
        self.primary_video
    }

    /// The surface backing a clip, once reconciliation has created it.
    pub fn surface(&self, clip_id: Uuid) -> Option<&S> {
        self.surfaces.get(&clip_id)
    }

    /// Reconcile every surface against the clock. Runs on every tick; also
    /// safe to call directly after a clip-set change.
    ///
    /// Returns the primary video clip for this tick, if any video clip is
    /// active.
    pub fn reconcile(&mut self, project: &Project, time: f64, playing: bool) -> Option<Uuid> {
        self.prune_deleted(project);
        let primary = select_primary(project, time);

        for track in &project.tracks {
            if track.kind == TrackKind::Caption {
                continue;
            }
            for clip in &track.clips {
                let media = match project.clip_media(clip) {
                    Some(media) => media,
                    None => {
                        warn!(clip = %clip.name, "clip has no resolvable media; skipping");
                        continue;
                    }
                };
                let surface = self.surfaces.entry(clip.id).or_default();

                if surface.loaded_media() != Some(media.id.as_str()) {
                    surface.load(media);
                }

                if clip.is_active_at(time) {
                    let target = clip.source_position_at(time);
                    if (surface.position() - target).abs() > DRIFT_TOLERANCE
                        && !surface.is_seeking()
                    {
                        surface.set_position(target);
                    }
                    if playing && !surface.is_playing() && surface.is_ready() {
                        if let Err(err) = surface.play() {
                            warn!(clip = %clip.name, %err, "surface refused to start");
                        }
                    } else if !playing && surface.is_playing() {
                        surface.pause();
                    }
                } else if surface.is_playing() {
                    surface.pause();
                }

                match track.kind {
                    TrackKind::Video => {
                        let is_primary = primary == Some(clip.id);
                        surface.set_visible(is_primary);
                        surface.set_muted(if is_primary { self.muted } else { true });
                    }
                    TrackKind::Audio => {
                        surface.set_visible(false);
                        surface.set_muted(self.muted);
                    }
                    TrackKind::Caption => {}
                }
            }
        }

        self.primary_video = primary;
        primary
    }

    /// Drop surfaces whose clips no longer exist. Surfaces for live clips
    /// are kept loaded even while hidden.
    fn prune_deleted(&mut self, project: &Project) {
        let live: HashSet<Uuid> = project
            .tracks
            .iter()
            .filter(|t| t.kind != TrackKind::Caption)
            .flat_map(|t| t.clips.iter().map(|c| c.id))
            .collect();
        self.surfaces.retain(|clip_id, _| live.contains(clip_id));
    }
}

impl<S: MediaSurface + Default> Default for ElementSync<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the single primary video clip for a tick: later-declared video
/// tracks win over earlier ones; within a track, the first active clip.
fn select_primary(project: &Project, time: f64) -> Option<Uuid> {
    project
        .tracks
        .iter()
        .rev()
        .filter(|t| t.kind == TrackKind::Video)
        .find_map(|t| t.first_active_at(time).map(|c| c.id))
}
