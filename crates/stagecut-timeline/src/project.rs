//! The project aggregate and derived duration.

use serde::{Deserialize, Serialize};
use stagecut_core::defaults::DEFAULT_PROJECT_DURATION;
use uuid::Uuid;

use crate::clip::Clip;
use crate::media::{MediaFile, MediaLibrary};
use crate::track::Track;

/// The whole editing session model: imported assets, tracks of clips, and
/// the single (optional) selection.
///
/// Project duration is never stored — it is derived on every read from the
/// live clip set, so no mutation path can leave it stale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Imported source assets.
    pub library: MediaLibrary,
    /// Tracks in declaration order.
    pub tracks: Vec<Track>,
    /// At most one selected clip.
    pub selected_clip_id: Option<Uuid>,
}

impl Project {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overall project length: the latest clip end on the timeline, floored
    /// at the default minimum.
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .flat_map(|t| t.clips.iter())
            .map(|c| c.timeline_end())
            .fold(DEFAULT_PROJECT_DURATION, f64::max)
    }

    /// Find a clip anywhere in the project.
    pub fn find_clip(&self, id: Uuid) -> Option<&Clip> {
        self.tracks.iter().find_map(|t| t.find_clip(id))
    }

    /// Find a clip mutably anywhere in the project.
    pub fn find_clip_mut(&mut self, id: Uuid) -> Option<&mut Clip> {
        self.tracks.iter_mut().find_map(|t| t.find_clip_mut(id))
    }

    /// The track owning the given clip.
    pub fn track_of_clip(&self, id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.find_clip(id).is_some())
    }

    /// Resolve a clip's backing asset, when it has one.
    pub fn clip_media(&self, clip: &Clip) -> Option<&MediaFile> {
        clip.source.media_id().and_then(|id| self.library.get(id))
    }

    /// Select a clip. Selecting an id not present in the project clears the
    /// selection instead.
    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected_clip_id = id.filter(|id| self.find_clip(*id).is_some());
    }

    /// The currently selected clip, if any.
    pub fn selected_clip(&self) -> Option<&Clip> {
        self.selected_clip_id.and_then(|id| self.find_clip(id))
    }
}
