//! Track types for the timeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clip::Clip;

/// Kind of track. Every track holds clips of exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
    Caption,
}

impl TrackKind {
    /// Human label used in numbered track names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Caption => "Caption",
        }
    }
}

/// An ordered, type-homogeneous lane of clips on the project timeline.
///
/// Clips are kept in insertion order; overlapping timeline windows within a
/// track are permitted and not arbitrated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: Uuid,
    /// Display name, sequentially numbered per kind
    pub name: String,
    /// Track kind
    pub kind: TrackKind,
    /// Clips in insertion order
    pub clips: Vec<Clip>,
}

impl Track {
    /// Create an empty track with the given sequence number.
    pub fn new(kind: TrackKind, ordinal: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Self::numbered_name(kind, ordinal),
            kind,
            clips: Vec::new(),
        }
    }

    /// Display name for the `ordinal`-th track of a kind.
    pub fn numbered_name(kind: TrackKind, ordinal: usize) -> String {
        format!("{} Track {}", kind.label(), ordinal)
    }

    /// Add a clip to the end of the track.
    pub fn push_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Find a clip by id.
    pub fn find_clip(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Find a clip mutably by id.
    pub fn find_clip_mut(&mut self, id: Uuid) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == id)
    }

    /// Remove a clip by id. Returns the removed clip.
    pub fn remove_clip(&mut self, id: Uuid) -> Option<Clip> {
        let index = self.clips.iter().position(|c| c.id == id)?;
        Some(self.clips.remove(index))
    }

    /// Latest timeline end over all clips, or zero for an empty track.
    pub fn end_time(&self) -> f64 {
        self.clips
            .iter()
            .map(|c| c.timeline_end())
            .fold(0.0, f64::max)
    }

    /// First clip (in insertion order) whose window contains `time`.
    pub fn first_active_at(&self, time: f64) -> Option<&Clip> {
        self.clips.iter().find(|c| c.is_active_at(time))
    }

    /// True when the track holds no clips.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
