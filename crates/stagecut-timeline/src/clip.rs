//! Clip types for the timeline.

use serde::{Deserialize, Serialize};
use stagecut_core::defaults::DEFAULT_CAPTION_DURATION;
use stagecut_core::{trimmed_duration, TimeRange};
use uuid::Uuid;

use crate::track::TrackKind;

/// Display tags matching the timeline's track accents.
const VIDEO_COLOR: &str = "#3b82f6";
const AUDIO_COLOR: &str = "#22c55e";
const CAPTION_COLOR: &str = "#f97316";

/// Longest clip label derived from caption text.
const CAPTION_LABEL_CHARS: usize = 24;

/// What a clip plays back: a library asset, or overlay text with no backing
/// asset at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClipSource {
    Video { media_id: String },
    Audio { media_id: String },
    Caption { text: String },
}

impl ClipSource {
    /// Id of the backing asset, if there is one.
    pub fn media_id(&self) -> Option<&str> {
        match self {
            Self::Video { media_id } | Self::Audio { media_id } => Some(media_id),
            Self::Caption { .. } => None,
        }
    }

    /// True for overlay text clips.
    pub fn is_caption(&self) -> bool {
        matches!(self, Self::Caption { .. })
    }

    /// The kind of track this source belongs on.
    pub fn track_kind(&self) -> TrackKind {
        match self {
            Self::Video { .. } => TrackKind::Video,
            Self::Audio { .. } => TrackKind::Audio,
            Self::Caption { .. } => TrackKind::Caption,
        }
    }
}

/// A placed, trimmed instance on a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID
    pub id: Uuid,
    /// Owning track
    pub track_id: Uuid,
    /// Clip name (displayed in UI)
    pub name: String,
    /// What this clip plays back
    pub source: ClipSource,
    /// Trim window inside the source asset, seconds. Captions carry a
    /// synthetic window starting at zero.
    pub source_start: f64,
    pub source_end: f64,
    /// Position on the shared project timeline, seconds.
    pub timeline_start: f64,
    /// Display tag used by the presentation layer.
    pub color: String,
}

impl Clip {
    /// Create a full-width video clip over an imported asset.
    pub fn video(
        track_id: Uuid,
        name: impl Into<String>,
        media_id: impl Into<String>,
        duration: f64,
        timeline_start: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            track_id,
            name: name.into(),
            source: ClipSource::Video {
                media_id: media_id.into(),
            },
            source_start: 0.0,
            source_end: duration,
            timeline_start,
            color: VIDEO_COLOR.into(),
        }
    }

    /// Create a full-width audio clip over an imported asset.
    pub fn audio(
        track_id: Uuid,
        name: impl Into<String>,
        media_id: impl Into<String>,
        duration: f64,
        timeline_start: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            track_id,
            name: name.into(),
            source: ClipSource::Audio {
                media_id: media_id.into(),
            },
            source_start: 0.0,
            source_end: duration,
            timeline_start,
            color: AUDIO_COLOR.into(),
        }
    }

    /// Create a caption clip anchored at `timeline_start` with the default
    /// caption duration.
    pub fn caption(track_id: Uuid, text: impl Into<String>, timeline_start: f64) -> Self {
        let text = text.into();
        Self {
            id: Uuid::new_v4(),
            track_id,
            name: caption_label(&text),
            source: ClipSource::Caption { text },
            source_start: 0.0,
            source_end: DEFAULT_CAPTION_DURATION,
            timeline_start,
            color: CAPTION_COLOR.into(),
        }
    }

    /// On-timeline duration derived from the trim window.
    pub fn duration(&self) -> f64 {
        trimmed_duration(self.source_start, self.source_end)
    }

    /// End of the clip on the project timeline (exclusive).
    pub fn timeline_end(&self) -> f64 {
        self.timeline_start + self.duration()
    }

    /// The clip's window on the project timeline.
    pub fn timeline_range(&self) -> TimeRange {
        TimeRange::new(self.timeline_start, self.duration())
    }

    /// Whether the clip is audible/visible at the given project time.
    pub fn is_active_at(&self, time: f64) -> bool {
        self.timeline_range().contains(time)
    }

    /// Map a project time inside this clip's window to a position within the
    /// source asset.
    pub fn source_position_at(&self, time: f64) -> f64 {
        self.source_start + (time - self.timeline_start)
    }

    /// Caption body, for overlay clips.
    pub fn caption_text(&self) -> Option<&str> {
        match &self.source {
            ClipSource::Caption { text } => Some(text),
            _ => None,
        }
    }
}

/// Derive a short display label from caption text.
fn caption_label(text: &str) -> String {
    let mut label: String = text.chars().take(CAPTION_LABEL_CHARS).collect();
    if text.chars().count() > CAPTION_LABEL_CHARS {
        label.push('…');
    }
    label
}
