//! Clip and track mutation operations.
//!
//! Every edit to the project funnels through the methods here: import,
//! captions, deletion, trims, and drag repositioning. Trim validation and
//! repair live in one place so no caller can leave a clip with an empty
//! source window. Each operation either commits fully and returns a receipt
//! for the notification layer, or errors and leaves the project untouched.

use stagecut_core::defaults::MIN_CLIP_DURATION;
use stagecut_core::{format_timecode, Result, StagecutError};
use tracing::info;
use uuid::Uuid;

use crate::clip::Clip;
use crate::media::{MediaFile, MediaKind, ProbedMedia};
use crate::project::Project;
use crate::track::{Track, TrackKind};

/// Partial update of a clip's timing fields. Absent fields are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipTimesPatch {
    pub source_start: Option<f64>,
    pub source_end: Option<f64>,
    pub timeline_start: Option<f64>,
}

/// Outcome of a successful mutation, for user-facing notifications.
#[derive(Debug, Clone)]
pub struct EditReceipt {
    /// Human-readable summary of what happened.
    pub message: String,
    /// The clip the operation created or removed.
    pub clip_id: Uuid,
    /// The track it landed on (or was removed from).
    pub track_id: Uuid,
    /// The media asset created, for imports.
    pub media_id: Option<String>,
}

impl Project {
    /// Import a probed file: register the asset and place a full-width clip
    /// for it on the timeline.
    ///
    /// Placement policy: the clip appends after the last clip of the first
    /// existing track of its kind; a track is created only when none of the
    /// kind exists yet (the new clip then starts at zero).
    pub fn add_media(&mut self, probed: ProbedMedia, imported_at_ms: u64) -> Result<EditReceipt> {
        let track_kind = match MediaKind::from_mime(&probed.mime_type) {
            MediaKind::Video => TrackKind::Video,
            MediaKind::Audio => TrackKind::Audio,
            MediaKind::Other => {
                return Err(StagecutError::UnsupportedMedia(probed.mime_type));
            }
        };
        if probed.duration <= 0.0 {
            return Err(StagecutError::ProbeFailed(probed.name));
        }

        let media = MediaFile::new(probed, imported_at_ms);

        let track_index = match self.tracks.iter().position(|t| t.kind == track_kind) {
            Some(index) => index,
            None => {
                self.tracks.push(Track::new(track_kind, 1));
                self.tracks.len() - 1
            }
        };
        let track = &mut self.tracks[track_index];
        let timeline_start = track.end_time();

        let clip = match track_kind {
            TrackKind::Video => Clip::video(
                track.id,
                media.name.clone(),
                media.id.clone(),
                media.duration,
                timeline_start,
            ),
            _ => Clip::audio(
                track.id,
                media.name.clone(),
                media.id.clone(),
                media.duration,
                timeline_start,
            ),
        };

        let receipt = EditReceipt {
            message: format!(
                "Added \"{}\" to {} ({})",
                media.name,
                track.name,
                format_timecode(media.duration)
            ),
            clip_id: clip.id,
            track_id: track.id,
            media_id: Some(media.id.clone()),
        };
        info!(media = %media.name, track = %track.name, "imported media");

        track.push_clip(clip);
        self.library.insert(media);
        Ok(receipt)
    }

    /// Add a text caption anchored at `at` seconds on the timeline.
    ///
    /// Captions always get a brand-new track; they never merge into an
    /// existing one.
    pub fn add_text_caption(&mut self, text: &str, at: f64) -> Result<EditReceipt> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StagecutError::EmptyInput);
        }

        let ordinal = self
            .tracks
            .iter()
            .filter(|t| t.kind == TrackKind::Caption)
            .count()
            + 1;
        let mut track = Track::new(TrackKind::Caption, ordinal);
        let clip = Clip::caption(track.id, text, at);

        let receipt = EditReceipt {
            message: format!("Added caption at {}", format_timecode(at)),
            clip_id: clip.id,
            track_id: track.id,
            media_id: None,
        };
        info!(track = %track.name, at, "added caption");

        track.push_clip(clip);
        self.tracks.push(track);
        Ok(receipt)
    }

    /// Delete the selected clip, pruning its track if that empties it and
    /// renumbering the remaining tracks of the same kind.
    pub fn delete_selected(&mut self) -> Result<EditReceipt> {
        let clip_id = self
            .selected_clip_id
            .ok_or(StagecutError::NothingSelected)?;
        let track_index = self
            .tracks
            .iter()
            .position(|t| t.find_clip(clip_id).is_some())
            .ok_or_else(|| StagecutError::ClipNotFound(clip_id.to_string()))?;

        let track_id = self.tracks[track_index].id;
        let kind = self.tracks[track_index].kind;
        let removed = match self.tracks[track_index].remove_clip(clip_id) {
            Some(clip) => clip,
            None => return Err(StagecutError::ClipNotFound(clip_id.to_string())),
        };

        if self.tracks[track_index].is_empty() {
            self.tracks.remove(track_index);
        }
        self.renumber_tracks(kind);
        self.selected_clip_id = None;
        info!(clip = %removed.name, "deleted clip");

        Ok(EditReceipt {
            message: format!("Removed \"{}\"", removed.name),
            clip_id,
            track_id,
            media_id: None,
        })
    }

    /// Update a clip's trim window and/or timeline position.
    ///
    /// Media clips are clamped to `[0, media duration]` and repaired toward
    /// a minimal window when the patch collapses them; an unrepairable patch
    /// is rejected whole, leaving the clip exactly as it was. Caption clips
    /// keep a synthetic window pinned at zero or later with a minimum
    /// duration. `timeline_start` is applied verbatim, with no collision
    /// checks against other clips.
    pub fn update_clip_times(&mut self, clip_id: Uuid, patch: ClipTimesPatch) -> Result<()> {
        let media_duration = {
            let clip = self
                .find_clip(clip_id)
                .ok_or_else(|| StagecutError::ClipNotFound(clip_id.to_string()))?;
            match clip.source.media_id() {
                Some(media_id) => Some(
                    self.library
                        .get(media_id)
                        .ok_or_else(|| StagecutError::MediaNotFound(media_id.to_string()))?
                        .duration,
                ),
                None => None,
            }
        };

        let clip = self
            .find_clip_mut(clip_id)
            .ok_or_else(|| StagecutError::ClipNotFound(clip_id.to_string()))?;

        match media_duration {
            Some(limit) => apply_media_trim(clip, patch, limit)?,
            None => apply_caption_trim(clip, patch),
        }
        if let Some(timeline_start) = patch.timeline_start {
            clip.timeline_start = timeline_start;
        }
        Ok(())
    }

    /// Reposition a clip on the timeline (drag-drop funnels through here).
    pub fn move_clip(&mut self, clip_id: Uuid, timeline_start: f64) -> Result<()> {
        self.update_clip_times(
            clip_id,
            ClipTimesPatch {
                timeline_start: Some(timeline_start),
                ..ClipTimesPatch::default()
            },
        )
    }

    /// Rename tracks of one kind so their numbers stay dense.
    fn renumber_tracks(&mut self, kind: TrackKind) {
        let mut ordinal = 0;
        for track in self.tracks.iter_mut().filter(|t| t.kind == kind) {
            ordinal += 1;
            track.name = Track::numbered_name(kind, ordinal);
        }
    }
}

/// Clamp and repair a media clip's trim window.
///
/// Repair rule for a collapsed window (shorter than the minimum duration
/// after clamping, including `start >= end`): when only one edge moved, push
/// that edge back to leave the minimum; when both moved, pin a minimal
/// window at whichever source bound was hit. A window that is still invalid
/// afterwards rejects the whole update.
fn apply_media_trim(clip: &mut Clip, patch: ClipTimesPatch, media_duration: f64) -> Result<()> {
    let mut start = patch.source_start.unwrap_or(clip.source_start).max(0.0);
    let mut end = patch.source_end.unwrap_or(clip.source_end).min(media_duration);

    if end - start < MIN_CLIP_DURATION {
        match (patch.source_start.is_some(), patch.source_end.is_some()) {
            (true, false) => start = end - MIN_CLIP_DURATION,
            (false, true) => end = start + MIN_CLIP_DURATION,
            _ => {
                if start + MIN_CLIP_DURATION <= media_duration {
                    end = start + MIN_CLIP_DURATION;
                } else {
                    end = media_duration;
                    start = end - MIN_CLIP_DURATION;
                }
            }
        }
    }

    if !(start >= 0.0 && end <= media_duration && start < end) {
        return Err(StagecutError::InvalidTrim(clip.name.clone()));
    }
    clip.source_start = start;
    clip.source_end = end;
    Ok(())
}

/// Caption trim: the synthetic window stays pinned at zero or later and
/// keeps the minimum duration. Never fails.
fn apply_caption_trim(clip: &mut Clip, patch: ClipTimesPatch) {
    let start = patch.source_start.unwrap_or(clip.source_start).max(0.0);
    let end = patch
        .source_end
        .unwrap_or(clip.source_end)
        .max(start + MIN_CLIP_DURATION);
    clip.source_start = start;
    clip.source_end = end;
}
