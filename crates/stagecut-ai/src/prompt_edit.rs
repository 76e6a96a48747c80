//! Prompt-driven trim suggestions.
//!
//! The collaborator sees the clip's source video and a free-form prompt and
//! may answer with new trim bounds. Whatever comes back goes through the
//! mutation engine's `update_clip_times`, so suggested windows get the same
//! clamping and repair as manual trims.

use serde::{Deserialize, Serialize};
use stagecut_core::{Result, StagecutError};
use stagecut_timeline::{ClipTimesPatch, Project, TrackKind};
use uuid::Uuid;

use crate::error::AiResult;

/// Input to the edit advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditSuggestionRequest {
    /// The clip's source video, full encoded content.
    pub video_data_uri: String,
    /// What the user asked for.
    pub prompt: String,
}

/// The advisor's answer: new trim bounds, either or both optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EditSuggestion {
    pub new_source_start: Option<f64>,
    pub new_source_end: Option<f64>,
}

impl EditSuggestion {
    /// True when the advisor had nothing to suggest.
    pub fn is_empty(&self) -> bool {
        self.new_source_start.is_none() && self.new_source_end.is_none()
    }
}

/// The external prompt-edit collaborator.
pub trait EditAdvisor: Send + Sync {
    fn suggest(&self, request: &EditSuggestionRequest) -> AiResult<EditSuggestion>;
}

/// What applying a suggestion amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The trim was applied (possibly repaired by the mutation engine).
    Applied,
    /// The advisor suggested no fields; the clip is untouched.
    NothingSuggested,
}

impl SuggestionOutcome {
    /// User-facing notification text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Applied => "Applied the suggested trim",
            Self::NothingSuggested => "The assistant had no trim to suggest",
        }
    }
}

/// Build a request for a clip. Only video clips with a resolvable source
/// asset qualify.
pub fn edit_request_for(
    project: &Project,
    clip_id: Uuid,
    prompt: &str,
) -> Result<EditSuggestionRequest> {
    let clip = project
        .find_clip(clip_id)
        .ok_or_else(|| StagecutError::ClipNotFound(clip_id.to_string()))?;
    if clip.source.track_kind() != TrackKind::Video {
        return Err(StagecutError::UnsupportedMedia(
            "prompt edits only apply to video clips".into(),
        ));
    }
    let media = project
        .clip_media(clip)
        .ok_or_else(|| StagecutError::MediaNotFound(clip.name.clone()))?;
    Ok(EditSuggestionRequest {
        video_data_uri: media.data_uri.clone(),
        prompt: prompt.to_string(),
    })
}

/// Apply a suggestion to the clip it was requested for, via the mutation
/// engine. Only the suggested fields are patched.
pub fn apply_suggestion(
    project: &mut Project,
    clip_id: Uuid,
    suggestion: &EditSuggestion,
) -> Result<SuggestionOutcome> {
    if suggestion.is_empty() {
        return Ok(SuggestionOutcome::NothingSuggested);
    }
    project.update_clip_times(
        clip_id,
        ClipTimesPatch {
            source_start: suggestion.new_source_start,
            source_end: suggestion.new_source_end,
            timeline_start: None,
        },
    )?;
    Ok(SuggestionOutcome::Applied)
}
