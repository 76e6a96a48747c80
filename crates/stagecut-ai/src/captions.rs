//! Caption generation flow.
//!
//! The collaborator sees the clip's source video and a target language and
//! answers with caption text. The result lands back in the project as a
//! caption clip on a fresh track, anchored where the source clip starts.

use serde::{Deserialize, Serialize};
use stagecut_core::{Result, StagecutError};
use stagecut_timeline::{EditReceipt, Project, TrackKind};
use uuid::Uuid;

use crate::error::AiResult;

/// Input to the caption generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    /// The clip's source video, full encoded content.
    pub video_data_uri: String,
    /// Language the captions should be written in.
    pub language: String,
}

/// The generator's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    /// Generated caption text.
    pub captions: String,
}

/// The external caption generation collaborator.
pub trait CaptionGenerator: Send + Sync {
    fn generate(&self, request: &CaptionRequest) -> AiResult<CaptionResponse>;
}

/// Build a request for a clip. Only video clips with a resolvable source
/// asset qualify.
pub fn caption_request_for(
    project: &Project,
    clip_id: Uuid,
    language: &str,
) -> Result<CaptionRequest> {
    let clip = project
        .find_clip(clip_id)
        .ok_or_else(|| StagecutError::ClipNotFound(clip_id.to_string()))?;
    if clip.source.track_kind() != TrackKind::Video {
        return Err(StagecutError::UnsupportedMedia(
            "captions can only be generated for video clips".into(),
        ));
    }
    let media = project
        .clip_media(clip)
        .ok_or_else(|| StagecutError::MediaNotFound(clip.name.clone()))?;
    Ok(CaptionRequest {
        video_data_uri: media.data_uri.clone(),
        language: language.to_string(),
    })
}

/// Turn a completed generation into a caption clip anchored at the source
/// clip's timeline position. Fails with `ClipNotFound` when the source clip
/// was deleted while the request was in flight — callers discard that case.
pub fn apply_captions(
    project: &mut Project,
    source_clip_id: Uuid,
    response: &CaptionResponse,
) -> Result<EditReceipt> {
    let anchor = project
        .find_clip(source_clip_id)
        .ok_or_else(|| StagecutError::ClipNotFound(source_clip_id.to_string()))?
        .timeline_start;
    project.add_text_caption(&response.captions, anchor)
}
