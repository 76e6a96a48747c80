//! Background music suggestions.
//!
//! Purely advisory: the collaborator looks at the video and answers with
//! text the user can read. Nothing is added to the timeline.

use serde::{Deserialize, Serialize};

use crate::error::AiResult;

/// Input to the music advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicSuggestionRequest {
    /// The clip's source video, full encoded content.
    pub video_data_uri: String,
}

/// The advisor's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicSuggestion {
    /// Free-form suggestion text.
    pub suggestions: String,
}

/// The external music suggestion collaborator.
pub trait MusicAdvisor: Send + Sync {
    fn suggest_music(&self, request: &MusicSuggestionRequest) -> AiResult<MusicSuggestion>;
}
