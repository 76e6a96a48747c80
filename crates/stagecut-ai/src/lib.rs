//! StageCut AI - External assistant collaborators
//!
//! Three request/response flows, each behind a trait the shell implements
//! against whatever model service it talks to:
//! - [`captions`] — caption text for a video clip
//! - [`prompt_edit`] — prompt-driven trim suggestions
//! - [`music`] — background music suggestions (advisory text only)
//!
//! [`bridge`] runs collaborator calls off the event thread and hands tagged
//! completions back through a channel; results for clips that no longer
//! exist are discarded rather than applied.

pub mod bridge;
pub mod captions;
pub mod error;
pub mod music;
pub mod prompt_edit;

pub use bridge::{apply_completion, AiBridge, AiCompletion};
pub use captions::{
    apply_captions, caption_request_for, CaptionGenerator, CaptionRequest, CaptionResponse,
};
pub use error::{AiError, AiResult};
pub use music::{MusicAdvisor, MusicSuggestion, MusicSuggestionRequest};
pub use prompt_edit::{
    apply_suggestion, edit_request_for, EditAdvisor, EditSuggestion, EditSuggestionRequest,
    SuggestionOutcome,
};
