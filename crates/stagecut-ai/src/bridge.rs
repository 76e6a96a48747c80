//! Asynchronous dispatch for AI collaborators.
//!
//! The core stays single-threaded; collaborator calls run on worker threads
//! and send tagged completions back over a channel the event thread drains
//! between frames. Every request carries the clip id it targets: a
//! completion whose clip has since been deleted is discarded instead of
//! applied. An in-flight registry refuses a second request for a clip whose
//! first one has not come back yet.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use stagecut_timeline::Project;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::captions::{self, CaptionGenerator, CaptionRequest, CaptionResponse};
use crate::error::AiResult;
use crate::music::{MusicAdvisor, MusicSuggestion, MusicSuggestionRequest};
use crate::prompt_edit::{self, EditAdvisor, EditSuggestion, EditSuggestionRequest};

/// A finished collaborator call, tagged with its target.
#[derive(Debug)]
pub enum AiCompletion {
    Captions {
        clip_id: Uuid,
        result: AiResult<CaptionResponse>,
    },
    Trim {
        clip_id: Uuid,
        result: AiResult<EditSuggestion>,
    },
    Music {
        result: AiResult<MusicSuggestion>,
    },
}

/// Dispatches collaborator calls and collects their completions.
pub struct AiBridge {
    tx: Sender<AiCompletion>,
    rx: Receiver<AiCompletion>,
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl AiBridge {
    /// Create a bridge with nothing in flight.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// True while a request for this clip has not completed yet.
    pub fn is_in_flight(&self, clip_id: Uuid) -> bool {
        self.in_flight.lock().contains(&clip_id)
    }

    /// Run a caption generation off-thread. Returns `false` (and does
    /// nothing) when a request for this clip is already in flight.
    pub fn request_captions(
        &self,
        generator: Arc<dyn CaptionGenerator>,
        clip_id: Uuid,
        request: CaptionRequest,
    ) -> bool {
        if !self.in_flight.lock().insert(clip_id) {
            debug!(%clip_id, "caption request already in flight");
            return false;
        }
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        thread::spawn(move || {
            let result = generator.generate(&request);
            in_flight.lock().remove(&clip_id);
            let _ = tx.send(AiCompletion::Captions { clip_id, result });
        });
        true
    }

    /// Run a trim suggestion off-thread. Same in-flight rule as captions.
    pub fn request_trim(
        &self,
        advisor: Arc<dyn EditAdvisor>,
        clip_id: Uuid,
        request: EditSuggestionRequest,
    ) -> bool {
        if !self.in_flight.lock().insert(clip_id) {
            debug!(%clip_id, "trim request already in flight");
            return false;
        }
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        thread::spawn(move || {
            let result = advisor.suggest(&request);
            in_flight.lock().remove(&clip_id);
            let _ = tx.send(AiCompletion::Trim { clip_id, result });
        });
        true
    }

    /// Run a music suggestion off-thread. Advisory only, so there is no
    /// clip to tag or dedupe on.
    pub fn request_music(&self, advisor: Arc<dyn MusicAdvisor>, request: MusicSuggestionRequest) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = advisor.suggest_music(&request);
            let _ = tx.send(AiCompletion::Music { result });
        });
    }

    /// Drain finished completions without blocking. Called once per frame
    /// from the event thread.
    pub fn poll(&self) -> Vec<AiCompletion> {
        self.rx.try_iter().collect()
    }
}

impl Default for AiBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one drained completion to the project and produce the notification
/// to show, if any. Stale completions — the target clip was deleted while
/// the call ran — are dropped here.
pub fn apply_completion(project: &mut Project, completion: AiCompletion) -> Option<String> {
    match completion {
        AiCompletion::Captions { clip_id, result } => match result {
            Ok(response) => {
                if project.find_clip(clip_id).is_none() {
                    debug!(%clip_id, "discarding stale caption result");
                    return None;
                }
                match captions::apply_captions(project, clip_id, &response) {
                    Ok(receipt) => Some(receipt.message),
                    Err(err) => Some(format!("Caption generation failed: {err}")),
                }
            }
            Err(err) => Some(format!("Caption generation failed: {err}")),
        },
        AiCompletion::Trim { clip_id, result } => match result {
            Ok(suggestion) => {
                if project.find_clip(clip_id).is_none() {
                    debug!(%clip_id, "discarding stale trim suggestion");
                    return None;
                }
                match prompt_edit::apply_suggestion(project, clip_id, &suggestion) {
                    Ok(outcome) => Some(outcome.message().to_string()),
                    Err(err) => Some(format!("Could not apply the suggested trim: {err}")),
                }
            }
            Err(err) => Some(format!("Edit suggestion failed: {err}")),
        },
        AiCompletion::Music { result } => match result {
            Ok(suggestion) => Some(suggestion.suggestions),
            Err(err) => {
                warn!(%err, "music suggestion failed");
                Some(format!("Music suggestion failed: {err}"))
            }
        },
    }
}
