//! AI collaborator flows applied through the real mutation engine.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use stagecut_ai::{
    apply_completion, caption_request_for, AiBridge, AiResult, CaptionGenerator, CaptionRequest,
    CaptionResponse, EditSuggestion,
};
use stagecut_timeline::TrackKind;

use crate::support::{probed, project_with_video};

struct CannedGenerator(&'static str);

impl CaptionGenerator for CannedGenerator {
    fn generate(&self, _request: &CaptionRequest) -> AiResult<CaptionResponse> {
        Ok(CaptionResponse {
            captions: self.0.to_string(),
        })
    }
}

fn drain_one(bridge: &AiBridge) -> stagecut_ai::AiCompletion {
    for _ in 0..200 {
        if let Some(completion) = bridge.poll().pop() {
            return completion;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("bridge never completed");
}

#[test]
fn generated_captions_become_a_clip_on_a_fresh_track() {
    let (mut project, clip_id) = project_with_video(20.0);
    project.move_clip(clip_id, 5.0).unwrap();

    let request = caption_request_for(&project, clip_id, "en").unwrap();
    let bridge = AiBridge::new();
    bridge.request_captions(Arc::new(CannedGenerator("hello world")), clip_id, request);

    let message = apply_completion(&mut project, drain_one(&bridge)).unwrap();
    assert!(message.contains("caption"));

    let caption_track = project
        .tracks
        .iter()
        .find(|t| t.kind == TrackKind::Caption)
        .unwrap();
    let caption = &caption_track.clips[0];
    assert_eq!(caption.timeline_start, 5.0);
    assert_eq!(caption.caption_text(), Some("hello world"));
}

#[test]
fn caption_requests_require_a_video_clip() {
    let (mut project, _) = project_with_video(20.0);
    let audio = project
        .add_media(probed("song.mp3", "audio/mpeg", 10.0), 2)
        .unwrap();
    assert!(caption_request_for(&project, audio.clip_id, "en").is_err());
}

#[test]
fn trim_suggestions_go_through_the_mutation_engine() {
    let (mut project, clip_id) = project_with_video(20.0);

    // A suggestion far out of range gets the same clamping as a manual trim.
    let outcome = stagecut_ai::prompt_edit::apply_suggestion(
        &mut project,
        clip_id,
        &EditSuggestion {
            new_source_start: Some(-10.0),
            new_source_end: Some(500.0),
        },
    )
    .unwrap();
    assert_eq!(outcome, stagecut_ai::SuggestionOutcome::Applied);
    let clip = project.find_clip(clip_id).unwrap();
    assert_eq!((clip.source_start, clip.source_end), (0.0, 20.0));

    // No suggested fields: a distinct no-op, clip untouched.
    let outcome =
        stagecut_ai::prompt_edit::apply_suggestion(&mut project, clip_id, &EditSuggestion::default())
            .unwrap();
    assert_eq!(outcome, stagecut_ai::SuggestionOutcome::NothingSuggested);
}

#[test]
fn completions_for_deleted_clips_vanish_silently() {
    let (mut project, clip_id) = project_with_video(20.0);
    let request = caption_request_for(&project, clip_id, "en").unwrap();
    let bridge = AiBridge::new();
    bridge.request_captions(Arc::new(CannedGenerator("late")), clip_id, request);

    project.select(Some(clip_id));
    project.delete_selected().unwrap();

    let message = apply_completion(&mut project, drain_one(&bridge));
    assert_eq!(message, None);
    assert!(project.tracks.is_empty());
}
