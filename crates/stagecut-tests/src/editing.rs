//! End-to-end editing scenarios: import, placement, trims, deletion.

use stagecut_core::defaults::DEFAULT_PROJECT_DURATION;
use stagecut_core::StagecutError;
use stagecut_timeline::{ClipTimesPatch, Project, TrackKind};

use crate::support::{probed, project_with_video};

#[test]
fn import_builds_library_track_and_clip_together() {
    let (project, clip_id) = project_with_video(20.0);

    assert_eq!(project.library.len(), 1);
    assert_eq!(project.tracks.len(), 1);
    let clip = project.find_clip(clip_id).unwrap();
    let media = project.clip_media(clip).unwrap();
    assert_eq!(clip.duration(), media.duration);
    assert_eq!(project.track_of_clip(clip_id).unwrap().name, "Video Track 1");
}

#[test]
fn imports_append_while_captions_fork_tracks() {
    let (mut project, _) = project_with_video(10.0);
    project
        .add_media(probed("b.mp4", "video/mp4", 5.0), 2)
        .unwrap();
    project
        .add_media(probed("song.mp3", "audio/mpeg", 30.0), 3)
        .unwrap();
    project.add_text_caption("one", 0.0).unwrap();
    project.add_text_caption("two", 1.0).unwrap();

    // Two video clips share one track; captions never share.
    let kinds: Vec<_> = project.tracks.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TrackKind::Video,
            TrackKind::Audio,
            TrackKind::Caption,
            TrackKind::Caption
        ]
    );
    assert_eq!(project.tracks[0].clips.len(), 2);
    assert_eq!(project.tracks[0].clips[1].timeline_start, 10.0);
}

#[test]
fn duration_tracks_the_furthest_clip_end() {
    let (mut project, clip_id) = project_with_video(80.0);
    assert_eq!(project.duration(), 80.0);

    // Trimming the clip down lets the floor take over again.
    project
        .update_clip_times(
            clip_id,
            ClipTimesPatch {
                source_end: Some(30.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(project.duration(), DEFAULT_PROJECT_DURATION);

    // Moving it out re-extends the project.
    project.move_clip(clip_id, 50.0).unwrap();
    assert_eq!(project.duration(), 80.0);
}

#[test]
fn failed_import_commits_nothing() {
    let mut project = Project::new();
    let err = project
        .add_media(probed("broken.webm", "video/webm", 0.0), 1)
        .unwrap_err();
    assert!(matches!(err, StagecutError::ProbeFailed(_)));
    assert!(project.library.is_empty());
    assert!(project.tracks.is_empty());
}

#[test]
fn delete_flow_prunes_and_renumbers() {
    let (mut project, first) = project_with_video(10.0);
    let second = project
        .add_media(probed("b.mp4", "video/mp4", 5.0), 2)
        .unwrap();
    project.add_text_caption("note", 0.0).unwrap();

    // Delete both video clips; the video track disappears with the second.
    project.select(Some(first));
    project.delete_selected().unwrap();
    project.select(Some(second.clip_id));
    project.delete_selected().unwrap();

    assert_eq!(project.tracks.len(), 1);
    assert_eq!(project.tracks[0].kind, TrackKind::Caption);
    assert_eq!(project.tracks[0].name, "Caption Track 1");
    assert_eq!(project.selected_clip_id, None);

    // With nothing selected, deletion refuses.
    assert!(matches!(
        project.delete_selected().unwrap_err(),
        StagecutError::NothingSelected
    ));
}

#[test]
fn trim_and_move_interact_with_derivation() {
    let (mut project, clip_id) = project_with_video(20.0);
    project
        .update_clip_times(
            clip_id,
            ClipTimesPatch {
                source_start: Some(5.0),
                source_end: Some(15.0),
                timeline_start: Some(70.0),
            },
        )
        .unwrap();
    let clip = project.find_clip(clip_id).unwrap();
    assert_eq!(clip.duration(), 10.0);
    assert_eq!(clip.timeline_end(), 80.0);
    assert_eq!(project.duration(), 80.0);
}
