//! Playback scenarios: clock, synchronizer and captions working together.

use std::time::{Duration, Instant};

use stagecut_playback::EditorSession;
use stagecut_timeline::{Clip, Track, TrackKind};

use crate::support::{init_tracing, probed, project_with_video, RecordingSurface};

fn session(duration: f64) -> (EditorSession<RecordingSurface>, uuid::Uuid) {
    init_tracing();
    let (project, clip_id) = project_with_video(duration);
    (EditorSession::new(project), clip_id)
}

#[test]
fn playhead_reaches_the_end_and_pauses_within_one_tick() {
    let (mut session, _) = session(80.0);
    let t0 = Instant::now();
    session.seek(79.95, t0);
    session.toggle_playback(t0);
    assert!(session.clock().is_playing());

    let frame = session.tick(t0 + Duration::from_millis(120));
    assert_eq!(frame.time, 80.0);
    assert!(!frame.playing);

    // Ticks after the auto-pause change nothing.
    let frame = session.tick(t0 + Duration::from_secs(5));
    assert_eq!(frame.time, 80.0);
}

#[test]
fn play_after_the_end_restarts_from_zero() {
    let (mut session, _) = session(80.0);
    let t0 = Instant::now();
    session.seek(80.0, t0);
    session.toggle_playback(t0);
    let frame = session.tick(t0 + Duration::from_millis(50));
    assert!((frame.time - 0.05).abs() < 1e-9);
    assert!(frame.playing);
}

#[test]
fn seeks_clamp_to_the_derived_duration() {
    let (mut session, _) = session(80.0);
    let t0 = Instant::now();
    session.seek(500.0, t0);
    assert_eq!(session.clock().current_time(), 80.0);
    session.seek(-4.0, t0);
    assert_eq!(session.clock().current_time(), 0.0);
    session.skip(10.0, t0);
    assert_eq!(session.clock().current_time(), 10.0);
}

#[test]
fn surfaces_follow_the_playhead_across_clip_boundaries() {
    let (mut session, clip_id) = session(10.0);
    let t0 = Instant::now();
    session.seek(2.0, t0);
    session.toggle_playback(t0);
    session.tick(t0);
    assert!(session.sync().surface(clip_id).unwrap().playing);

    // Jump past the clip: its surface must stop.
    session.seek(30.0, t0);
    session.tick(t0);
    let surface = session.sync().surface(clip_id).unwrap();
    assert!(!surface.playing);
}

#[test]
fn exactly_one_primary_among_overlapping_video_tracks() {
    let (mut session, lower_id) = session(10.0);
    // Stack two extra video tracks over the same window.
    let media_id = "clip.mp4-1".to_string();
    let mut ids = vec![lower_id];
    for ordinal in [2usize, 3] {
        let mut track = Track::new(TrackKind::Video, ordinal);
        let clip = Clip::video(track.id, format!("v{ordinal}"), media_id.clone(), 10.0, 0.0);
        ids.push(clip.id);
        track.push_clip(clip);
        session.project.tracks.push(track);
    }

    let t0 = Instant::now();
    session.seek(1.0, t0);
    let frame = session.tick(t0);

    // Later-declared track wins.
    assert_eq!(frame.primary_video, Some(ids[2]));
    let visible: Vec<_> = ids
        .iter()
        .filter(|id| session.sync().surface(**id).unwrap().visible)
        .collect();
    assert_eq!(visible.len(), 1);

    // Non-primary videos are muted even with global mute off.
    assert!(session.sync().surface(ids[0]).unwrap().muted);
    assert!(session.sync().surface(ids[1]).unwrap().muted);
    assert!(!session.sync().surface(ids[2]).unwrap().muted);
}

#[test]
fn audio_clips_play_but_never_show() {
    let (mut session, _) = session(10.0);
    let audio = session
        .project
        .add_media(probed("song.mp3", "audio/mpeg", 30.0), 2)
        .unwrap();
    let t0 = Instant::now();
    session.seek(1.0, t0);
    session.toggle_playback(t0);
    session.tick(t0);

    let surface = session.sync().surface(audio.clip_id).unwrap();
    assert!(surface.playing);
    assert!(!surface.visible);
}

#[test]
fn global_mute_routes_to_primary_and_audio() {
    let (mut session, video_id) = session(10.0);
    let audio = session
        .project
        .add_media(probed("song.mp3", "audio/mpeg", 30.0), 2)
        .unwrap();
    let t0 = Instant::now();
    session.seek(1.0, t0);
    session.set_muted(true);
    session.tick(t0);

    assert!(session.sync().surface(video_id).unwrap().muted);
    assert!(session.sync().surface(audio.clip_id).unwrap().muted);

    session.set_muted(false);
    session.tick(t0);
    assert!(!session.sync().surface(video_id).unwrap().muted);
    assert!(!session.sync().surface(audio.clip_id).unwrap().muted);
}

#[test]
fn captions_appear_only_inside_their_window() {
    let (mut session, _) = session(30.0);
    session.project.add_text_caption("hello", 10.0).unwrap();
    let t0 = Instant::now();

    session.seek(10.0, t0);
    assert_eq!(session.captions_at_playhead().len(), 1);

    session.seek(14.999, t0);
    assert_eq!(session.captions_at_playhead().len(), 1);

    session.seek(15.0, t0);
    assert!(session.captions_at_playhead().is_empty());
}

#[test]
fn deleting_the_active_clip_mid_playback_is_safe() {
    let (mut session, clip_id) = session(10.0);
    let t0 = Instant::now();
    session.seek(2.0, t0);
    session.toggle_playback(t0);
    session.tick(t0);

    session.project.select(Some(clip_id));
    session.project.delete_selected().unwrap();

    let frame = session.tick(t0 + Duration::from_millis(50));
    assert_eq!(frame.primary_video, None);
    assert!(session.sync().surface(clip_id).is_none());
}
