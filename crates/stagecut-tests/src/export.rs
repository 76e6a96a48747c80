//! Export payload shape, as the endpoint sees it.

use stagecut_media::ExportPayload;

use crate::support::{probed, project_with_video};

#[test]
fn payload_matches_the_endpoint_contract() {
    let (mut project, _) = project_with_video(75.0);
    project.add_text_caption("title card", 0.0).unwrap();

    let payload = ExportPayload::from_project(&project);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["project_duration"], 75.0);
    assert!(json["tracks"].is_array());
    assert_eq!(json["tracks"].as_array().unwrap().len(), 2);
    assert_eq!(json["media_library"][0]["name"], "clip.mp4");
    // Metadata only: no data URI field anywhere in the library section.
    assert!(json["media_library"][0].get("data_uri").is_none());
}

#[test]
fn payload_survives_a_serde_round_trip() {
    let (project, _) = project_with_video(75.0);
    let payload = ExportPayload::from_project(&project);
    let json = serde_json::to_string(&payload).unwrap();
    let back: ExportPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back.project_duration, payload.project_duration);
    assert_eq!(back.tracks.len(), payload.tracks.len());
}
