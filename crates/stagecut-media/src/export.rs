//! Export sink client.
//!
//! Serializes the project and POSTs it to the external export endpoint,
//! which acknowledges with `{success, message}` — it does not render video.
//! One attempt per call, no retries; transport, HTTP-status and parse
//! failures each surface their own message.

use serde::{Deserialize, Serialize};
use stagecut_core::{Result, StagecutError};
use stagecut_timeline::{MediaFile, Project, Track};
use tracing::info;

/// Endpoint of the placeholder export server.
pub const DEFAULT_EXPORT_ENDPOINT: &str = "http://localhost:3001/api/export-video";

/// Media metadata sent to the exporter. Data URIs are elided: the payload
/// identifies assets, it does not carry their bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub duration: f64,
}

impl From<&MediaFile> for MediaSummary {
    fn from(file: &MediaFile) -> Self {
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            duration: file.duration,
        }
    }
}

/// The JSON body POSTed to the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
    pub project_duration: f64,
    pub tracks: Vec<Track>,
    pub media_library: Vec<MediaSummary>,
}

impl ExportPayload {
    /// Snapshot a project for export.
    pub fn from_project(project: &Project) -> Self {
        Self {
            project_duration: project.duration(),
            tracks: project.tracks.clone(),
            media_library: project.library.iter().map(MediaSummary::from).collect(),
        }
    }
}

/// The endpoint's acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportAck {
    pub success: bool,
    pub message: String,
}

/// HTTP client for the export sink.
#[derive(Debug, Clone)]
pub struct ExportClient {
    endpoint: String,
}

impl ExportClient {
    /// Client for a specific endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// POST the serialized project and parse the acknowledgement. Never
    /// mutates the project; a failure is reported and that is all.
    pub fn export(&self, project: &Project) -> Result<ExportAck> {
        let payload = ExportPayload::from_project(project);
        info!(
            endpoint = %self.endpoint,
            tracks = payload.tracks.len(),
            duration = payload.project_duration,
            "exporting project"
        );

        let mut response = ureq::post(&self.endpoint)
            .send_json(&payload)
            .map_err(|err| match err {
                ureq::Error::StatusCode(code) => {
                    StagecutError::ExternalService(format!("export server returned HTTP {code}"))
                }
                other => StagecutError::ExternalService(format!(
                    "could not reach the export server: {other}"
                )),
            })?;

        response.body_mut().read_json::<ExportAck>().map_err(|err| {
            StagecutError::ExternalService(format!(
                "export server sent an unreadable response: {err}"
            ))
        })
    }
}

impl Default for ExportClient {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_ENDPOINT)
    }
}
