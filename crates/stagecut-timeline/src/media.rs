//! Imported media assets and the project media library.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output of the external media probe: one imported file together with its
/// decoded duration. The probe itself lives behind the `MediaProbe` trait in
/// `stagecut-media`; the timeline only consumes its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbedMedia {
    /// Original file name.
    pub name: String,
    /// MIME type reported for the file.
    pub mime_type: String,
    /// Full encoded content of the file.
    pub data_uri: String,
    /// Probed duration in seconds. Zero or less means the probe failed.
    pub duration: f64,
}

/// Broad media class derived from a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Audio,
    Other,
}

impl MediaKind {
    /// Classify a MIME type by its top-level family.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Other
        }
    }
}

/// An imported source asset. Immutable once created; owned by the library
/// for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    /// Unique id, derived from the file name and import timestamp.
    pub id: String,
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Full encoded content.
    pub data_uri: String,
    /// Source duration in seconds.
    pub duration: f64,
}

impl MediaFile {
    /// Create a media file from a probe result.
    pub fn new(probed: ProbedMedia, imported_at_ms: u64) -> Self {
        Self {
            id: format!("{}-{}", probed.name, imported_at_ms),
            name: probed.name,
            mime_type: probed.mime_type,
            data_uri: probed.data_uri,
            duration: probed.duration,
        }
    }

    /// Broad media class of this asset.
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }
}

/// Insertion-ordered collection of imported assets, keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaLibrary {
    files: Vec<MediaFile>,
}

impl MediaLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset, keeping insertion order. A duplicate id is ignored
    /// and reported as `false`.
    pub fn insert(&mut self, file: MediaFile) -> bool {
        if self.get(&file.id).is_some() {
            debug!(id = %file.id, "ignoring duplicate media import");
            return false;
        }
        self.files.push(file);
        true
    }

    /// Look up an asset by id.
    pub fn get(&self, id: &str) -> Option<&MediaFile> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Iterate assets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaFile> {
        self.files.iter()
    }

    /// Number of assets in the library.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when nothing has been imported yet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
