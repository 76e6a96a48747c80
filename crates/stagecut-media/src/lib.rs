//! StageCut Media - External media collaborators
//!
//! The engine neither decodes files nor renders exports; both live behind
//! interfaces here:
//! - [`probe`] — the media probe that turns a file into a `ProbedMedia`
//! - [`export`] — the HTTP client for the export acknowledgement endpoint

pub mod export;
pub mod probe;

pub use export::{ExportAck, ExportClient, ExportPayload, MediaSummary, DEFAULT_EXPORT_ENDPOINT};
pub use probe::MediaProbe;
