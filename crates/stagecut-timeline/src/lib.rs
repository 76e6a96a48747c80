//! StageCut Timeline - Project data model and mutation engine
//!
//! Implements the in-memory structure of an editing session:
//! - Media library of imported assets
//! - Tracks containing trimmed, positioned clips
//! - The mutation operations (import, caption, delete, trim, move)
//! - Derived project duration
//!
//! All edits funnel through the operations in [`edit`]; nothing else mutates
//! clips or tracks, which is what keeps the trim invariants enforceable.

pub mod clip;
pub mod edit;
pub mod media;
pub mod project;
pub mod track;

pub use clip::{Clip, ClipSource};
pub use edit::{ClipTimesPatch, EditReceipt};
pub use media::{MediaFile, MediaKind, MediaLibrary, ProbedMedia};
pub use project::Project;
pub use track::{Track, TrackKind};
