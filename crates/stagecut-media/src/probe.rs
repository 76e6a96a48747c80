//! Media file probing.
//!
//! Reading a file, encoding it for display, and resolving its duration is
//! the host runtime's job (a browser media element, ffprobe, whatever the
//! shell embeds). The engine only needs the result, so the probe is a trait
//! implemented by the shell. `add_media` treats a zero duration on
//! video/audio MIME types as a probe failure.

use std::path::Path;

use stagecut_core::Result;
use stagecut_timeline::ProbedMedia;

/// The external probe collaborator. Invoked once per imported file.
pub trait MediaProbe {
    /// Read the file, encode its content as a data URI and resolve its
    /// duration in seconds.
    fn probe(&self, path: &Path) -> Result<ProbedMedia>;
}
