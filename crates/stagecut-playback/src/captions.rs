//! Time-aligned caption selection.

use smallvec::SmallVec;
use stagecut_timeline::{Clip, Project, TrackKind};

/// All caption clips visible at `time`, in track order. Simultaneous
/// captions stack in the overlay; a caption whose window ends exactly at
/// `time` is already gone.
pub fn active_captions(project: &Project, time: f64) -> SmallVec<[&Clip; 2]> {
    project
        .tracks
        .iter()
        .filter(|t| t.kind == TrackKind::Caption)
        .flat_map(|t| t.clips.iter())
        .filter(|c| c.is_active_at(time))
        .collect()
}
