//! StageCut Playback - The synchronization engine
//!
//! Drives a single authoritative playhead over an arbitrary set of tracks
//! and clips:
//! - [`clock`] — the global playback clock (play/pause/seek, end clamping)
//! - [`scheduler`] — the explicit cooperative frame-loop handle
//! - [`sync`] — per-clip media surfaces reconciled against the clock
//! - [`captions`] — time-aligned caption selection
//! - [`session`] — the state container tying project and playback together
//!
//! The host frame loop owns the cadence: it calls
//! [`session::EditorSession::tick`] once per frame with the current
//! `Instant`, and the engine does the rest.

pub mod captions;
pub mod clock;
pub mod scheduler;
pub mod session;
pub mod sync;

pub use captions::active_captions;
pub use clock::PlaybackClock;
pub use scheduler::TickHandle;
pub use session::{EditorSession, FrameState};
pub use sync::{ElementSync, MediaSurface, PlayRejected};
