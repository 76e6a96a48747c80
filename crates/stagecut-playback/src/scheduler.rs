//! Cooperative frame-loop handle.
//!
//! The clock's update loop is not a timer of its own: the host frame loop
//! calls `tick` every frame, and this handle decides whether a tick may
//! advance anything. Earlier designs cancelled the loop implicitly through
//! stale closures racing independent timer identifiers; here cancellation is
//! an explicit, synchronous `stop`, and both seek and toggle go through the
//! same handle. No tick advances after `stop` returns.

/// Running state of the cooperative update loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickHandle {
    running: bool,
}

impl TickHandle {
    /// Create a stopped handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow ticks to advance. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancel the loop. Synchronous and idempotent: safe to call on an
    /// already-stopped handle.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether ticks currently advance.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
