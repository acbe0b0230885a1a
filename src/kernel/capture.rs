//! Window-level pointer capture.
//!
//! While a card is being resized it must see every pointer move and release, even when the
//! pointer leaves the card. That capture is a process-wide resource: several cards share one
//! window, so whoever installs it must release it on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait PointerCapture: Send + Sync + 'static {
    fn install(&self);
    fn release(&self);
}

/// Capture for frontends that deliver pointer events globally anyway.
#[derive(Debug, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn install(&self) {}

    fn release(&self) {}
}

/// Shared grab flag: while set, the event router sends every pointer event to the grabbing
/// card instead of hit-testing.
#[derive(Debug, Clone, Default)]
pub struct PointerGrab {
    grabbed: Arc<AtomicBool>,
}

impl PointerGrab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed.load(Ordering::SeqCst)
    }
}

impl PointerCapture for PointerGrab {
    fn install(&self) {
        self.grabbed.store(true, Ordering::SeqCst);
    }

    fn release(&self) {
        self.grabbed.store(false, Ordering::SeqCst);
    }
}

/// Scoped ownership of an installed capture. Released exactly once, on `release` or drop.
pub struct CaptureGuard {
    capture: Arc<dyn PointerCapture>,
    released: bool,
}

impl CaptureGuard {
    pub fn acquire(capture: Arc<dyn PointerCapture>) -> Self {
        capture.install();
        Self {
            capture,
            released: false,
        }
    }

    pub fn release(&mut self) {
        if std::mem::replace(&mut self.released, true) {
            return;
        }
        self.capture.release();
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("released", &self.released)
            .finish()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/capture.rs"]
mod tests;
