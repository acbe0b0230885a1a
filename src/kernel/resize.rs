//! Pointer-drag resize controller.
//!
//! Turns a one-dimensional drag into a card width clamped to
//! `[min_width, min(viewport - margin, cap)]`. The controller is idle until a drag begins; the
//! drag session owns the window-level pointer capture, so leaving `Dragging` by any path
//! (release, teardown, drop) releases it.

use super::capture::{CaptureGuard, PointerCapture};
use crate::core::geom::{max_width_for_viewport, PointerPos, WidthBounds};
use crate::kernel::services::ports::settings::ResizeSettings;
use std::sync::Arc;

/// Transient state of one drag gesture.
#[derive(Debug)]
pub struct DragSession {
    anchor_coordinate: f64,
    anchor_width: f64,
    _capture: CaptureGuard,
}

impl DragSession {
    pub fn anchor_coordinate(&self) -> f64 {
        self.anchor_coordinate
    }

    pub fn anchor_width(&self) -> f64 {
        self.anchor_width
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Raw pointer input, already mapped into the controller's pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(PointerPos),
    Move(PointerPos),
    Up,
}

pub struct ResizeController {
    settings: ResizeSettings,
    capture: Arc<dyn PointerCapture>,
    width: f64,
    state: DragState,
}

impl ResizeController {
    pub fn new(settings: ResizeSettings, capture: Arc<dyn PointerCapture>) -> Self {
        let initial = WidthBounds::new(settings.min_width, settings.max_width);
        let width = initial.clamp(settings.default_width);
        Self {
            settings,
            capture,
            width,
            state: DragState::Idle,
        }
    }

    pub fn settings(&self) -> &ResizeSettings {
        &self.settings
    }

    pub fn current_width(&self) -> f64 {
        self.width
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Effective bounds for the given viewport; recomputed on every call.
    pub fn bounds(&self, viewport_width: f64) -> WidthBounds {
        let max = max_width_for_viewport(
            viewport_width,
            self.settings.margin_reserve,
            self.settings.max_width,
        );
        WidthBounds::new(self.settings.min_width, max)
    }

    /// Starts a drag anchored at `anchor_coordinate`. Returns false if a drag is already live.
    pub fn begin_drag(&mut self, anchor_coordinate: f64) -> bool {
        if self.is_dragging() {
            tracing::trace!(anchor_coordinate, "drag already active, ignoring begin");
            return false;
        }

        let capture = CaptureGuard::acquire(self.capture.clone());
        self.state = DragState::Dragging(DragSession {
            anchor_coordinate,
            anchor_width: self.width,
            _capture: capture,
        });
        tracing::debug!(anchor_coordinate, width = self.width, "drag started");
        true
    }

    /// Publishes the clamped width for a pointer coordinate, or `None` while idle.
    pub fn on_pointer_move(&mut self, coordinate: f64, viewport_width: f64) -> Option<f64> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };

        let raw = session.anchor_width
            + (coordinate - session.anchor_coordinate) * self.settings.sensitivity;
        let width = self.bounds(viewport_width).clamp(raw);
        self.width = width;
        Some(width)
    }

    /// Ends the drag. Returns false (and changes nothing) if no drag was live.
    pub fn on_pointer_up(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = DragState::Idle;
        tracing::debug!(width = self.width, "drag finished");
        true
    }

    /// Drops any live drag session, e.g. when the owning view goes away mid-drag.
    pub fn teardown(&mut self) {
        if let DragState::Dragging(_) = std::mem::take(&mut self.state) {
            tracing::debug!(width = self.width, "drag torn down");
        }
    }

    pub fn handle(&mut self, input: PointerInput, viewport_width: f64) -> Option<f64> {
        let axis = self.settings.axis;
        match input {
            PointerInput::Down(pos) => {
                self.begin_drag(pos.along(axis));
                None
            }
            PointerInput::Move(pos) => self.on_pointer_move(pos.along(axis), viewport_width),
            PointerInput::Up => {
                self.on_pointer_up();
                None
            }
        }
    }
}

impl std::fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeController")
            .field("settings", &self.settings)
            .field("width", &self.width)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/resize.rs"]
mod tests;
