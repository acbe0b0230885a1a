//! Headless card controllers: drag-to-resize and keyed content fetches.
//!
//! Nothing here renders or touches a terminal; frontends feed events in and read
//! `current_width` / fetch state back out each frame.

pub mod capture;
pub mod fetch;
pub mod resize;
pub mod services;

pub use capture::{CaptureGuard, NoopCapture, PointerCapture, PointerGrab};
pub use fetch::{
    FetchCompletion, FetchController, FetchSettings, FetchState, FetchStatus, FetchTicket,
    PendingFetch,
};
pub use resize::{DragSession, DragState, PointerInput, ResizeController};
