//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the controllers stay free of terminal crates.

pub mod crossterm;
pub mod screen_guard;
pub mod view;
