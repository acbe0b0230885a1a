//! tweetcard - resizable, lazily loaded tweet cards.
//!
//! Module layout:
//! - core: input events and sizing geometry
//! - kernel: resize and fetch controllers, pointer capture, settings and IO adapters
//! - models: the tweet record
//! - app: card composition and the terminal viewer
//! - tui: terminal plumbing (crossterm conversion, screen guard)

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
