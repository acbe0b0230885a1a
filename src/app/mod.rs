//! Presentation layer: card composition and the terminal viewer.

pub mod card;
#[cfg(feature = "tui")]
pub mod render;
#[cfg(feature = "tui")]
pub mod viewer;

pub use card::{CardEntry, CardLoads, CardState};
#[cfg(feature = "tui")]
pub use viewer::CardViewer;
