//! Core types shared by every layer: input events and sizing geometry.

pub mod event;
pub mod geom;

pub use event::{InputEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
pub use geom::{max_width_for_viewport, Axis, PointerPos, Rect, WidthBounds};
