//! Shared geometry for card sizing: axes, pointer positions and width clamping.

/// Axis a resize handle tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal travel (`x`), e.g. a corner handle.
    Horizontal,
    /// Vertical travel (`y`), e.g. a bottom-center handle.
    #[default]
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Closed interval `[min, max]` for a card width.
///
/// An ambient maximum that falls below the minimum (a very narrow viewport)
/// is raised to the minimum, so the interval is never empty and `clamp` never
/// produces a value outside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthBounds {
    min: f64,
    max: f64,
}

impl WidthBounds {
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min.max(0.0) } else { 0.0 };
        let max = if max.is_nan() { min } else { max.max(min) };
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.min(self.max).max(self.min)
    }
}

/// `min(viewport - margin, cap)`; without a margin only the hard cap applies.
pub fn max_width_for_viewport(viewport_width: f64, margin_reserve: Option<f64>, cap: f64) -> f64 {
    match margin_reserve {
        Some(margin) if viewport_width.is_finite() => (viewport_width - margin).min(cap),
        _ => cap,
    }
}

/// Integer screen rectangle, used for hit-testing handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        if self.is_empty() {
            return false;
        }
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/geom.rs"]
mod tests;
