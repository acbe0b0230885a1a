use crate::core::geom::Axis;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub resize: ResizeSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub viewer: ViewerSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePreset {
    /// Bottom-center handle: vertical travel moves the width twice as fast.
    VerticalHandle,
    /// Bottom-right corner: horizontal travel, fixed clamp range.
    CornerHandle,
}

impl ResizePreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "vertical" | "vertical_handle" => Some(Self::VerticalHandle),
            "corner" | "corner_handle" => Some(Self::CornerHandle),
            _ => None,
        }
    }

    pub fn settings(self) -> ResizeSettings {
        match self {
            Self::VerticalHandle => ResizeSettings::vertical_handle(),
            Self::CornerHandle => ResizeSettings::corner_handle(),
        }
    }
}

/// Sizing policy of one resize handle. All widths are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    pub axis: Axis,
    pub sensitivity: f64,
    pub min_width: f64,
    /// Hard cap; the effective max may be lower on a narrow viewport.
    pub max_width: f64,
    /// Space kept free on the viewport. `None` disables the viewport limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_reserve: Option<f64>,
    pub default_width: f64,
}

impl ResizeSettings {
    pub fn vertical_handle() -> Self {
        Self {
            axis: Axis::Vertical,
            sensitivity: 2.0,
            min_width: 400.0,
            max_width: 1500.0,
            margin_reserve: Some(80.0),
            default_width: 550.0,
        }
    }

    pub fn corner_handle() -> Self {
        Self {
            axis: Axis::Horizontal,
            sensitivity: 1.0,
            min_width: 320.0,
            max_width: 900.0,
            margin_reserve: None,
            default_width: 550.0,
        }
    }
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self::vertical_handle()
    }
}

/// Which per-tweet asset a card renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// `data/<id>.json`: author, date and text.
    #[default]
    Json,
    /// `texts/<id>.txt`: text only.
    Text,
}

impl ContentSource {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Where card content comes from and what to show when it cannot be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_root: Option<PathBuf>,
    #[serde(default)]
    pub source: ContentSource,
    #[serde(default = "default_text_fallback")]
    pub text_fallback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

fn default_text_fallback() -> String {
    "(Could not load tweet text)".to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            assets_root: None,
            source: ContentSource::default(),
            text_fallback: default_text_fallback(),
            error_message: None,
        }
    }
}

/// Terminal cell to pixel mapping, so pixel presets keep their meaning in the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    #[serde(default = "default_px_per_column")]
    pub px_per_column: f64,
    #[serde(default = "default_px_per_row")]
    pub px_per_row: f64,
}

fn default_px_per_column() -> f64 {
    8.0
}

fn default_px_per_row() -> f64 {
    16.0
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            px_per_column: default_px_per_column(),
            px_per_row: default_px_per_row(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
