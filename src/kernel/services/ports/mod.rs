//! Service ports: configuration and content contracts.

pub mod content;
pub mod settings;

pub use content::LoadError;
pub use settings::{
    ContentSettings, ContentSource, ResizePreset, ResizeSettings, Settings, ViewerSettings,
};
