//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod content;
pub mod dirs;
pub mod runtime;
pub mod settings;

pub use content::{load_json, load_text, AssetPaths};
pub use dirs::{ensure_log_dir, get_app_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
