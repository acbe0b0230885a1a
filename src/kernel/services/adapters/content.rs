//! Filesystem loaders for card content.
//!
//! Assets are laid out as `<root>/data/<id>.json` (structured tweet) and
//! `<root>/texts/<id>.txt` (plain text), with the chart image at `<root>/images/<id>.png`. A blank payload is a valid, empty record; only
//! missing files, IO errors and undecodable JSON are failures.

use crate::kernel::services::ports::content::LoadError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const TEXT_DIR: &str = "texts";
const IMAGE_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self, id: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(format!("{id}.json"))
    }

    pub fn text_path(&self, id: &str) -> PathBuf {
        self.root.join(TEXT_DIR).join(format!("{id}.txt"))
    }

    pub fn image_path(&self, id: &str) -> PathBuf {
        self.root.join(IMAGE_DIR).join(format!("{id}.png"))
    }
}

pub async fn load_json<T>(path: PathBuf) -> Result<T, LoadError>
where
    T: DeserializeOwned + Default,
{
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        LoadError::Transport(format!("{}: {e}", path.display()))
    })?;
    decode_json(&bytes)
}

pub async fn load_text(path: PathBuf) -> Result<String, LoadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        LoadError::Transport(format!("{}: {e}", path.display()))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn decode_json<T>(bytes: &[u8]) -> Result<T, LoadError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/content.rs"]
mod tests;
