//! One tweet card: a resize controller plus the content fetch for the configured source.

use crate::kernel::fetch::{FetchController, FetchSettings, FetchStatus, PendingFetch};
use crate::kernel::services::adapters::content::{load_json, load_text, AssetPaths};
use crate::kernel::services::ports::content::LoadError;
use crate::kernel::services::ports::settings::{ContentSource, Settings};
use crate::kernel::{PointerCapture, PointerInput, ResizeController};
use crate::models::Tweet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

pub type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<T, LoadError>> + Send>>;

/// Loads issued by a key change; each must be driven and its completion fed back.
#[derive(Default)]
pub struct CardLoads {
    pub tweet: Option<PendingFetch<LoadFuture<Tweet>>>,
    pub text: Option<PendingFetch<LoadFuture<String>>>,
}

impl CardLoads {
    pub fn is_empty(&self) -> bool {
        self.tweet.is_none() && self.text.is_none()
    }
}

/// A tweet id plus the error label the card is annotated with, written `ID` or `ID:LABEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub id: String,
    pub label: Option<String>,
}

impl CardEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    pub fn parse(arg: &str) -> Self {
        match arg.split_once(':') {
            Some((id, label)) => Self {
                id: id.to_string(),
                label: Some(label.trim())
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned),
            },
            None => Self::new(arg),
        }
    }
}

pub struct CardState {
    source: ContentSource,
    assets: AssetPaths,
    label: Option<String>,
    image: Option<PathBuf>,
    resize: ResizeController,
    tweet: FetchController<Tweet>,
    text: FetchController<String>,
}

impl CardState {
    pub fn new(settings: &Settings, assets: AssetPaths, capture: Arc<dyn PointerCapture>) -> Self {
        let error_message = settings.content.error_message.clone();
        Self {
            source: settings.content.source,
            assets,
            label: None,
            image: None,
            resize: ResizeController::new(settings.resize.clone(), capture),
            tweet: FetchController::new(FetchSettings {
                fallback_value: None,
                fallback_error_message: error_message.clone(),
            }),
            text: FetchController::new(FetchSettings {
                fallback_value: Some(settings.content.text_fallback.clone()),
                fallback_error_message: error_message,
            }),
        }
    }

    pub fn source(&self) -> ContentSource {
        self.source
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    pub fn tweet(&self) -> &FetchController<Tweet> {
        &self.tweet
    }

    pub fn tweet_mut(&mut self) -> &mut FetchController<Tweet> {
        &mut self.tweet
    }

    pub fn text(&self) -> &FetchController<String> {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut FetchController<String> {
        &mut self.text
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Chart image of the shown tweet, if the assets carry one.
    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    pub fn width(&self) -> f64 {
        self.resize.current_width()
    }

    pub fn current_id(&self) -> Option<&str> {
        match self.source {
            ContentSource::Json => self.tweet.key(),
            ContentSource::Text => self.text.key(),
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self.source {
            ContentSource::Json => self.tweet.status(),
            ContentSource::Text => self.text.status(),
        }
    }

    /// Shows `entry`, relabelling the card even when the id is unchanged.
    pub fn show_entry(&mut self, entry: &CardEntry) -> CardLoads {
        self.label = entry.label.clone();
        self.show(&entry.id)
    }

    /// Switches the card to tweet `id`. Showing the current id again issues nothing.
    pub fn show(&mut self, id: &str) -> CardLoads {
        if self.current_id() != Some(id) {
            let image = self.assets.image_path(id);
            self.image = image.is_file().then_some(image);
        }
        let assets = &self.assets;
        match self.source {
            ContentSource::Json => CardLoads {
                tweet: self.tweet.set_key(id, |id| -> LoadFuture<Tweet> {
                    Box::pin(load_json(assets.data_path(id)))
                }),
                text: None,
            },
            ContentSource::Text => CardLoads {
                tweet: None,
                text: self.text.set_key(id, |id| -> LoadFuture<String> {
                    Box::pin(load_text(assets.text_path(id)))
                }),
            },
        }
    }

    /// Explicit retry: forgets the current id and loads it again.
    pub fn reload(&mut self) -> CardLoads {
        let Some(id) = self.current_id().map(str::to_owned) else {
            return CardLoads::default();
        };
        self.tweet.reset();
        self.text.reset();
        self.show(&id)
    }

    pub fn pointer(&mut self, input: PointerInput, viewport_width: f64) -> Option<f64> {
        self.resize.handle(input, viewport_width)
    }

    /// Releases a live drag and discards every outstanding load.
    pub fn teardown(&mut self) {
        self.resize.teardown();
        self.tweet.dispose();
        self.text.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/card.rs"]
mod tests;
