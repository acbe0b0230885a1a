//! Keyed content fetches with stale-result suppression.
//!
//! Every accepted key change bumps a generation counter and hands the caller a
//! [`PendingFetch`] stamped with a [`FetchTicket`]. The caller drives the future wherever it
//! likes (awaited inline, or spawned on the async runtime) and feeds the resulting
//! [`FetchCompletion`] back through [`FetchController::complete`] on the UI thread. Only a
//! completion whose ticket matches the latest generation touches state; everything else is
//! dropped silently. No transport is aborted: cancellation is cooperative.

use crate::kernel::services::ports::content::LoadError;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Current result. A value exists only on success and a message only on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Failure(_) => FetchStatus::Failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: String,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// An issued load that has not been driven yet.
#[must_use = "a pending fetch does nothing until it is run"]
pub struct PendingFetch<F> {
    ticket: FetchTicket,
    future: F,
}

impl<F> PendingFetch<F> {
    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }

    pub async fn run<T>(self) -> FetchCompletion<T>
    where
        F: Future<Output = Result<T, LoadError>>,
    {
        let outcome = self.future.await;
        FetchCompletion {
            ticket: self.ticket,
            outcome,
        }
    }
}

#[derive(Debug)]
pub struct FetchCompletion<T> {
    pub ticket: FetchTicket,
    pub outcome: Result<T, LoadError>,
}

/// Caller-supplied failure fallbacks.
#[derive(Debug, Clone)]
pub struct FetchSettings<T> {
    /// Shown in place of content while in `Failure`.
    pub fallback_value: Option<T>,
    /// Replaces the loader's reason as the visible error message.
    pub fallback_error_message: Option<String>,
}

impl<T> Default for FetchSettings<T> {
    fn default() -> Self {
        Self {
            fallback_value: None,
            fallback_error_message: None,
        }
    }
}

#[derive(Debug)]
pub struct FetchController<T> {
    settings: FetchSettings<T>,
    key: Option<String>,
    generation: u64,
    disposed: bool,
    state: FetchState<T>,
}

impl<T> FetchController<T> {
    pub fn new(settings: FetchSettings<T>) -> Self {
        Self {
            settings,
            key: None,
            generation: 0,
            disposed: false,
            state: FetchState::Idle,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// What to render: the value on success, the configured fallback on failure.
    pub fn content(&self) -> Option<&T> {
        match &self.state {
            FetchState::Success(value) => Some(value),
            FetchState::Failure(_) => self.settings.fallback_value.as_ref(),
            FetchState::Idle | FetchState::Loading => None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        !self.disposed && ticket.generation == self.generation
    }

    /// Tracks `key` and issues `loader(key)`. Returns `None` when the key is unchanged or the
    /// controller has been disposed; the loader is not called in that case.
    pub fn set_key<F, Fut>(
        &mut self,
        key: impl Into<String>,
        loader: F,
    ) -> Option<PendingFetch<Fut>>
    where
        F: FnOnce(&str) -> Fut,
    {
        let key = key.into();
        if self.disposed {
            tracing::trace!(key = %key, "fetch controller disposed, ignoring key");
            return None;
        }
        if self.key.as_deref() == Some(key.as_str()) {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = FetchState::Loading;
        tracing::debug!(key = %key, generation = self.generation, "fetch issued");

        let future = loader(&key);
        let ticket = FetchTicket {
            generation: self.generation,
            key: key.clone(),
        };
        self.key = Some(key);
        Some(PendingFetch { ticket, future })
    }

    /// Applies a completion if its ticket is still current. Returns whether state changed.
    pub fn complete(&mut self, completion: FetchCompletion<T>) -> bool {
        let FetchCompletion { ticket, outcome } = completion;
        if !self.is_current(&ticket) || !matches!(self.state, FetchState::Loading) {
            tracing::trace!(
                key = %ticket.key,
                generation = ticket.generation,
                current = self.generation,
                "drop stale fetch result"
            );
            return false;
        }

        match outcome {
            Ok(value) => {
                tracing::debug!(key = %ticket.key, "fetch succeeded");
                self.state = FetchState::Success(value);
            }
            Err(err) => {
                tracing::warn!(key = %ticket.key, error = %err, "fetch failed");
                let message = self
                    .settings
                    .fallback_error_message
                    .clone()
                    .unwrap_or_else(|| err.to_string());
                self.state = FetchState::Failure(message);
            }
        }
        true
    }

    /// Forgets the tracked key and invalidates in-flight work, so the next `set_key` reloads
    /// even if the key is the same.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        self.key = None;
        self.state = FetchState::Idle;
    }

    /// Final teardown: every in-flight and future completion is discarded.
    pub fn dispose(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.disposed = true;
    }
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new(FetchSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/fetch.rs"]
mod tests;
