use super::message::AppMessage;
use crate::kernel::fetch::{FetchCompletion, PendingFetch};
use crate::kernel::services::ports::content::LoadError;
use std::future::Future;
use std::io;
use std::sync::mpsc::Sender;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    /// Drives `pending` to completion off the UI thread and posts the wrapped result back.
    ///
    /// Staleness is not checked here: the receiving controller decides whether the
    /// completion still matters.
    pub fn spawn_fetch<T, F>(
        &self,
        pending: PendingFetch<F>,
        wrap: fn(FetchCompletion<T>) -> AppMessage,
    ) where
        T: Send + 'static,
        F: Future<Output = Result<T, LoadError>> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let completion = pending.run().await;
            let _ = tx.send(wrap(completion));
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
