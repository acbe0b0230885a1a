//! Async runtime adapter: drives content loads and sends completions back to the UI thread.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
