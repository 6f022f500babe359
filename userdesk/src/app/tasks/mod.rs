//! # Async Background Tasks
//!
//! Tasks spawned onto the shared Tokio runtime; results come back to the
//! main thread as [`crate::app::AppEvent`] messages.

pub(crate) mod users;
