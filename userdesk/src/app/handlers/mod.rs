//! # User Action Handlers
//!
//! Handlers invoked from the UI layer. Each acquires the state lock briefly,
//! spawns any required background task, and returns without blocking.

pub(crate) mod auth;
pub(crate) mod navigation;
pub(crate) mod users;
