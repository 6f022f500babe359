//! # Userdesk - Library Root
//!
//! A native desktop GUI client for managing a remote user directory.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              userdesk (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui_extras   - User table                            │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime (background tasks)      │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON, bearer token)
//!          ▼
//! ┌─────────────────────────┐
//! │  Remote user-directory  │
//! │  REST API               │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, and action handlers
//! - **core**: Error taxonomy and the API service trait
//! - **services**: The `reqwest` API client and the file-backed session store
//! - **ui**: Screens (login, user list, edit) and shared widgets
//! - **utils**: Tokio runtime handle and input validation
//!
//! ## Core Concepts
//!
//! The application is event-driven: the UI thread handles input and
//! rendering, background tasks perform network I/O on a shared Tokio
//! runtime, and results flow back as [`app::AppEvent`] messages over an
//! async channel drained every frame. Application state lives in
//! `Arc<RwLock<AppState>>` and is locked only briefly.
//!
//! The session token is owned by a single injected
//! [`services::session::SessionStore`], consulted by both the API client
//! (bearer header) and the route guard (protected screens).

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{ApiError, ApiResult};
