//! # Remote API Client Module
//!
//! HTTP client for communicating with the remote user-directory REST API.
//! Handles authentication and user CRUD.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! ├── auth.rs     - Authentication endpoint (login)
//! └── users.rs    - User endpoints (list, get, update, delete)
//! ```

pub mod auth;
pub mod client;
pub mod users;

pub use client::ApiClient;
