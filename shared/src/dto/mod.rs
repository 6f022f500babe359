//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication with the
//! remote user-directory REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request/response and the error envelope
//! - [`users`] - User records, pages, and update payloads
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), except where the
//!   remote service uses camelCase (`updatedAt`), handled with `#[serde(rename)]`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! {
//!   "email": "eve.holt@reqres.in",
//!   "password": "cityslicka"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "QpwL5tke4Pnpja7X4"
//! }
//! ```

pub mod auth;
pub mod users;

pub use auth::*;
pub use users::*;
