//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the desktop client and the
//! remote user-directory API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication DTOs (login, error envelope)
//!   - **[`dto::users`]**: User records, pages, and update payloads
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default;
//!   the one camelCase field the service returns (`updatedAt`) is renamed explicitly
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     email: "eve.holt@reqres.in".to_string(),
//!     password: "cityslicka".to_string(),
//! };
//!
//! let response: LoginResponse = client
//!     .post("https://reqres.in/api/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
