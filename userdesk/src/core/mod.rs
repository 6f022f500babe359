//! # Core Types
//!
//! Error taxonomy and service traits shared across the client.

pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult};
pub use service::ApiService;
