//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::ApiResult;
use async_trait::async_trait;
use shared::{LoginResponse, User, UserPage, UserUpdate, UserUpdateResponse};

/// Trait for remote API operations.
///
/// This trait allows for dependency injection and mocking in tests. The
/// concrete implementation is [`crate::services::api::ApiClient`], which
/// attaches the session's bearer token to every call.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Authenticate with email and password, returning the session token
    async fn login(&self, email: String, password: String) -> ApiResult<LoginResponse>;

    /// Fetch one server-determined page of the user collection
    async fn list_users(&self, page: u32) -> ApiResult<UserPage>;

    /// Fetch a single user by identifier
    async fn get_user(&self, id: i64) -> ApiResult<User>;

    /// Submit a structured update for a user
    async fn update_user(&self, id: i64, update: UserUpdate) -> ApiResult<UserUpdateResponse>;

    /// Delete a user by identifier
    async fn delete_user(&self, id: i64) -> ApiResult<()>;
}
