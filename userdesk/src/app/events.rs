//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::core::error::ApiError;
use shared::{LoginResponse, User, UserPage, UserUpdateResponse};

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, ApiError>),
    /// Page fetch completed; `seq` identifies which dispatch this answers
    UsersPageResult {
        seq: u64,
        result: Result<UserPage, ApiError>,
    },
    /// Single-user fetch for the edit screen completed
    UserFetchResult {
        id: i64,
        result: Result<User, ApiError>,
    },
    /// Update submission completed
    UserUpdateResult {
        id: i64,
        result: Result<UserUpdateResponse, ApiError>,
    },
    /// Delete completed
    UserDeleteResult {
        id: i64,
        result: Result<(), ApiError>,
    },
}
