//! # User Endpoints
//!
//! CRUD operations against the remote user collection. Every call goes out
//! with the session's bearer token attached when one is present.

use super::client::{remote_error, ApiClient};
use crate::core::error::{ApiError, ApiResult};
use shared::{User, UserEnvelope, UserPage, UserUpdate, UserUpdateResponse};

/// Fetch one page of the user collection.
#[tracing::instrument(skip(client))]
pub async fn list_users(client: &ApiClient, page: u32) -> ApiResult<UserPage> {
    let start = std::time::Instant::now();

    let response = client
        .authorize(client.client.get(client.url("/users")))
        .query(&[("page", page)])
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "List users network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    if status.is_success() {
        let page = response
            .json::<UserPage>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        tracing::info!(
            count = page.data.len(),
            total_pages = page.total_pages,
            duration_ms = start.elapsed().as_millis(),
            "Fetched user page"
        );
        Ok(page)
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "List users failed");
        Err(error)
    }
}

/// Fetch a single user by identifier.
#[tracing::instrument(skip(client))]
pub async fn get_user(client: &ApiClient, id: i64) -> ApiResult<User> {
    let response = client
        .authorize(client.client.get(client.url(&format!("/users/{id}"))))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Get user network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    if status.is_success() {
        let envelope = response
            .json::<UserEnvelope>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        tracing::info!("Fetched user");
        Ok(envelope.data)
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Get user failed");
        Err(error)
    }
}

/// Submit a structured update for a user.
#[tracing::instrument(skip(client, update))]
pub async fn update_user(
    client: &ApiClient,
    id: i64,
    update: &UserUpdate,
) -> ApiResult<UserUpdateResponse> {
    let response = client
        .authorize(client.client.put(client.url(&format!("/users/{id}"))))
        .json(update)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Update user network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    if status.is_success() {
        let echoed = response
            .json::<UserUpdateResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        tracing::info!("Updated user");
        Ok(echoed)
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Update user failed");
        Err(error)
    }
}

/// Delete a user by identifier. Success carries no body.
#[tracing::instrument(skip(client))]
pub async fn delete_user(client: &ApiClient, id: i64) -> ApiResult<()> {
    let response = client
        .authorize(client.client.delete(client.url(&format!("/users/{id}"))))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Delete user network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Deleted user");
        Ok(())
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Delete user failed");
        Err(error)
    }
}
