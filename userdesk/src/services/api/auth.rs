//! # Authentication Endpoints
//!
//! Handles the login exchange with the remote service.

use super::client::{remote_error, ApiClient};
use crate::core::error::{ApiError, ApiResult};
use shared::{LoginRequest, LoginResponse};

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> ApiResult<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let response = client
        .authorize(client.client.post(client.url("/login")))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<LoginResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Login response parse error");
            ApiError::Parse(e.to_string())
        });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        }
        result
    } else {
        let error = remote_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(error)
    }
}
