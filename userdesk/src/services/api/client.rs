//! # API Client
//!
//! Main HTTP client for communication with the remote user-directory API.

use crate::core::error::{ApiError, ApiResult};
use crate::core::service::ApiService;
use crate::services::session::SessionStore;
use reqwest::{Client, RequestBuilder};
use shared::{ErrorResponse, LoginResponse, User, UserPage, UserUpdate, UserUpdateResponse};

/// Default base URL for the remote user-directory service
const API_BASE_URL: &str = "https://reqres.in/api";

/// Environment variable that overrides the base URL
const API_URL_ENV: &str = "USERDESK_API_URL";

/// HTTP client for the remote user-directory API.
///
/// The client holds a connection pool and the injected [`SessionStore`];
/// every outgoing request picks up the current bearer token, if present,
/// at send time.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client with the injected session store.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    /// The base URL comes from `USERDESK_API_URL` when set.
    pub fn new(session: SessionStore) -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| API_BASE_URL.to_string());
        Self::with_base_url(session, base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(session: SessionStore, base_url: impl Into<String>) -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    /// Build the full URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token from the session store, if present.
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Map a non-success response to the error taxonomy.
///
/// 401-class rejections become [`ApiError::Unauthorized`] so callers can
/// invalidate the session; 404 becomes [`ApiError::NotFound`]; everything
/// else carries the service's error message when the body parses as the
/// error envelope, the status text otherwise.
pub(crate) async fn remote_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match status.as_u16() {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        code => {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            ApiError::Remote {
                status: code,
                message,
            }
        }
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> ApiResult<LoginResponse> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn list_users(&self, page: u32) -> ApiResult<UserPage> {
        crate::services::api::users::list_users(self, page).await
    }

    async fn get_user(&self, id: i64) -> ApiResult<User> {
        crate::services::api::users::get_user(self, id).await
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> ApiResult<UserUpdateResponse> {
        crate::services::api::users::update_user(self, id, &update).await
    }

    async fn delete_user(&self, id: i64) -> ApiResult<()> {
        crate::services::api::users::delete_user(self, id).await
    }
}
