//! # Authentication Handlers
//!
//! Handlers for login, logout, and session-related actions.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, LoginState, Screen, UserListState};
use crate::core::service::ApiService;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle login submission.
///
/// Empty fields surface as an inline form error without a network call.
/// While a request is outstanding the submit control stays disabled; this
/// UI-level guard is the only duplicate-dispatch prevention.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let api_client = {
        let mut state = state.write();
        if state.login.in_flight {
            return;
        }
        if email.is_empty() || password.is_empty() {
            state.login.error = Some("Email and password required".to_string());
            return;
        }
        state.login.error = None;
        state.login.in_flight = true;
        state.api_client.clone()
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle logout: clear the session and return to the login screen.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.clear();
    state.current_screen = Screen::Login;
    state.login = LoginState::default();
    state.users = UserListState::default();
    state.edit = None;
    state
        .pending_notifications
        .push(("success".to_string(), "Logged out".to_string()));
    tracing::info!("User logged out");
}
