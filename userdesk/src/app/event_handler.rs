//! # Event Handler
//!
//! Applies async task results to application state. Results arrive from
//! background tasks as [`AppEvent`] messages; each is handled under a
//! short-lived write lock.

use crate::app::state::{AppState, EditForm, Screen};
use crate::app::{handlers, App, AppEvent};
use crate::core::error::ApiError;
use shared::{LoginResponse, User, UserPage, UserUpdateResponse};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::UsersPageResult { seq, result } => self.handle_users_page_result(seq, result),
            AppEvent::UserFetchResult { id, result } => self.handle_user_fetch_result(id, result),
            AppEvent::UserUpdateResult { id, result } => self.handle_user_update_result(id, result),
            AppEvent::UserDeleteResult { id, result } => self.handle_user_delete_result(id, result),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing login result");

        match result {
            Ok(response) => {
                {
                    let mut state = self.state.write();
                    state.session.set(response.token);
                    state.login.in_flight = false;
                    state.login.error = None;
                    state
                        .pending_notifications
                        .push(("success".to_string(), "Login successful".to_string()));
                }
                // Land on the user list, which performs its initial fetch
                handlers::navigation::handle_screen_change(
                    self.state.clone(),
                    self.event_tx.clone(),
                    Screen::Users,
                );
            }
            Err(err) => {
                let mut state = self.state.write();
                state.login.in_flight = false;
                tracing::warn!(error = %err, "Login failed");
                state
                    .pending_notifications
                    .push(("error".to_string(), "Login failed".to_string()));
            }
        }
    }

    fn handle_users_page_result(&mut self, seq: u64, result: Result<UserPage, ApiError>) {
        let mut state = self.state.write();

        // Only the response matching the latest dispatched fetch is applied
        if seq != state.users.fetch_seq {
            tracing::debug!(
                seq,
                latest = state.users.fetch_seq,
                "Discarding superseded page response"
            );
            return;
        }
        state.users.loading = false;

        match result {
            Ok(page) => {
                state.users.users = page.data;
                state.users.total_pages = page.total_pages.max(1);
            }
            Err(err) if err.is_unauthorized() => force_logout(&mut state),
            Err(err) => {
                // Previous collection stays (stale-but-present)
                tracing::warn!(error = %err, "Page fetch failed");
                state
                    .pending_notifications
                    .push(("error".to_string(), "Failed to fetch users".to_string()));
            }
        }
    }

    fn handle_user_fetch_result(&mut self, id: i64, result: Result<User, ApiError>) {
        let navigate_back = {
            let mut state = self.state.write();

            // A late response for an edit that is no longer open is dropped
            let matches_open_edit = state.edit.as_ref().is_some_and(|edit| edit.id == id);
            if !matches_open_edit {
                tracing::debug!(id, "Discarding user fetch for a closed edit screen");
                return;
            }

            match result {
                Ok(user) => {
                    if let Some(edit) = state.edit.as_mut() {
                        edit.form = Some(EditForm::from(user));
                    }
                    false
                }
                Err(err) if err.is_unauthorized() => {
                    force_logout(&mut state);
                    false
                }
                Err(err) => {
                    tracing::warn!(id, error = %err, "User fetch failed");
                    state.pending_notifications.push((
                        "error".to_string(),
                        "Failed to fetch user details".to_string(),
                    ));
                    state.edit = None;
                    true
                }
            }
        };

        // The edit form never renders against a failed fetch
        if navigate_back {
            handlers::navigation::handle_screen_change(
                self.state.clone(),
                self.event_tx.clone(),
                Screen::Users,
            );
        }
    }

    fn handle_user_update_result(&mut self, id: i64, result: Result<UserUpdateResponse, ApiError>) {
        let navigate_back = {
            let mut state = self.state.write();

            let matches_open_edit = state.edit.as_ref().is_some_and(|edit| edit.id == id);
            if !matches_open_edit {
                tracing::debug!(id, "Discarding update result for a closed edit screen");
                return;
            }

            match result {
                Ok(_) => {
                    state
                        .pending_notifications
                        .push(("success".to_string(), "User updated successfully".to_string()));
                    state.edit = None;
                    true
                }
                Err(err) if err.is_unauthorized() => {
                    force_logout(&mut state);
                    false
                }
                Err(err) => {
                    // Form stays open for retry
                    if let Some(edit) = state.edit.as_mut() {
                        edit.saving = false;
                    }
                    tracing::warn!(id, error = %err, "Update failed");
                    state
                        .pending_notifications
                        .push(("error".to_string(), "Failed to update user".to_string()));
                    false
                }
            }
        };

        if navigate_back {
            handlers::navigation::handle_screen_change(
                self.state.clone(),
                self.event_tx.clone(),
                Screen::Users,
            );
        }
    }

    fn handle_user_delete_result(&mut self, id: i64, result: Result<(), ApiError>) {
        let mut state = self.state.write();

        match result {
            Ok(()) => {
                state.users.users.retain(|u| u.id != id);
                if state
                    .users
                    .delete_dialog
                    .as_ref()
                    .is_some_and(|dialog| dialog.user.id == id)
                {
                    state.users.delete_dialog = None;
                }
                state
                    .pending_notifications
                    .push(("success".to_string(), "User deleted successfully".to_string()));
            }
            Err(err) if err.is_unauthorized() => force_logout(&mut state),
            Err(err) => {
                // Dialog stays open so the delete can be retried
                if let Some(dialog) = state.users.delete_dialog.as_mut() {
                    if dialog.user.id == id {
                        dialog.in_flight = false;
                    }
                }
                tracing::warn!(id, error = %err, "Delete failed");
                state
                    .pending_notifications
                    .push(("error".to_string(), "Failed to delete user".to_string()));
            }
        }
    }
}

/// Invalidate the session after an unauthorized response and return to the
/// login screen.
fn force_logout(state: &mut AppState) {
    tracing::warn!("Unauthorized response - clearing session");
    state.session.clear();
    state.current_screen = Screen::Login;
    state.login = crate::app::state::LoginState::default();
    state.users = crate::app::state::UserListState::default();
    state.edit = None;
    state.pending_notifications.push((
        "warning".to_string(),
        "Session expired, please sign in again".to_string(),
    ));
}
