//! # User List & Edit Handlers
//!
//! Handlers for pagination, deletion with confirmation, and the edit form.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DeleteDialog};
use crate::app::tasks;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{User, UserUpdate};
use std::sync::Arc;

/// Handle a page change from the pagination controls.
///
/// The requested index is clamped to `1..=total_pages`, so page 0 and
/// `total_pages + 1` are unreachable. Re-selecting the current page is a
/// no-op.
pub(crate) fn handle_page_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    page: u32,
) {
    {
        let mut state = state.write();
        let total = state.users.total_pages.max(1);
        let page = page.clamp(1, total);
        if page == state.users.page {
            return;
        }
        state.users.page = page;
    }
    tasks::users::fetch_page(state, event_tx);
}

/// Previous page, clamped at page 1.
pub(crate) fn handle_previous_page(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let target = {
        let state = state.read();
        state.users.page.saturating_sub(1)
    };
    handle_page_change(state, event_tx, target.max(1));
}

/// Next page, clamped at the last reported page.
pub(crate) fn handle_next_page(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let target = {
        let state = state.read();
        state.users.page.saturating_add(1)
    };
    handle_page_change(state, event_tx, target);
}

/// Open the delete confirmation dialog for a user.
pub(crate) fn handle_delete_request(state: Arc<RwLock<AppState>>, user: User) {
    let mut state = state.write();
    state.users.delete_dialog = Some(DeleteDialog {
        user,
        in_flight: false,
    });
}

/// Dismiss the delete confirmation dialog without calling the service.
pub(crate) fn handle_delete_cancel(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.users.delete_dialog = None;
}

/// Confirm the pending delete.
pub(crate) fn handle_delete_confirm(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let id = {
        let mut state = state.write();
        match state.users.delete_dialog.as_mut() {
            Some(dialog) if !dialog.in_flight => {
                dialog.in_flight = true;
                dialog.user.id
            }
            _ => return,
        }
    };
    tasks::users::delete_user(state, event_tx, id);
}

/// Submit the edit form.
///
/// The structured update record is validated before dispatch; a validation
/// failure surfaces inline and nothing is sent.
pub(crate) fn handle_edit_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (id, update) = {
        let mut state = state.write();
        let Some(edit) = state.edit.as_mut() else {
            return;
        };
        if edit.saving {
            return;
        }
        let Some(form) = edit.form.as_ref() else {
            return;
        };

        let update = UserUpdate {
            first_name: Some(form.first_name.clone()),
            last_name: Some(form.last_name.clone()),
            email: Some(form.email.clone()),
        };
        if let Err(message) = validation::validate_user_update(&update) {
            edit.error = Some(message);
            return;
        }

        edit.error = None;
        edit.saving = true;
        (edit.id, update)
    };
    tasks::users::update_user(state, event_tx, id, update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::services::session::SessionStore;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn authed_app() -> App {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "userdesk-handler-test-{}-{}.json",
            std::process::id(),
            n
        ));
        let session = SessionStore::open(path);
        session.set("test-token".to_string());
        App::new(session)
    }

    fn mk_user(id: i64, first: &str) -> User {
        User {
            id,
            email: format!("{}@reqres.in", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            avatar: String::new(),
        }
    }

    #[test]
    fn page_change_is_clamped_to_reported_bounds() {
        let app = authed_app();
        {
            let mut state = app.state.write();
            state.users.total_pages = 2;
            state.users.page = 1;
            state.users.loading = false;
        }
        let seq_before = app.state.read().users.fetch_seq;

        // Page 0 clamps to 1 == current page: no fetch dispatched
        handle_page_change(app.state.clone(), app.event_tx.clone(), 0);
        assert_eq!(app.state.read().users.page, 1);
        assert_eq!(app.state.read().users.fetch_seq, seq_before);

        // Page beyond the last clamps to the last and fetches once
        handle_page_change(app.state.clone(), app.event_tx.clone(), 99);
        assert_eq!(app.state.read().users.page, 2);
        assert_eq!(app.state.read().users.fetch_seq, seq_before + 1);

        app.state.read().session.clear();
    }

    #[test]
    fn previous_and_next_respect_boundaries() {
        let app = authed_app();
        {
            let mut state = app.state.write();
            state.users.total_pages = 2;
            state.users.page = 1;
        }

        handle_previous_page(app.state.clone(), app.event_tx.clone());
        assert_eq!(app.state.read().users.page, 1);

        handle_next_page(app.state.clone(), app.event_tx.clone());
        assert_eq!(app.state.read().users.page, 2);

        handle_next_page(app.state.clone(), app.event_tx.clone());
        assert_eq!(app.state.read().users.page, 2);

        app.state.read().session.clear();
    }

    #[test]
    fn delete_dialog_lifecycle() {
        let app = authed_app();
        let user = mk_user(3, "Eve");

        handle_delete_request(app.state.clone(), user.clone());
        {
            let state = app.state.read();
            let dialog = state.users.delete_dialog.as_ref().expect("dialog open");
            assert_eq!(dialog.user.id, 3);
            assert!(!dialog.in_flight);
        }

        handle_delete_cancel(app.state.clone());
        assert!(app.state.read().users.delete_dialog.is_none());

        // Confirm marks the dialog in flight and keeps it open
        handle_delete_request(app.state.clone(), user);
        handle_delete_confirm(app.state.clone(), app.event_tx.clone());
        {
            let state = app.state.read();
            let dialog = state.users.delete_dialog.as_ref().expect("dialog open");
            assert!(dialog.in_flight);
        }

        app.state.read().session.clear();
    }

    #[test]
    fn edit_submit_rejects_invalid_email_without_dispatch() {
        let app = authed_app();
        {
            let mut state = app.state.write();
            state.edit = Some(crate::app::state::EditState {
                id: 2,
                form: Some(crate::app::state::EditForm {
                    first_name: "Janet".to_string(),
                    last_name: "Weaver".to_string(),
                    email: "not-an-email".to_string(),
                }),
                error: None,
                saving: false,
            });
        }

        handle_edit_submit(app.state.clone(), app.event_tx.clone());

        let state = app.state.read();
        let edit = state.edit.as_ref().expect("edit state");
        assert!(!edit.saving);
        assert!(edit.error.is_some());

        state.session.clear();
    }
}
