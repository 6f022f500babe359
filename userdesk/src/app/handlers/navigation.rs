//! # Navigation Handlers
//!
//! Screen navigation with the authentication guard wrapped around
//! protected screens.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, EditState, Screen};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change with the authentication guard.
///
/// Navigating to a protected screen without a stored token is rewritten to
/// the login screen and nothing of the protected screen is set up; in
/// particular, no fetch is dispatched for it. Entering a protected screen
/// triggers its mount fetch.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut state = state.write();

        if screen.requires_auth() && !state.is_authenticated() {
            tracing::info!(
                "Access denied: {} requires authentication, redirecting to login",
                screen.title()
            );
            state.current_screen = Screen::Login;
            return;
        }

        state.current_screen = screen;
        match screen {
            Screen::Edit(id) => {
                state.edit = Some(EditState::new(id));
            }
            Screen::Users => {
                state.edit = None;
            }
            Screen::Login => {}
        }
    }

    // Mount fetches, dispatched after the state lock is released
    match screen {
        Screen::Users => tasks::users::fetch_page(state, event_tx),
        Screen::Edit(id) => tasks::users::fetch_user(state, event_tx, id),
        Screen::Login => {}
    }
}
