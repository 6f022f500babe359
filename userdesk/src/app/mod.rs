//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! handlers, and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                    │
//! │  App (orchestrator)                                  │
//! │  - on_tick()      - drains async results each frame  │
//! │  - handle_*()     - user action handlers             │
//! │  State: Arc<RwLock<AppState>>                        │
//! └──────────────────────┬───────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼───────────────────────────────┐
//! │           Background Tasks (Tokio)                   │
//! │  - login / page fetch / get / update / delete        │
//! │  - each reports one AppEvent back to the main thread │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers acquire the state lock briefly, dispatch a task, and return;
//! rendering happens against a cloned snapshot so no lock is held while
//! drawing. Requests in flight are never cancelled; superseded page
//! fetches are discarded by sequence number when their responses arrive.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the shared state, the event channel both ends, and the handler
/// surface the UI calls into.
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in [`App::on_tick`]
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into background tasks
    pub(crate) event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance.
    ///
    /// The session store is injected here and shared with the API client;
    /// when it already holds a token the app starts on the user list and
    /// dispatches the initial page fetch, otherwise it starts on login.
    pub fn new(session: SessionStore) -> Self {
        let api_client = Arc::new(ApiClient::new(session.clone()));
        let authenticated = session.is_authenticated();

        let state = AppState {
            current_screen: if authenticated {
                Screen::Users
            } else {
                Screen::Login
            },
            login: LoginState::default(),
            users: UserListState::default(),
            edit: None,
            session,
            api_client,
            pending_notifications: Vec::new(),
        };

        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        if authenticated {
            tasks::users::fetch_page(app.state.clone(), app.event_tx.clone());
        }

        tracing::info!(authenticated, "App state initialized");
        app
    }

    /// Called every frame to process async events and update state.
    ///
    /// Non-blocking: drains every pending event with `try_recv` and applies
    /// it under a short-lived write lock.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle an async event result.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ----- Handler surface called from the UI layer -----

    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone(), email, password);
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    pub fn handle_page_change(&mut self, page: u32) {
        handlers::users::handle_page_change(self.state.clone(), self.event_tx.clone(), page);
    }

    pub fn handle_previous_page(&mut self) {
        handlers::users::handle_previous_page(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_next_page(&mut self) {
        handlers::users::handle_next_page(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_delete_request(&mut self, user: shared::User) {
        handlers::users::handle_delete_request(self.state.clone(), user);
    }

    pub fn handle_delete_cancel(&mut self) {
        handlers::users::handle_delete_cancel(self.state.clone());
    }

    pub fn handle_delete_confirm(&mut self) {
        handlers::users::handle_delete_confirm(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_edit_submit(&mut self) {
        handlers::users::handle_edit_submit(self.state.clone(), self.event_tx.clone());
    }
}
