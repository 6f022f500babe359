//! # User Tasks
//!
//! Async background tasks for the user collection. Each task performs one
//! remote call on the shared runtime and reports back over the event channel.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::UserUpdate;
use std::sync::Arc;

/// Fetch the current page of users.
///
/// Bumps the list's fetch sequence and marks it loading; the event handler
/// applies only the response carrying the latest sequence, so a superseded
/// fetch can never overwrite a newer one.
pub(crate) fn fetch_page(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, seq, page) = {
        let mut state = state.write();
        state.users.fetch_seq += 1;
        state.users.loading = true;
        (
            state.api_client.clone(),
            state.users.fetch_seq,
            state.users.page,
        )
    };

    tracing::debug!(page, seq, "Dispatching page fetch");
    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.list_users(page).await;
        let _ = tx.send(AppEvent::UsersPageResult { seq, result }).await;
    });
}

/// Fetch a single user for the edit screen.
pub(crate) fn fetch_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let api_client = state.read().api_client.clone();

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.get_user(id).await;
        let _ = tx.send(AppEvent::UserFetchResult { id, result }).await;
    });
}

/// Submit an update for a user.
pub(crate) fn update_user(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: i64,
    update: UserUpdate,
) {
    let api_client = state.read().api_client.clone();

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.update_user(id, update).await;
        let _ = tx.send(AppEvent::UserUpdateResult { id, result }).await;
    });
}

/// Delete a user.
pub(crate) fn delete_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: i64) {
    let api_client = state.read().api_client.clone();

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        let result = api_client.delete_user(id).await;
        let _ = tx.send(AppEvent::UserDeleteResult { id, result }).await;
    });
}
