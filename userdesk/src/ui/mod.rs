//! # GUI Rendering Framework
//!
//! Orchestrates the per-frame rendering pipeline: drains pending
//! notifications into toasts, applies the route guard, and dispatches to
//! the current screen.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};
use egui;
use widgets::notifications::NotificationManager;

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Move queued (level, message) pairs into the toast system
    let pending = {
        let mut state = app.state.write();
        std::mem::take(&mut state.pending_notifications)
    };
    notifications.drain_pending(pending);

    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding the lock

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;

        // Redirect to Login if trying to access a protected screen without
        // a stored token; nothing of the protected screen renders.
        if current_screen.requires_auth() && !state.is_authenticated() {
            app.handle_screen_change(Screen::Login);
            screens::login::render(ui, &state, app);
            return;
        }

        // Header bar on authenticated screens
        if state.is_authenticated() && current_screen != Screen::Login {
            widgets::nav_bar::render_nav_bar(ui, &state, app);
            ui.add_space(5.0);
            ui.separator();
            ui.add_space(5.0);
        }

        match current_screen {
            Screen::Login => screens::login::render(ui, &state, app),
            Screen::Users => screens::users::render(ui, &state, app),
            Screen::Edit(_) => screens::edit::render(ui, &state, app),
        }
    });

    notifications.show(ctx);
}
