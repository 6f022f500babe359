//! # User List Screen
//!
//! Paginated, searchable user list with delete-with-confirmation.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{self, UserAction};
use egui;

/// Render the user list screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    // Search row. The filter applies to the already-fetched page only and
    // never triggers a request.
    ui.horizontal(|ui| {
        ui.label("Search:");
        let mut search_input = state.users.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search_input)
                .hint_text("Search users by name or email...")
                .desired_width(320.0),
        );
        if response.changed() {
            let mut state = app.state.write();
            state.users.search = search_input;
        }
    });

    ui.add_space(10.0);

    if state.users.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.colored_label(theme.dim, "Loading users...");
        });
    } else {
        let filtered = state.users.filtered();

        if filtered.is_empty() {
            if state.users.search.is_empty() {
                tables::render_empty_state(ui, "No users on this page", None, &theme);
            } else {
                tables::render_empty_state(
                    ui,
                    "No users match the search",
                    Some("Try a different name or email"),
                    &theme,
                );
            }
        } else if let Some(action) = tables::render_user_table(ui, &filtered, &theme) {
            match action {
                UserAction::Edit(id) => app.handle_screen_change(Screen::Edit(id)),
                UserAction::Delete(user) => app.handle_delete_request(user),
            }
        }

        ui.add_space(15.0);
        render_pagination(ui, state, app, &theme);
    }

    render_delete_dialog(ui.ctx(), state, app, &theme);
}

/// Numbered page buttons plus previous/next controls clamped at the
/// boundaries.
fn render_pagination(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let users = &state.users;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(users.has_previous(), egui::Button::new("< Previous"))
            .clicked()
        {
            app.handle_previous_page();
        }

        for page in 1..=users.total_pages {
            let label = page.to_string();
            let button = if page == users.page {
                egui::Button::new(egui::RichText::new(label).strong()).fill(theme.selected)
            } else {
                egui::Button::new(label)
            };
            if ui.add(button).clicked() {
                app.handle_page_change(page);
            }
        }

        if ui
            .add_enabled(users.has_next(), egui::Button::new("Next >"))
            .clicked()
        {
            app.handle_next_page();
        }
    });
}

/// Delete confirmation dialog holding the targeted user. Stays open on
/// failure so the delete can be retried.
fn render_delete_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(dialog) = state.users.delete_dialog.as_ref() else {
        return;
    };

    let mut open = true;
    egui::Window::new("Delete User")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!(
                "Are you sure you want to delete {}? This action cannot be undone.",
                dialog.user.full_name()
            ));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!dialog.in_flight, egui::Button::new("Cancel"))
                    .clicked()
                {
                    app.handle_delete_cancel();
                }

                let delete_button =
                    egui::Button::new(egui::RichText::new("Delete").strong()).fill(theme.error);
                if ui.add_enabled(!dialog.in_flight, delete_button).clicked() {
                    app.handle_delete_confirm();
                }

                if dialog.in_flight {
                    ui.spinner();
                }
            });
        });

    if !open {
        app.handle_delete_cancel();
    }
}
