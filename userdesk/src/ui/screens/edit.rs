//! # Edit Screen
//!
//! Controlled form over a single fetched user. The form only renders after
//! a successful fetch; cancellation discards in-memory changes.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

/// Render the edit screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    let Some(edit) = state.edit.as_ref() else {
        // Navigation back to the list is already in flight
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("< Back to Users").clicked() {
            app.handle_screen_change(Screen::Users);
        }
    });

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        forms::render_form_heading(ui, "EDIT USER", &theme);

        let Some(form) = edit.form.as_ref() else {
            ui.add_space(30.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.colored_label(theme.dim, "Loading user...");
            return;
        };

        // Create local mutable copies for text inputs
        let mut first_name_input = form.first_name.clone();
        let mut last_name_input = form.last_name.clone();
        let mut email_input = form.email.clone();
        let mut submit = false;

        forms::render_text_input(
            ui,
            "First name:",
            &mut first_name_input,
            "First name",
            false,
            [280.0, 30.0],
        );
        {
            let mut state = app.state.write();
            if let Some(form) = state.edit.as_mut().and_then(|edit| edit.form.as_mut()) {
                form.first_name = first_name_input.clone();
            }
        }
        ui.add_space(10.0);

        forms::render_text_input(
            ui,
            "Last name:",
            &mut last_name_input,
            "Last name",
            false,
            [280.0, 30.0],
        );
        {
            let mut state = app.state.write();
            if let Some(form) = state.edit.as_mut().and_then(|edit| edit.form.as_mut()) {
                form.last_name = last_name_input.clone();
            }
        }
        ui.add_space(10.0);

        let email_response = forms::render_text_input(
            ui,
            "Email:",
            &mut email_input,
            "your@email.com",
            false,
            [280.0, 30.0],
        );

        // Check for Enter key press
        if email_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        {
            let mut state = app.state.write();
            if let Some(form) = state.edit.as_mut().and_then(|edit| edit.form.as_mut()) {
                form.email = email_input.clone();
            }
        }
        ui.add_space(15.0);

        // Inline error from validation before dispatch
        if let Some(err) = edit.error.as_deref() {
            forms::render_error(ui, err, &theme);
        }

        let busy = edit.saving;
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 110.0);

            if forms::render_button(ui, "Cancel", !busy, None, Some(egui::vec2(90.0, 32.0)))
                .clicked()
            {
                // Discards in-memory changes without confirmation
                app.handle_screen_change(Screen::Users);
            }

            ui.add_space(10.0);

            if forms::render_button(
                ui,
                "Save Changes",
                !busy,
                Some(theme.selected),
                Some(egui::vec2(120.0, 32.0)),
            )
            .clicked()
                || (submit && !busy)
            {
                app.handle_edit_submit();
            }

            if busy {
                ui.spinner();
            }
        });
    });
}
