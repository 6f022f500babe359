//! # Login Screen
//!
//! Credential form using egui widgets.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

/// Render the login screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        forms::render_form_heading(ui, "SIGN IN", &theme);
        ui.label(egui::RichText::new("Sign in to manage the user directory").color(theme.dim));
        ui.add_space(20.0);

        // Create local mutable copies for text inputs
        let mut email_input = state.login.email.clone();
        let mut password_input = state.login.password.clone();
        let mut submit = false;

        // Email field
        forms::render_text_input(
            ui,
            "Email:",
            &mut email_input,
            "Enter your email",
            false,
            [280.0, 30.0],
        );

        // Update state if changed
        {
            let mut state = app.state.write();
            state.login.email = email_input.clone();
        }

        ui.add_space(10.0);

        // Password field
        let password_response = forms::render_text_input(
            ui,
            "Password:",
            &mut password_input,
            "Enter your password",
            true,
            [280.0, 30.0],
        );

        // Check for Enter key press
        if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        {
            let mut state = app.state.write();
            state.login.password = password_input.clone();
        }

        ui.add_space(15.0);

        // Inline error from local validation
        if let Some(err) = state.login.error.as_deref() {
            forms::render_error(ui, err, &theme);
        }

        let busy = state.login.in_flight;
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 70.0);
            if forms::render_button(
                ui,
                "Sign In",
                !busy,
                Some(theme.selected),
                Some(egui::vec2(120.0, 35.0)),
            )
            .clicked()
                || (submit && !busy)
            {
                app.handle_login_click(email_input.clone(), password_input.clone());
            }
            if busy {
                ui.spinner();
            }
        });

        ui.add_space(10.0);
        forms::render_hint(ui, "Press <Enter> to sign in", &theme);
    });
}
