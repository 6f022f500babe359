//! # Navigation Bar
//!
//! Header bar shown on authenticated screens: application title, current
//! screen, and the logout control.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use egui;

/// Render the header bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Userdesk")
                .size(18.0)
                .strong()
                .color(theme.selected),
        );
        ui.separator();
        ui.label(state.current_screen.title());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new("Logout").color(theme.error))
                .clicked()
            {
                app.handle_logout_click();
            }
        });
    });
}
