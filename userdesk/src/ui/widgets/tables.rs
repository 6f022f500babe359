//! # Table Components
//!
//! The user table and shared empty-state rendering.

use crate::ui::theme::Theme;
use egui;
use egui_extras::{Column, TableBuilder};
use shared::User;

/// Action requested from a table row
#[derive(Debug, Clone)]
pub enum UserAction {
    Edit(i64),
    Delete(User),
}

/// Render the user table and report the clicked row action, if any.
pub fn render_user_table(
    ui: &mut egui::Ui,
    users: &[&User],
    theme: &Theme,
) -> Option<UserAction> {
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder().at_least(200.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(140.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.colored_label(theme.selected, "ID");
            });
            header.col(|ui| {
                ui.colored_label(theme.selected, "Name");
            });
            header.col(|ui| {
                ui.colored_label(theme.selected, "Email");
            });
            header.col(|ui| {
                ui.colored_label(theme.selected, "Avatar");
            });
            header.col(|ui| {
                ui.colored_label(theme.selected, "Actions");
            });
        })
        .body(|mut body| {
            for user in users {
                body.row(28.0, |mut row| {
                    row.col(|ui| {
                        ui.label(user.id.to_string());
                    });
                    row.col(|ui| {
                        ui.label(user.full_name());
                    });
                    row.col(|ui| {
                        ui.label(&user.email);
                    });
                    row.col(|ui| {
                        ui.hyperlink_to("view", &user.avatar);
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            action = Some(UserAction::Edit(user.id));
                        }
                        if ui
                            .button(egui::RichText::new("Delete").color(theme.error))
                            .clicked()
                        {
                            action = Some(UserAction::Delete((*user).clone()));
                        }
                    });
                });
            }
        });

    action
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}
