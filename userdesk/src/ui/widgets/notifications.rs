//! # Notifications Widget
//!
//! Toast notification system using egui-notify for action outcomes.

use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show a warning notification
    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    /// Show an info notification
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Move pending (level, message) pairs from application state into toasts.
    pub fn drain_pending(&mut self, pending: Vec<(String, String)>) {
        for (level, message) in pending {
            match level.as_str() {
                "success" => self.success(message),
                "error" => self.error(message),
                "warning" => self.warning(message),
                _ => self.info(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
