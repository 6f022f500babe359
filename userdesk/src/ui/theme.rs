//! # Theme
//!
//! Color palette used across screens and widgets.

use egui::Color32;

/// Application color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Accent color for headings, the current page, and primary actions
    pub selected: Color32,
    /// Error text and destructive actions
    pub error: Color32,
    /// De-emphasized text (hints, empty states)
    pub dim: Color32,
    /// Success accents
    pub success: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Color32::from_rgb(99, 102, 241),
            error: Color32::from_rgb(220, 38, 38),
            dim: Color32::from_rgb(140, 140, 150),
            success: Color32::from_rgb(22, 163, 74),
        }
    }
}
