//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen.
//!
//! ## Rendering Pattern
//!
//! All screen modules follow the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the cloned state snapshot
//!     // - Write input changes back through app.state
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot** for rendering, so no lock is
//! held while drawing. User actions call `app.handle_*` methods which
//! acquire locks internally.

pub mod edit;
pub mod login;
pub mod users;
