//! Reusable TUI widgets.

pub mod dialog;
pub mod form;
pub mod status_bar;

pub use dialog::{DialogKind, centered_rect, draw_dialog};
pub use form::{Form, FormField, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
