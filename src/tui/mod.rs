//! TUI: App state, event loop, screens, widgets, modal overlay.

pub mod action;
pub mod app;
pub mod error;
pub mod modal;
pub mod screens;
pub mod widgets;

pub use app::App;
pub use error::AppError;
