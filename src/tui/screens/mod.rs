//! TUI screen implementations.

pub mod add;
pub mod home;

pub use add::{AddState, draw_add};
pub use home::{HomeState, draw_home};
