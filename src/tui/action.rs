//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::Submission;

use super::app::Screen;
use super::modal::{ConfirmRequest, TuiPrompter};

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to move between screens, raise confirmations,
/// and carry a finished entry from the Add screen back to the list.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Ask the user before running a destructive operation.
    Confirm(ConfirmRequest),
    /// Return to the list with a new entry.
    Submit(Submission),
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    ///
    /// Notices raised by the view model are left in `prompter`.
    fn handle_key(&mut self, key: KeyEvent, prompter: &mut TuiPrompter) -> Action;
}
