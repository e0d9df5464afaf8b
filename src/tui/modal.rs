//! Modal overlay state and the [`Prompter`] the TUI hands to view models.
//!
//! Terminal prompts cannot block inside a key handler, so confirmations are
//! split in two: a screen asks for one by returning a [`ConfirmRequest`], the
//! app shows it as an [`Overlay`], and once the user answers the request is
//! replayed against the view model with a [`TuiPrompter`] holding the answer.

use crate::model::Prompter;
use crate::model::prompt::{CONFIRM_CLEAR_ALL, CONFIRM_DELETE, Prompt};

/// A notice waiting for acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// A destructive operation waiting on the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRequest {
    /// Delete the entry at this index.
    Delete(usize),
    /// Remove every entry.
    ClearAll,
}

impl ConfirmRequest {
    /// The title and message shown for this request.
    pub fn prompt(self) -> Prompt {
        match self {
            Self::Delete(_) => CONFIRM_DELETE,
            Self::ClearAll => CONFIRM_CLEAR_ALL,
        }
    }
}

/// What the modal layer is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Notice(Notice),
    Confirm(ConfirmRequest),
}

/// Prompter used while handling one key press.
///
/// Confirmations are answered with a preset value (cancel unless built with
/// [`answering`](Self::answering)); the last notice raised is kept for the
/// app to show.
#[derive(Debug, Default)]
pub struct TuiPrompter {
    answer: bool,
    notice: Option<Notice>,
}

impl TuiPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A prompter whose confirmations all return `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            notice: None,
        }
    }

    /// Takes the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

impl Prompter for TuiPrompter {
    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.answer
    }

    fn notify(&mut self, title: &str, message: &str) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
