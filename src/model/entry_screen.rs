//! Counter and label builder behind the Add screen.

use tracing::{debug, info};

use super::prompt::{INVALID_LABEL, LIMIT_DECREMENT, LIMIT_INCREMENT, NO_INPUT, Prompter};
use super::validation::validate_label;

/// Amount added or removed by one increment / decrement.
pub const STEP: u8 = 20;
/// An increment is refused once `count + STEP` exceeds this.
pub const INCREMENT_THRESHOLD: u8 = 100;
/// Value the counter is clamped to when an increment is refused.
///
/// Deliberately one below [`INCREMENT_THRESHOLD`]: 100 is reachable by
/// stepping from 80, the next increment then drops to 99.
pub const INCREMENT_CLAMP: u8 = 99;

/// A finished `(label, count)` pair on its way to the list.
///
/// Not `Clone`: handing one to [`ListScreen::receive`](super::ListScreen::receive)
/// consumes it, so each submission is appended at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub count: u8,
}

/// State for building a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryScreen {
    count: u8,
    text: String,
}

impl EntryScreen {
    /// Creates a screen with the counter at 0 and an empty label.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Adds [`STEP`], or clamps to [`INCREMENT_CLAMP`] with a notice when the
    /// result would exceed [`INCREMENT_THRESHOLD`].
    pub fn increment(&mut self, prompter: &mut impl Prompter) {
        if self.count + STEP > INCREMENT_THRESHOLD {
            debug!(count = self.count, "increment refused, clamping");
            self.count = INCREMENT_CLAMP;
            LIMIT_INCREMENT.notify(prompter);
        } else {
            self.count += STEP;
            debug!(count = self.count, "incremented");
        }
    }

    /// Subtracts [`STEP`], or clamps to 0 with a notice when the result would
    /// go negative.
    pub fn decrement(&mut self, prompter: &mut impl Prompter) {
        match self.count.checked_sub(STEP) {
            Some(count) => {
                self.count = count;
                debug!(count, "decremented");
            }
            None => {
                debug!(count = self.count, "decrement refused, clamping");
                self.count = 0;
                LIMIT_DECREMENT.notify(prompter);
            }
        }
    }

    /// Replaces the label with `new_text` if it is letters only.
    ///
    /// Returns `false` (and raises a notice) when the change is rejected; the
    /// previous label is kept intact.
    pub fn set_text(&mut self, new_text: &str, prompter: &mut impl Prompter) -> bool {
        match validate_label(new_text) {
            Ok(()) => {
                self.text = new_text.to_string();
                true
            }
            Err(e) => {
                debug!(error = %e, rejected = new_text, "label change rejected");
                INVALID_LABEL.notify(prompter);
                false
            }
        }
    }

    /// Produces a [`Submission`] from the current state.
    ///
    /// An empty label raises a notice and returns `None`.
    pub fn submit(&self, prompter: &mut impl Prompter) -> Option<Submission> {
        if self.text.is_empty() {
            debug!("submit refused, empty label");
            NO_INPUT.notify(prompter);
            return None;
        }
        info!(text = %self.text, count = self.count, "entry submitted");
        Some(Submission {
            text: self.text.clone(),
            count: self.count,
        })
    }
}
