//! Prompts the view models raise: modal confirmations and acknowledgements.

/// A titled message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub message: &'static str,
}

pub const LIMIT_INCREMENT: Prompt = Prompt {
    title: "Limit Reached",
    message: "can't increment > 100",
};

pub const LIMIT_DECREMENT: Prompt = Prompt {
    title: "Limit Reached",
    message: "can't decrement < 0",
};

pub const INVALID_LABEL: Prompt = Prompt {
    title: "Invalid Input",
    message: "Please enter only letters",
};

pub const NO_INPUT: Prompt = Prompt {
    title: "No Input",
    message: "Please enter some text before submitting.",
};

pub const INVALID_COUNT: Prompt = Prompt {
    title: "Invalid Input",
    message: "Please enter a number between 0 and 99",
};

pub const CONFIRM_DELETE: Prompt = Prompt {
    title: "Confirm Delete",
    message: "Are you sure you want to delete this item?",
};

pub const CONFIRM_CLEAR_ALL: Prompt = Prompt {
    title: "Confirm Clear All",
    message: "Are you sure you want to clear all data?",
};

/// The modal capability the view models talk to.
///
/// `confirm` is a two-choice prompt (cancel / destructive confirm) and
/// returns `true` only for the destructive choice. `notify` is a
/// single-button acknowledgement with no outcome.
pub trait Prompter {
    fn confirm(&mut self, title: &str, message: &str) -> bool;
    fn notify(&mut self, title: &str, message: &str);
}

impl Prompt {
    /// Shows this prompt as a notice.
    pub fn notify(self, prompter: &mut impl Prompter) {
        prompter.notify(self.title, self.message);
    }

    /// Asks this prompt as a confirmation.
    pub fn confirm(self, prompter: &mut impl Prompter) -> bool {
        prompter.confirm(self.title, self.message)
    }
}
