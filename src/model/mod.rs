mod entry;
mod entry_screen;
mod list_screen;
pub mod prompt;
mod validation;

pub use entry::Entry;
pub use entry_screen::{EntryScreen, INCREMENT_CLAMP, INCREMENT_THRESHOLD, STEP, Submission};
pub use list_screen::{ListError, ListScreen};
pub use prompt::{Prompt, Prompter};
pub use validation::{
    MAX_COUNT, MIN_COUNT, ValidationError, parse_count, parse_leading_int, validate_label,
};
