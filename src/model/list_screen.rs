//! Entry list manager behind the Home screen.

use thiserror::Error;
use tracing::{debug, info};

use super::entry::Entry;
use super::entry_screen::Submission;
use super::prompt::{CONFIRM_CLEAR_ALL, CONFIRM_DELETE, INVALID_COUNT, Prompter};
use super::validation::parse_count;

/// Precondition failures for [`ListScreen`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("no entry at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no edit in progress")]
    NoEditInProgress,
}

/// In-progress edit of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditDraft {
    index: usize,
    text: String,
    /// Raw count text, validated on commit.
    count: String,
}

/// Ordered list of entries plus the state of the inline editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScreen {
    items: Vec<Entry>,
    /// `Some` while the editor is open.
    draft: Option<EditDraft>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a submitted entry. Submissions with an empty label are dropped.
    pub fn receive(&mut self, submission: Submission) {
        if submission.text.is_empty() {
            debug!("ignoring submission with empty label");
            return;
        }
        info!(
            text = %submission.text,
            count = submission.count,
            index = self.items.len(),
            "entry appended"
        );
        self.items.push(Entry::new(submission.text, submission.count));
    }

    /// Removes the entry at `index` once the user confirms.
    ///
    /// Returns the removed entry, or `None` if the user cancelled. An
    /// out-of-range index fails before any prompt is shown.
    pub fn delete(
        &mut self,
        index: usize,
        prompter: &mut impl Prompter,
    ) -> Result<Option<Entry>, ListError> {
        self.check_index(index)?;
        if !CONFIRM_DELETE.confirm(prompter) {
            debug!(index, "delete cancelled");
            return Ok(None);
        }
        self.draft = None;
        let removed = self.items.remove(index);
        info!(index, entry = %removed, "entry deleted");
        Ok(Some(removed))
    }

    /// Empties the list once the user confirms. Returns whether it was cleared.
    pub fn clear_all(&mut self, prompter: &mut impl Prompter) -> bool {
        if !CONFIRM_CLEAR_ALL.confirm(prompter) {
            debug!("clear all cancelled");
            return false;
        }
        info!(removed = self.items.len(), "list cleared");
        self.items.clear();
        self.draft = None;
        true
    }

    /// Opens the editor on `index`, seeding the drafts from that entry.
    pub fn open_editor(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        let entry = &self.items[index];
        self.draft = Some(EditDraft {
            index,
            text: entry.text.clone(),
            count: entry.count.to_string(),
        });
        debug!(index, "editor opened");
        Ok(())
    }

    pub fn editor_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.draft.as_ref().map(|d| d.index)
    }

    /// Draft label, or `""` when the editor is closed.
    pub fn draft_text(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.text.as_str())
    }

    /// Raw draft count, or `""` when the editor is closed.
    pub fn draft_count(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.count.as_str())
    }

    /// Stores `text` as the draft label. No-op when the editor is closed.
    pub fn set_draft_text(&mut self, text: &str) {
        if let Some(draft) = &mut self.draft {
            draft.text = text.to_string();
        }
    }

    /// Stores `raw` as the draft count if it parses into `[0, 99]`, and
    /// blanks the draft otherwise. No-op when the editor is closed.
    pub fn set_draft_count(&mut self, raw: &str) {
        if let Some(draft) = &mut self.draft {
            draft.count = match parse_count(raw) {
                Ok(_) => raw.to_string(),
                Err(e) => {
                    debug!(error = %e, "draft count blanked");
                    String::new()
                }
            };
        }
    }

    /// Writes the draft back into the list and closes the editor.
    ///
    /// Returns `Ok(false)` with a notice, leaving the editor open, when the
    /// draft count is not a number in `[0, 99]`.
    pub fn commit_edit(&mut self, prompter: &mut impl Prompter) -> Result<bool, ListError> {
        let draft = self.draft.as_ref().ok_or(ListError::NoEditInProgress)?;
        let count = match parse_count(&draft.count) {
            Ok(count) => count,
            Err(e) => {
                debug!(error = %e, "edit rejected");
                INVALID_COUNT.notify(prompter);
                return Ok(false);
            }
        };
        let index = draft.index;
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        *slot = Entry::new(draft.text.clone(), count);
        info!(index, entry = %slot, "entry edited");
        self.draft = None;
        Ok(true)
    }

    /// Closes the editor without touching the list.
    pub fn cancel_edit(&mut self) {
        if self.draft.take().is_some() {
            debug!("edit cancelled");
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::prompt::testing::RecordingPrompter;

    fn submission(text: &str, count: u8) -> Submission {
        Submission {
            text: text.to_string(),
            count,
        }
    }

    fn list_of(labels: &[&str]) -> ListScreen {
        let mut list = ListScreen::new();
        for (i, label) in labels.iter().enumerate() {
            list.receive(submission(label, i as u8));
        }
        list
    }

    fn labels(list: &ListScreen) -> Vec<&str> {
        list.items().iter().map(|e| e.text.as_str()).collect()
    }

    mod arrival {
        use super::*;

        #[test]
        fn appends_submission_once() {
            let mut list = ListScreen::new();
            list.receive(submission("Foo", 40));
            assert_eq!(list.items(), &[Entry::new("Foo", 40)]);
        }

        #[test]
        fn preserves_insertion_order_and_duplicates() {
            let mut list = ListScreen::new();
            list.receive(submission("A", 20));
            list.receive(submission("B", 0));
            list.receive(submission("A", 20));
            assert_eq!(labels(&list), vec!["A", "B", "A"]);
        }

        #[test]
        fn empty_label_is_ignored() {
            let mut list = ListScreen::new();
            list.receive(submission("", 20));
            assert!(list.is_empty());
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn confirmed_removes_and_shifts() {
            let mut list = list_of(&["A", "B", "C"]);
            let mut prompter = RecordingPrompter::answering(&[true]);
            let removed = list.delete(1, &mut prompter).unwrap();
            assert_eq!(removed.map(|e| e.text), Some("B".to_string()));
            assert_eq!(labels(&list), vec!["A", "C"]);
            assert_eq!(
                prompter.confirms,
                vec![(
                    "Confirm Delete".into(),
                    "Are you sure you want to delete this item?".into()
                )]
            );
        }

        #[test]
        fn cancelled_keeps_list() {
            let mut list = list_of(&["A", "B", "C"]);
            let mut prompter = RecordingPrompter::answering(&[false]);
            assert_eq!(list.delete(1, &mut prompter), Ok(None));
            assert_eq!(labels(&list), vec!["A", "B", "C"]);
        }

        #[test]
        fn out_of_range_fails_without_prompt() {
            let mut list = list_of(&["A"]);
            let mut prompter = RecordingPrompter::answering(&[true]);
            assert_eq!(
                list.delete(3, &mut prompter),
                Err(ListError::IndexOutOfRange { index: 3, len: 1 })
            );
            assert!(prompter.confirms.is_empty());
        }

        #[test]
        fn confirmed_closes_open_editor() {
            let mut list = list_of(&["A", "B"]);
            list.open_editor(1).unwrap();
            let mut prompter = RecordingPrompter::answering(&[true]);
            list.delete(0, &mut prompter).unwrap();
            assert!(!list.editor_open());
        }
    }

    mod clear_all {
        use super::*;

        #[test]
        fn confirmed_empties_list() {
            let mut list = list_of(&["A", "B"]);
            let mut prompter = RecordingPrompter::answering(&[true]);
            assert!(list.clear_all(&mut prompter));
            assert!(list.is_empty());
            assert_eq!(prompter.confirms[0].0, "Confirm Clear All");
        }

        #[test]
        fn cancelled_keeps_list() {
            let mut list = list_of(&["A", "B"]);
            let mut prompter = RecordingPrompter::answering(&[false]);
            assert!(!list.clear_all(&mut prompter));
            assert_eq!(list.len(), 2);
        }
    }

    mod editor {
        use super::*;

        #[test]
        fn open_seeds_drafts() {
            let mut list = ListScreen::new();
            list.receive(submission("Foo", 40));
            list.open_editor(0).unwrap();
            assert!(list.editor_open());
            assert_eq!(list.edit_index(), Some(0));
            assert_eq!(list.draft_text(), "Foo");
            assert_eq!(list.draft_count(), "40");
        }

        #[test]
        fn open_out_of_range_fails() {
            let mut list = ListScreen::new();
            assert_eq!(
                list.open_editor(0),
                Err(ListError::IndexOutOfRange { index: 0, len: 0 })
            );
            assert!(!list.editor_open());
        }

        #[test]
        fn draft_count_keeps_valid_raw_text() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.set_draft_count("42");
            assert_eq!(list.draft_count(), "42");
            list.set_draft_count("7x");
            assert_eq!(list.draft_count(), "7x");
        }

        #[test]
        fn draft_count_blanked_on_invalid() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.set_draft_count("150");
            assert_eq!(list.draft_count(), "");
            list.set_draft_count("5");
            list.set_draft_count("abc");
            assert_eq!(list.draft_count(), "");
            list.set_draft_count("-1");
            assert_eq!(list.draft_count(), "");
        }

        #[test]
        fn draft_text_stored_as_typed() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.set_draft_text("Bar 2");
            assert_eq!(list.draft_text(), "Bar 2");
        }

        #[test]
        fn setters_ignored_when_closed() {
            let mut list = list_of(&["A"]);
            list.set_draft_text("X");
            list.set_draft_count("5");
            assert_eq!(list.draft_text(), "");
            assert_eq!(list.draft_count(), "");
        }

        #[test]
        fn commit_replaces_entry() {
            let mut list = list_of(&["A", "B"]);
            list.open_editor(0).unwrap();
            list.set_draft_text("Bar");
            list.set_draft_count("7");
            let mut prompter = RecordingPrompter::default();
            assert_eq!(list.commit_edit(&mut prompter), Ok(true));
            assert_eq!(list.items()[0], Entry::new("Bar", 7));
            assert_eq!(list.items()[1].text, "B");
            assert!(!list.editor_open());
            assert!(prompter.notices.is_empty());
        }

        #[test]
        fn commit_out_of_range_count_rejected() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.draft.as_mut().unwrap().count = "150".into();
            let mut prompter = RecordingPrompter::default();
            assert_eq!(list.commit_edit(&mut prompter), Ok(false));
            assert_eq!(list.items()[0], Entry::new("A", 0));
            assert!(list.editor_open());
            assert_eq!(list.draft_count(), "150");
            assert_eq!(
                prompter.notices,
                vec![(
                    "Invalid Input".into(),
                    "Please enter a number between 0 and 99".into()
                )]
            );
        }

        #[test]
        fn commit_blank_count_rejected() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.set_draft_count("");
            let mut prompter = RecordingPrompter::default();
            assert_eq!(list.commit_edit(&mut prompter), Ok(false));
            assert!(list.editor_open());
        }

        #[test]
        fn commit_without_editor_fails() {
            let mut list = list_of(&["A"]);
            let mut prompter = RecordingPrompter::default();
            assert_eq!(
                list.commit_edit(&mut prompter),
                Err(ListError::NoEditInProgress)
            );
        }

        #[test]
        fn cancel_leaves_items() {
            let mut list = list_of(&["A"]);
            list.open_editor(0).unwrap();
            list.set_draft_text("Changed");
            list.cancel_edit();
            assert!(!list.editor_open());
            assert_eq!(list.items()[0].text, "A");
        }
    }
}
