//! Home screen: the entry list, with delete, clear-all and an inline editor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};
use tracing::debug;

use crate::model::{ListScreen, Submission};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::modal::{ConfirmRequest, TuiPrompter};
use crate::tui::widgets::dialog::centered_rect;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Editor field index for the label.
const TEXT: usize = 0;
/// Editor field index for the count.
const COUNT: usize = 1;

/// State for the Home screen.
#[derive(Debug, Clone)]
pub struct HomeState {
    list: ListScreen,
    /// Index of the highlighted row (0-based).
    selected: usize,
    /// Mirror of the list's edit drafts, for rendering.
    editor: Form,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Creates an empty list with the cursor on the first row.
    pub fn new() -> Self {
        Self {
            list: ListScreen::new(),
            selected: 0,
            editor: Form::new(vec![FormField::new("Text"), FormField::new("Count")]),
        }
    }

    /// Returns the view model.
    pub fn list(&self) -> &ListScreen {
        &self.list
    }

    /// Returns the highlighted row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the editor form for rendering.
    pub fn editor(&self) -> &Form {
        &self.editor
    }

    /// Appends an entry handed back from the Add screen.
    pub fn receive(&mut self, submission: Submission) {
        self.list.receive(submission);
    }

    /// Runs a confirmed or cancelled destructive request.
    ///
    /// `prompter` carries the user's answer.
    pub fn resolve(&mut self, request: ConfirmRequest, prompter: &mut TuiPrompter) {
        match request {
            ConfirmRequest::Delete(index) => {
                if let Err(e) = self.list.delete(index, prompter) {
                    debug!(error = %e, "delete skipped");
                }
            }
            ConfirmRequest::ClearAll => {
                self.list.clear_all(prompter);
            }
        }
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        let len = self.list.len();
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = len.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('a') => Action::Navigate(Screen::Add),
            KeyCode::Char('d') if len > 0 => Action::Confirm(ConfirmRequest::Delete(self.selected)),
            KeyCode::Char('c') => Action::Confirm(ConfirmRequest::ClearAll),
            KeyCode::Char('e') | KeyCode::Enter => {
                self.open_editor();
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, prompter: &mut TuiPrompter) -> Action {
        match key.code {
            KeyCode::Tab => self.editor.focus_next(),
            KeyCode::BackTab => self.editor.focus_prev(),
            KeyCode::Char(ch) => {
                let candidate = self.editor.with_char(ch);
                self.propose_draft(&candidate);
            }
            KeyCode::Backspace => {
                let candidate = self.editor.without_last_char();
                self.propose_draft(&candidate);
            }
            KeyCode::Enter => {
                if let Err(e) = self.list.commit_edit(prompter) {
                    debug!(error = %e, "commit skipped");
                }
            }
            KeyCode::Esc => self.list.cancel_edit(),
            _ => {}
        }
        Action::None
    }

    fn open_editor(&mut self) {
        if self.list.open_editor(self.selected).is_ok() {
            self.editor.set_focus(TEXT);
            self.sync_editor();
        }
    }

    /// Sends a candidate value for the focused field to the view model.
    fn propose_draft(&mut self, candidate: &str) {
        match self.editor.focus() {
            TEXT => self.list.set_draft_text(candidate),
            _ => self.list.set_draft_count(candidate),
        }
        self.sync_editor();
    }

    fn sync_editor(&mut self) {
        self.editor.set_value(TEXT, self.list.draft_text());
        self.editor.set_value(COUNT, self.list.draft_count());
    }
}

impl ScreenState for HomeState {
    fn handle_key(&mut self, key: KeyEvent, prompter: &mut TuiPrompter) -> Action {
        if self.list.editor_open() {
            self.handle_editor_key(key, prompter)
        } else {
            self.handle_list_key(key)
        }
    }
}

/// Renders the Home screen.
#[mutants::skip]
pub fn draw_home(state: &HomeState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [count_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let items = state.list().items();

    let count = Paragraph::new(vec![
        Line::from(items.len().to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from("Count"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Green));
    frame.render_widget(count, count_area);

    if items.is_empty() {
        let empty = Paragraph::new("No entries yet. Press 'a' to add one.")
            .alignment(Alignment::Center);
        frame.render_widget(empty, table_area);
    } else {
        let header = Row::new(vec!["#", "Label", "Count"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = items
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == state.selected() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    (i + 1).to_string(),
                    entry.text.clone(),
                    entry.count.to_string(),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(6),
        ];
        frame.render_widget(Table::new(rows, widths).header(header), table_area);
    }

    let footer = Paragraph::new("a: add  e: edit  d: delete  c: clear all  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if state.list().editor_open() {
        draw_editor(state, frame, area);
    }
}

/// Renders the edit popup over the list.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_editor(state: &HomeState, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 10, area);
    frame.render_widget(Clear, popup);

    let title = match state.list().edit_index() {
        Some(i) => format!(" Edit #{} ", i + 1),
        None => " Edit ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [form_area, hint_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Length(1)]).areas(inner);
    draw_form(state.editor(), frame, form_area);

    let hint = Paragraph::new("Tab: field  Enter: save  Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}
