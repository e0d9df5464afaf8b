//! Add screen: build a count in steps of twenty and type a label.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::EntryScreen;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::modal::TuiPrompter;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the label.
const LABEL: usize = 0;

/// State for the Add screen.
#[derive(Debug, Clone)]
pub struct AddState {
    entry: EntryScreen,
    form: Form,
}

impl Default for AddState {
    fn default() -> Self {
        Self::new()
    }
}

impl AddState {
    /// Creates a fresh screen: count 0, empty label.
    pub fn new() -> Self {
        Self {
            entry: EntryScreen::new(),
            form: Form::new(vec![FormField::new("Label")]),
        }
    }

    /// Discards any in-progress entry.
    pub fn reset(&mut self) {
        self.entry = EntryScreen::new();
        self.form.reset();
    }

    /// Returns the view model.
    pub fn entry(&self) -> &EntryScreen {
        &self.entry
    }

    /// Returns the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Proposes `candidate` as the whole new label.
    fn propose_text(&mut self, candidate: &str, prompter: &mut TuiPrompter) {
        if self.entry.set_text(candidate, prompter) {
            self.form.set_value(LABEL, self.entry.text());
        }
    }
}

impl ScreenState for AddState {
    fn handle_key(&mut self, key: KeyEvent, prompter: &mut TuiPrompter) -> Action {
        match key.code {
            KeyCode::Up => {
                self.entry.increment(prompter);
                Action::None
            }
            KeyCode::Down => {
                self.entry.decrement(prompter);
                Action::None
            }
            KeyCode::Backspace => {
                let candidate = self.form.without_last_char();
                self.propose_text(&candidate, prompter);
                Action::None
            }
            KeyCode::Char(ch) => {
                let candidate = self.form.with_char(ch);
                self.propose_text(&candidate, prompter);
                Action::None
            }
            KeyCode::Enter => self
                .entry
                .submit(prompter)
                .map_or(Action::None, Action::Submit),
            KeyCode::Esc => Action::Navigate(Screen::Home),
            _ => Action::None,
        }
    }
}

/// Renders the Add screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_add(state: &AddState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Add ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [count_area, form_area, _, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let count = Paragraph::new(vec![
        Line::from(""),
        Line::from(state.entry().count().to_string()),
    ])
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(count, count_area);

    draw_form(state.form(), frame, form_area);

    let footer = Paragraph::new("type: label  ↑: +20  ↓: -20  Enter: submit  Esc: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
