use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::modal::{Overlay, TuiPrompter};
use super::screens::{AddState, HomeState, draw_add, draw_home};
use super::widgets::{DialogKind, StatusBarContext, draw_dialog, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The entry list.
    Home,
    /// Build and submit a new entry.
    Add,
}

impl Screen {
    /// Human-readable label for the status bar.
    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Add => "Add",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    home: HomeState,
    add: AddState,
    overlay: Option<Overlay>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Home`] screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            home: HomeState::new(),
            add: AddState::new(),
            overlay: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        info!("app started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!(entries = self.home.list().len(), "app exiting");
        Ok(())
    }

    /// Renders the status bar, the current screen, then any overlay.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [status_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let ctx = StatusBarContext {
            screen: self.screen.label(),
            entry_count: self.home.list().len(),
        };
        draw_status_bar(&ctx, frame, status_area);

        match self.screen {
            Screen::Home => draw_home(&self.home, frame, body_area),
            Screen::Add => draw_add(&self.add, frame, body_area),
        }

        match &self.overlay {
            Some(Overlay::Notice(notice)) => draw_dialog(
                DialogKind::Notice,
                &notice.title,
                &notice.message,
                frame,
                area,
            ),
            Some(Overlay::Confirm(request)) => {
                let prompt = request.prompt();
                draw_dialog(
                    DialogKind::Confirm,
                    prompt.title,
                    prompt.message,
                    frame,
                    area,
                );
            }
            None => {}
        }
    }

    /// Handles a key event: an open overlay captures it, otherwise the
    /// current screen does.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(overlay) = self.overlay.take() {
            self.handle_overlay_key(overlay, key);
            return;
        }

        let mut prompter = TuiPrompter::new();
        let screen: &mut dyn ScreenState = match self.screen {
            Screen::Home => &mut self.home,
            Screen::Add => &mut self.add,
        };
        let action = screen.handle_key(key, &mut prompter);
        if let Some(notice) = prompter.take_notice() {
            self.overlay = Some(Overlay::Notice(notice));
        }
        self.apply(action);
    }

    /// Overlay keys: notices are acknowledged, confirmations answered.
    /// Any other key leaves the overlay up.
    fn handle_overlay_key(&mut self, overlay: Overlay, key: KeyEvent) {
        match overlay {
            Overlay::Notice(_) => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
                ) {
                    debug!("notice acknowledged");
                } else {
                    self.overlay = Some(overlay);
                }
            }
            Overlay::Confirm(request) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.home.resolve(request, &mut TuiPrompter::answering(true));
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.home.resolve(request, &mut TuiPrompter::answering(false));
                }
                _ => self.overlay = Some(overlay),
            },
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Confirm(request) => self.overlay = Some(Overlay::Confirm(request)),
            Action::Submit(submission) => {
                self.home.receive(submission);
                self.navigate(Screen::Home);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        if screen == Screen::Add {
            self.add.reset();
        }
        debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the overlay currently shown, if any.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Returns the Home screen state.
    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Returns the Add screen state.
    pub fn add(&self) -> &AddState {
        &self.add
    }
}
