//! Centered modal dialog for notices and confirmations.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Which buttons a dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Single acknowledgement.
    Notice,
    /// Cancel or destructive confirm.
    Confirm,
}

impl DialogKind {
    fn hint(self) -> &'static str {
        match self {
            Self::Notice => "Enter: OK",
            Self::Confirm => "y: confirm  n/Esc: cancel",
        }
    }

    fn border(self) -> Color {
        match self {
            Self::Notice => Color::Yellow,
            Self::Confirm => Color::Red,
        }
    }
}

/// Returns a `width` x `height` rect centered in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [v_area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [h_area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(v_area);
    h_area
}

/// Renders a dialog over whatever is already in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_dialog(kind: DialogKind, title: &str, message: &str, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(48, 7, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kind.border()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [message_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let body = Paragraph::new(Line::from(message))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, message_area);

    let hint = Paragraph::new(kind.hint())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
    frame.render_widget(hint, hint_area);
}
