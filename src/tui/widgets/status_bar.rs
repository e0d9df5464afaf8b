//! Status bar widget: one-line screen and list context.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Human-readable name of the active screen.
    pub screen: &'static str,
    /// Number of entries in the list.
    pub entry_count: usize,
}

/// Renders a one-line status bar.
///
/// Display format: `tally › Home  3 entries` (`1 entry` when singular).
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let noun = if ctx.entry_count == 1 {
        "entry"
    } else {
        "entries"
    };

    let spans = vec![
        Span::styled("tally", cyan),
        Span::styled(" \u{203a} ", Style::default().fg(Color::DarkGray)),
        Span::styled(ctx.screen, cyan),
        Span::raw("  "),
        Span::styled(
            format!("{} {noun}", ctx.entry_count),
            Style::default().fg(Color::Green),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
