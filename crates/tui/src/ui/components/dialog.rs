use expense_engine::Acknowledgement;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::AppState,
    ui::{components::centered_box, theme::Theme},
};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

/// Draws the acknowledgement card on top of the form while it is visible.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let Some(acknowledgement) = state.acknowledgement() else {
        return;
    };

    let theme = Theme::default();
    let card_area = centered_box(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Dismiss hint
        ])
        .split(inner);

    let message_style = match acknowledgement {
        Acknowledgement::Placeholder => Style::default().fg(theme.text),
        Acknowledgement::Leftover(amount) if amount < 0.0 => Style::default().fg(theme.error),
        Acknowledgement::Leftover(_) => Style::default().fg(theme.positive),
    };

    // Vertically center a single line of text inside the message row.
    let message_area = centered_box(rows[0].width, 1, rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(acknowledgement.message(), message_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled("/", Style::default().fg(theme.dim)),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::styled(" close", Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[1]);
}
