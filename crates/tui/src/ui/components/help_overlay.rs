use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::centered_box, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help.active {
        return;
    }

    let theme = Theme::default();
    let lines = help_lines(&theme);
    let height = lines.len() as u16 + 2;
    let popup = centered_box(50, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(" Keybinds ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str| Span::styled(format!("{k:<12}"), Style::default().fg(theme.accent));

    vec![
        Line::from(vec![key("Tab / ↓"), Span::raw("next field")]),
        Line::from(vec![key("S-Tab / ↑"), Span::raw("previous field")]),
        Line::from(vec![key("Enter"), Span::raw("next field, or press Calculate")]),
        Line::from(vec![key("F5"), Span::raw("calculate")]),
        Line::from(vec![key("Backspace"), Span::raw("delete last character")]),
        Line::from(vec![key("Esc"), Span::raw("close dialog / help")]),
        Line::from(vec![key("Ctrl+C"), Span::raw("quit")]),
        Line::from(Span::styled(
            "Empty or non-numeric fields count as 0.",
            Style::default().fg(theme.dim),
        )),
    ]
}
