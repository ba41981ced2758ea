use expense_engine::{EXPENSE_COUNT, ExpenseCategory, Field, FormState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{card::Card, centered_box},
        theme::Theme,
    },
};

const LABEL_WIDTH: usize = 12;
const FORM_WIDTH: u16 = 48;
// One row per category plus borders.
const EXPENSES_HEIGHT: u16 = EXPENSE_COUNT as u16 + 2;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let column = centered_box(FORM_WIDTH, area.height, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Spacer
            Constraint::Length(3),               // Balance card
            Constraint::Length(1),               // Spacer
            Constraint::Length(EXPENSES_HEIGHT), // Expenses card
            Constraint::Length(1),               // Spacer
            Constraint::Length(3),               // Calculate button
            Constraint::Min(0),
        ])
        .split(column);

    render_balance(frame, rows[1], state, &theme);
    render_expenses(frame, rows[3], state, &theme);
    render_calculate(frame, rows[5], state.focus == Focus::Calculate, &theme);
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Field(Field::Balance);
    let card = Card::new("Total Balance", theme).focused(focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let line = field_line(&state.form, Field::Balance, focused, theme);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_expenses(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = matches!(state.focus, Focus::Field(Field::Expense(_)));
    let card = Card::new("Expenses", theme).focused(focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let lines: Vec<Line<'static>> = ExpenseCategory::ALL
        .into_iter()
        .map(|category| {
            let field = Field::from(category);
            field_line(&state.form, field, state.focus == Focus::Field(field), theme)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// One input row: icon, label, current text and a cursor when focused.
fn field_line(form: &FormState, field: Field, focused: bool, theme: &Theme) -> Line<'static> {
    let cursor = if focused { "│" } else { "" };
    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };

    Line::from(vec![
        Span::styled(format!("{} ", field.icon()), Style::default().fg(theme.accent)),
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
        Span::styled(format!("{}{cursor}", form.field(field)), value_style),
    ])
}

fn render_calculate(frame: &mut Frame<'_>, area: Rect, focused: bool, theme: &Theme) {
    let (border, label) = if focused {
        (
            Style::default().fg(theme.border_focused),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (
            Style::default().fg(theme.border),
            Style::default().fg(theme.accent),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let button = Paragraph::new(Span::styled(" = Calculate ", label))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
