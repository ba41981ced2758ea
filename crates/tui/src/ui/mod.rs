pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_title(frame, layout[0], &theme);
    screens::form::render(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);

    components::dialog::render(frame, area, state);
    components::help_overlay::render(frame, area, state);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let line = Line::from(vec![Span::styled(
        " Expense Calculator",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![Span::raw(" ")];
    parts.extend(components::hints::hints_to_spans(
        &components::hints::context_hints(state),
        theme,
    ));
    parts.push(components::hints::hint_separator(theme));
    parts.extend(components::hints::hints_to_spans(
        &components::hints::common::global_shortcuts(),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use expense_engine::{AcknowledgementMode, ExpenseCategory, Field};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn form_shows_every_label() {
        let screen = draw(&AppState::new(AcknowledgementMode::Placeholder));
        assert!(screen.contains("Total Balance"));
        assert!(screen.contains("Expenses"));
        for field in Field::ALL {
            assert!(screen.contains(field.label()), "missing {field}");
        }
        assert!(screen.contains("Calculate"));
    }

    #[test]
    fn entered_values_are_drawn() {
        let mut state = AppState::new(AcknowledgementMode::Placeholder);
        state.form.set_field(ExpenseCategory::Electricity.into(), "151.75");
        let screen = draw(&state);
        assert!(screen.contains("151.75"));
    }

    #[test]
    fn overlay_hidden_by_default() {
        let screen = draw(&AppState::new(AcknowledgementMode::Placeholder));
        assert!(!screen.contains("This is a minimal dialog"));
    }

    #[test]
    fn overlay_shows_placeholder() {
        let mut state = AppState::new(AcknowledgementMode::Placeholder);
        state.form.set_field(Field::Balance, "2000");
        state.form.show_acknowledgement();
        let screen = draw(&state);
        assert!(screen.contains("This is a minimal dialog"));
        assert!(!screen.contains("Left over"));
    }

    #[test]
    fn overlay_shows_leftover_when_configured() {
        let mut state = AppState::new(AcknowledgementMode::Leftover);
        state.form.set_field(Field::Balance, "2000");
        state.form.set_field(ExpenseCategory::Fuel.into(), "830");
        state.form.show_acknowledgement();
        let screen = draw(&state);
        assert!(screen.contains("Left over: 1170"));
    }

    #[test]
    fn help_overlay_lists_calculate_key() {
        let mut state = AppState::new(AcknowledgementMode::Placeholder);
        state.help.active = true;
        let screen = draw(&state);
        assert!(screen.contains("Keybinds"));
        assert!(screen.contains("F5"));
    }
}
