use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for whatever currently owns the keyboard.
pub fn context_hints(state: &AppState) -> Vec<KeyHint> {
    if state.form.is_acknowledgement_visible() {
        return common::dismiss();
    }
    if state.help.active {
        return vec![KeyHint::new("Esc", "close help")];
    }
    match state.focus {
        Focus::Field(_) => common::form_editing(),
        Focus::Calculate => vec![
            KeyHint::new("Enter", "calculate"),
            KeyHint::new("Tab", "next"),
        ],
    }
}

pub mod common {
    use super::KeyHint;

    pub fn form_editing() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "next"),
            KeyHint::new("F5", "calculate"),
        ]
    }

    pub fn dismiss() -> Vec<KeyHint> {
        vec![KeyHint::new("Enter", "close"), KeyHint::new("Esc", "close")]
    }

    /// Global application shortcuts.
    pub fn global_shortcuts() -> Vec<KeyHint> {
        vec![KeyHint::new("F1", "help"), KeyHint::new("Ctrl+C", "quit")]
    }
}

#[cfg(test)]
mod tests {
    use expense_engine::AcknowledgementMode;

    use super::*;

    fn keys(hints: &[KeyHint]) -> Vec<&str> {
        hints.iter().map(|hint| hint.key.as_str()).collect()
    }

    #[test]
    fn spans_alternate_key_and_action() {
        let theme = Theme::default();
        let spans = hints_to_spans(&[KeyHint::new("a", "one"), KeyHint::new("b", "two")], &theme);
        let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "a one  b two");
    }

    #[test]
    fn overlay_hints_take_priority() {
        let mut state = AppState::new(AcknowledgementMode::Placeholder);
        assert_eq!(keys(&context_hints(&state)), ["Tab", "Enter", "F5"]);

        state.focus = Focus::Calculate;
        assert_eq!(keys(&context_hints(&state)), ["Enter", "Tab"]);

        state.form.show_acknowledgement();
        assert_eq!(keys(&context_hints(&state)), ["Enter", "Esc"]);
    }
}
