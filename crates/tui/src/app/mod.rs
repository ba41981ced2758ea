use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use expense_engine::{Acknowledgement, AcknowledgementMode, Field, FormState, acknowledgement};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// What currently receives key input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Calculate,
}

impl Focus {
    /// Tab order: every field, then the button, then back to the balance.
    pub fn next(self) -> Self {
        match self {
            Self::Field(field) => field.next().map_or(Self::Calculate, Self::Field),
            Self::Calculate => Self::Field(Field::first()),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Field(field) => field.prev().map_or(Self::Calculate, Self::Field),
            Self::Calculate => Self::Field(Field::last()),
        }
    }
}

#[derive(Debug, Default)]
pub struct HelpState {
    pub active: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    pub help: HelpState,
    pub acknowledgement_mode: AcknowledgementMode,
}

impl AppState {
    pub fn new(acknowledgement_mode: AcknowledgementMode) -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::Field(Field::first()),
            help: HelpState::default(),
            acknowledgement_mode,
        }
    }

    /// Overlay content, `None` while it is hidden.
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        self.form
            .is_acknowledgement_visible()
            .then(|| acknowledgement(&self.form, self.acknowledgement_mode))
    }
}

pub struct App {
    config: AppConfig,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(config.acknowledgement);
        Self {
            config,
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);

        if action == AppAction::Quit {
            tracing::debug!("quit requested");
            self.should_quit = true;
            return;
        }

        // Both overlays are modal.
        if self.state.form.is_acknowledgement_visible() {
            if matches!(action, AppAction::Cancel | AppAction::Submit) {
                self.dismiss();
            }
            return;
        }
        if self.state.help.active {
            if matches!(action, AppAction::Cancel | AppAction::ToggleHelp) {
                self.state.help.active = false;
            }
            return;
        }

        match action {
            AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::PrevField => self.state.focus = self.state.focus.prev(),
            AppAction::Submit => match self.state.focus {
                Focus::Field(_) => self.state.focus = self.state.focus.next(),
                Focus::Calculate => self.calculate(),
            },
            AppAction::Calculate => self.calculate(),
            AppAction::ToggleHelp => self.state.help.active = true,
            AppAction::Backspace => self.edit_focused(|text| {
                text.pop();
            }),
            AppAction::Input(' ') if self.state.focus == Focus::Calculate => self.calculate(),
            AppAction::Input(ch) => self.edit_focused(|text| text.push(ch)),
            AppAction::Cancel | AppAction::Quit | AppAction::None => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Focus::Field(field) = self.state.focus else {
            return;
        };
        let mut text = self.state.form.field(field).to_owned();
        edit(&mut text);
        self.state.form.set_field(field, text);
        tracing::debug!(
            %field,
            revision = self.state.form.revision(),
            "field changed"
        );
    }

    fn calculate(&mut self) {
        self.state.form.show_acknowledgement();
        tracing::info!(leftover = self.state.form.leftover(), "calculated");
    }

    fn dismiss(&mut self) {
        self.state.form.hide_acknowledgement();
        tracing::info!("acknowledgement dismissed");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use expense_engine::ExpenseCategory;

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn starts_on_balance_with_overlay_hidden() {
        let app = app();
        assert_eq!(app.state.focus, Focus::Field(Field::Balance));
        assert!(app.state.acknowledgement().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn focus_cycles_through_fields_and_button() {
        let mut app = app();
        for field in Field::ALL.iter().skip(1) {
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::Field(*field));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.focus, Focus::Calculate);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.focus, Focus::Field(Field::Balance));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.focus, Focus::Calculate);
    }

    #[test]
    fn typing_goes_to_focused_field_only() {
        let mut app = app();
        type_str(&mut app, "500");
        assert_eq!(app.state.form.field(Field::Balance), "500");
        for category in ExpenseCategory::ALL {
            assert_eq!(app.state.form.expense(category), "");
        }

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.form.field(Field::Balance), "50");
    }

    #[test]
    fn any_character_reaches_the_store() {
        let mut app = app();
        type_str(&mut app, "abc");
        assert_eq!(app.state.form.field(Field::Balance), "abc");
        assert_eq!(app.state.form.leftover(), 0.0);
    }

    #[test]
    fn full_session() {
        let mut app = app();
        for value in ["2000", "300", "150", "40", "60", "200", "80"] {
            type_str(&mut app, value);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.state.focus, Focus::Calculate);
        assert_eq!(app.state.form.leftover(), 1170.0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.acknowledgement(), Some(Acknowledgement::Placeholder));

        // Modal: typing does not edit the form.
        type_str(&mut app, "9");
        assert_eq!(app.state.form.field(Field::Balance), "2000");

        press(&mut app, KeyCode::Esc);
        assert!(app.state.acknowledgement().is_none());
        assert_eq!(app.state.form.leftover(), 1170.0);
        assert_eq!(app.state.form.expense(ExpenseCategory::Internet), "80");
    }

    #[test]
    fn f5_calculates_from_any_field() {
        let mut app = App::new(AppConfig {
            acknowledgement: AcknowledgementMode::Leftover,
            ..AppConfig::default()
        });
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "25");
        press(&mut app, KeyCode::F(5));

        assert_eq!(app.state.acknowledgement(), Some(Acknowledgement::Leftover(75.0)));
        press(&mut app, KeyCode::Enter);
        assert!(app.state.acknowledgement().is_none());
        assert_eq!(app.state.focus, Focus::Field(ExpenseCategory::Grocery.into()));
    }

    #[test]
    fn space_on_button_calculates() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state.focus, Focus::Calculate);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.state.form.is_acknowledgement_visible());
    }

    #[test]
    fn help_overlay_is_modal() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.state.help.active);
        type_str(&mut app, "12");
        assert_eq!(app.state.form.field(Field::Balance), "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.help.active);
    }

    #[test]
    fn ctrl_c_quits_even_with_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::F(5));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
