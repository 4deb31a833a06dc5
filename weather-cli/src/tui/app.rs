//! Interactive view state and key handling.
//!
//! Key handling is synchronous and never touches the network: it returns an
//! [`Effect`] that the run loop turns into a spawned lookup.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use weather_core::{LookupTicket, ProviderError, QueryController, ThemeMode, WeatherResult};

/// Side effects requested by key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchWeather(LookupTicket),
}

#[derive(Debug)]
pub struct App {
    pub controller: QueryController,
    pub theme: ThemeMode,
    /// Animation frame counter for the spinner.
    pub tick: u32,
    should_quit: bool,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self { controller: QueryController::new(), theme, tick: 0, should_quit: false }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The search trigger is disabled while a lookup is loading.
    pub fn can_submit(&self) -> bool {
        !self.controller.is_loading()
    }

    pub fn submit(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }
        self.controller.begin_submit().map(Effect::FetchWeather)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('u') if ctrl => self.controller.set_query(""),
            KeyCode::Enter => return self.submit(),
            KeyCode::Backspace => {
                let mut query = self.controller.query().to_string();
                query.pop();
                self.controller.set_query(query);
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let mut query = self.controller.query().to_string();
                query.push(c);
                self.controller.set_query(query);
            }
            _ => {}
        }
        None
    }

    pub fn on_lookup_done(
        &mut self,
        ticket_id: u64,
        outcome: Result<WeatherResult, ProviderError>,
    ) -> bool {
        self.controller.complete(ticket_id, outcome)
    }

    /// Returns whether a redraw is needed.
    pub fn on_tick(&mut self) -> bool {
        self.tick = self.tick.wrapping_add(1);
        self.controller.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{LookupError, RequestState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    fn weather(name: &str) -> WeatherResult {
        WeatherResult {
            location_name: name.into(),
            country: "FR".into(),
            temperature_c: 11.0,
            feels_like_c: 10.0,
            condition: "Clouds".into(),
            description: "overcast clouds".into(),
            wind_speed_mps: 3.0,
            humidity_pct: 80.0,
            pressure_hpa: 1008.0,
            visibility_m: 9000.0,
            observed_at: None,
        }
    }

    #[test]
    fn typing_edits_query_verbatim() {
        let mut app = App::new(ThemeMode::Dark);
        type_text(&mut app, " Par");
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "ris");
        assert_eq!(app.controller.query(), " Paris");

        app.handle_key(ctrl('u'));
        assert_eq!(app.controller.query(), "");
    }

    #[test]
    fn enter_on_blank_query_fails_without_effect() {
        let mut app = App::new(ThemeMode::Dark);
        type_text(&mut app, "   ");

        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(app.controller.state(), &RequestState::Failed(LookupError::EmptyQuery));
    }

    #[test]
    fn enter_requests_lookup_with_trimmed_city() {
        let mut app = App::new(ThemeMode::Dark);
        type_text(&mut app, " Paris ");

        let effect = app.handle_key(key(KeyCode::Enter));
        let Some(Effect::FetchWeather(ticket)) = effect else {
            panic!("expected a fetch effect, got {effect:?}");
        };
        assert_eq!(ticket.city, "Paris");
        assert!(app.controller.is_loading());
        assert!(!app.can_submit());
    }

    #[test]
    fn enter_is_ignored_while_loading() {
        let mut app = App::new(ThemeMode::Dark);
        type_text(&mut app, "Paris");
        let Some(Effect::FetchWeather(ticket)) = app.handle_key(key(KeyCode::Enter)) else {
            panic!("expected a fetch effect");
        };

        type_text(&mut app, "x");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);

        assert!(app.on_lookup_done(ticket.id, Ok(weather("Paris"))));
        assert!(app.can_submit());
        assert_eq!(
            app.controller.displayed_result().map(|r| r.location_name.as_str()),
            Some("Paris")
        );
    }

    #[test]
    fn ctrl_t_toggles_theme_both_ways() {
        let mut app = App::new(ThemeMode::Dark);
        app.handle_key(ctrl('t'));
        assert_eq!(app.theme, ThemeMode::Light);
        app.handle_key(ctrl('t'));
        assert_eq!(app.theme, ThemeMode::Dark);
        assert_eq!(app.controller.query(), "", "shortcut must not type into the query");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = App::new(ThemeMode::Dark);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());

        let mut app = App::new(ThemeMode::Dark);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn tick_redraws_only_while_loading() {
        let mut app = App::new(ThemeMode::Dark);
        assert!(!app.on_tick());

        type_text(&mut app, "Oslo");
        app.submit();
        assert!(app.on_tick());
        assert_eq!(app.tick, 2);
    }
}
