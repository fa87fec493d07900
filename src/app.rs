//! Application state and core logic

use crate::clock::ClockUpdater;
use crate::config::TuiConfig;
use crate::page::{ElementId, Page};
use crate::render;
use crate::state::AppState;
use crate::validate::{self, FormOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Clock display updater
    pub clock: ClockUpdater,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance. Builds the page, honors the clock
    /// configuration, and performs the clock's initial write.
    pub fn new(config: &TuiConfig) -> Self {
        let mut page = Page::standard();
        if !config.clock_enabled() {
            page.remove(ElementId::UserTime);
        }

        let mut state = AppState::new(page);
        let clock = ClockUpdater::start(&mut state.page, config.clock_interval());

        Self {
            state,
            clock,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance the clock display if its interval has elapsed
    pub fn tick_clock(&mut self) {
        self.clock.tick(&mut self.state.page);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Send shortcut works from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.submit();
            }
            KeyCode::Enter if self.state.form.on_send_button() => {
                self.submit();
            }
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char('\n');
                }
            }
            // Enter in a single-line field advances to the next stop
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run one submit attempt: read the values fresh, check every field,
    /// refresh every error display and the success region, and reset the
    /// form when everything is valid.
    pub fn submit(&mut self) -> FormOutcome {
        let report = validate::check_form(&self.state.form.values());
        render::render_report(&mut self.state.page, &report);

        let outcome = report.outcome();
        if outcome == FormOutcome::Success {
            self.state.form.reset();
        }
        tracing::debug!(?outcome, "submit attempt");
        outcome
    }
}
