use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use super::action::Action;
use super::error::AppError;
use super::screens::{ContactFormState, draw_contact_form};

/// Top-level application state: the contact form and the quit flag.
#[derive(Debug, Default)]
pub struct App {
    contact_form: ContactFormState,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_contact_form(&self.contact_form, frame, frame.area());
    }

    /// Forwards key presses to the form. Releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.contact_form.handle_key(key) == Action::Quit {
            tracing::info!("quit requested");
            self.should_quit = true;
        }
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form state.
    pub fn contact_form(&self) -> &ContactFormState {
        &self.contact_form
    }
}
