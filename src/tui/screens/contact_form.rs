//! Contact form screen: four validated inputs and the last submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Contact, Field, Submission, validate};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::submission_panel::draw_submission_panel;

/// State for the contact form screen.
///
/// Errors are recomputed from the current values on every edit, but only
/// shown for fields the user has touched. A submit attempt touches every
/// field.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    form: Form,
    submission: Option<Submission>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    /// Creates an empty contact form with nothing submitted.
    pub fn new() -> Self {
        Self {
            form: Form::new(
                Field::ALL
                    .into_iter()
                    .map(|f| FormField::new(f.label(), f.is_required()))
                    .collect(),
            ),
            submission: None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self) -> Field {
        Field::from_index(self.form.focus()).unwrap_or(Field::FirstName)
    }

    /// Snapshot of the values currently entered.
    pub fn contact(&self) -> Contact {
        Contact::from_values(self.form.values())
    }

    /// The error messages currently displayed, in field order.
    pub fn errors(&self) -> Vec<&str> {
        self.form.errors()
    }

    /// The last accepted submission, if any.
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Recomputes displayed errors from the current values and touched fields.
    fn refresh_errors(&mut self) {
        self.form.clear_errors();
        for error in validate(&self.contact()) {
            let index = error.field().index();
            if self.form.is_touched(index) {
                self.form.set_error(index, error.to_string());
            }
        }
    }

    /// Validates every field and, if clean, accepts the submission.
    fn submit(&mut self) -> Action {
        self.form.touch_all();
        self.refresh_errors();

        match Submission::accept(self.contact()) {
            Ok(submission) => {
                tracing::info!(
                    has_message = submission.message().is_some(),
                    "contact submitted"
                );
                self.submission = Some(submission);
                self.form.reset();
            }
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "submission rejected");
            }
        }
        Action::None
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// Enter submits from any field, so every value is a single line.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                self.refresh_errors();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                self.refresh_errors();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the contact form screen.
#[mutants::skip]
pub fn draw_contact_form(state: &ContactFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, footer_area, submission_area] = Layout::vertical([
        Constraint::Length(state.form().height()),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    draw_submission_panel(state.submission(), frame, submission_area);
}
