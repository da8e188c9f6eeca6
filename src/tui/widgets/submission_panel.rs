//! Submission panel: read-only view of the last accepted contact.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Field, Submission};

/// Builds the panel body for `submission`.
///
/// The message line is omitted entirely when no message was submitted.
fn submission_lines(submission: &Submission) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let contact = submission.contact();

    let row = |field: Field, value: &str| {
        Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::raw(value.to_string()),
        ])
    };

    let mut lines = vec![
        row(Field::FirstName, &contact.first_name),
        row(Field::LastName, &contact.last_name),
        row(Field::Email, &contact.email),
    ];
    if let Some(message) = submission.message() {
        lines.push(row(Field::Message, message));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Submitted at {}",
            submission.submitted_at().format("%H:%M:%S UTC")
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Renders the last accepted submission inside a bordered panel.
///
/// Renders nothing if no contact has been submitted yet.
#[mutants::skip]
pub fn draw_submission_panel(submission: Option<&Submission>, frame: &mut Frame, area: Rect) {
    let Some(submission) = submission else {
        return;
    };

    let block = Block::default()
        .title(" You Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(submission_lines(submission))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::Contact;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_panel(submission: Option<&Submission>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_submission_panel(submission, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn submission(message: &str) -> Submission {
        let contact = Contact {
            first_name: "michael".into(),
            last_name: "newell".into(),
            email: "newell@newell.com".into(),
            message: message.into(),
        };
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 15).unwrap();
        Submission::accept_at(contact, at).unwrap()
    }

    #[test]
    fn renders_nothing_without_submission() {
        let output = render_panel(None, 50, 8);
        assert!(output.trim().is_empty(), "panel should be blank");
    }

    #[test]
    fn renders_required_values() {
        let s = submission("");
        let output = render_panel(Some(&s), 50, 8);
        assert!(output.contains("You Submitted"));
        assert!(output.contains("First Name: michael"));
        assert!(output.contains("Last Name: newell"));
        assert!(output.contains("Email: newell@newell.com"));
    }

    #[test]
    fn omits_empty_message() {
        let s = submission("");
        let output = render_panel(Some(&s), 50, 8);
        assert!(!output.contains("Message"), "message line should be absent");
    }

    #[test]
    fn renders_message_verbatim() {
        let s = submission("extatum et oratum");
        let output = render_panel(Some(&s), 50, 8);
        assert!(output.contains("Message: extatum et oratum"));
    }

    #[test]
    fn renders_submission_time() {
        let s = submission("");
        let output = render_panel(Some(&s), 50, 8);
        assert!(output.contains("Submitted at 09:30:15 UTC"));
    }

    #[test]
    fn line_count_depends_on_message() {
        assert_eq!(submission_lines(&submission("")).len(), 4);
        assert_eq!(submission_lines(&submission("hi")).len(), 5);
    }
}
