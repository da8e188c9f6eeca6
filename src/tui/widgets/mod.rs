//! Reusable TUI widgets.

pub mod form;
pub mod submission_panel;

pub use form::{Form, FormField, draw_form};
pub use submission_panel::draw_submission_panel;
