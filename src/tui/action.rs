//! What a key press asks the [`App`](super::App) to do next.

/// Outcome of [`ContactFormState::handle_key`](super::screens::ContactFormState::handle_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running; the form has already updated itself.
    None,
    /// Leave the event loop.
    Quit,
}
