//! # Input Handling Module
//!
//! Translates key presses into app actions, routed by the current mode.

use crate::app::{App, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guess::SecretSource;

/// Handles a key press based on the current application mode
///
/// `Ctrl+C` quits from any mode.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `key` - The key event that was received
pub fn handle_key_event<S: SecretSource>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        AppMode::Selecting => handle_selecting_input(key.code, app),
        AppMode::Guessing => handle_guessing_input(key.code, app),
        AppMode::RoundOver => app.dismiss_outcome(),
    }
}

/// Difficulty selector: arrows cycle, Enter or S presses START
fn handle_selecting_input<S: SecretSource>(key_code: KeyCode, app: &mut App<S>) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Left => app.select_prev_difficulty(),
        KeyCode::Down | KeyCode::Right | KeyCode::Tab => app.select_next_difficulty(),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => app.start_round(),
        _ => {}
    }
}

/// Guess entry: typed characters edit the buffer, Enter presses GUESS
fn handle_guessing_input<S: SecretSource>(key_code: KeyCode, app: &mut App<S>) {
    match key_code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit_guess(),
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Char(c) => app.push_input(c),
        _ => {}
    }
}
