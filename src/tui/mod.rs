//! # Terminal User Interface Module
//!
//! Full-screen terminal front end for the guessing game, built with Ratatui
//! on the Crossterm backend. It plays the part of the game window: a
//! difficulty selector with a START button, the info and attempts lines, a
//! guess entry with a GUESS button, and a dialog at the end of each round.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode and alternate screen setup and cleanup
//! - **Event Loop**: polls for key presses and redraws at 10 FPS
//! - **Input Processing**: [`input`] maps keys to app handlers
//! - **Widget Rendering**: [`widgets`] draws the window and dialog

use crate::app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use guess::SecretSource;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};

pub mod input;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the app asks to quit,
/// and restores the terminal whether or not the loop failed.
///
/// # Errors
/// Returns an error if terminal setup, drawing, event handling, or cleanup fails
pub fn run<S: SecretSource>(app: &mut App<S>) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let res = run_app(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    res
}

fn run_app<B: Backend, S: SecretSource>(terminal: &mut Terminal<B>, app: &mut App<S>) -> io::Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key_event(app, key);
                }
            }
        }
    }
}

/// Initializes the terminal for raw mode operation
///
/// Enables raw mode and switches to the alternate screen.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
