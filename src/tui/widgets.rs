//! # UI Widgets Module
//!
//! Draws the game window and the end-of-round dialog.

use crate::app::{App, AppMode, RoundOutcome};
use guess::SecretSource;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const GUESS_LABEL: &str = "Your Guess: ";
const ENTRY_WIDTH: usize = 18;

pub fn render<S: SecretSource>(app: &App<S>, frame: &mut Frame) {
    let area = frame.size();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(3)])
        .split(area);

    draw_game_window(frame, app, main_layout[0]);
    draw_status_bar(frame, app, main_layout[1]);

    if let (AppMode::RoundOver, Some(outcome)) = (app.mode, app.outcome) {
        draw_outcome_dialog(frame, outcome, area);
    }
}

fn draw_game_window<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Number Guessing Game");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // difficulty selector + START
            Constraint::Length(1),
            Constraint::Length(2), // info
            Constraint::Length(1), // attempts
            Constraint::Length(1),
            Constraint::Length(1), // guess entry + GUESS
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(difficulty_line(app)), rows[0]);

    let info = Paragraph::new(app.info.as_str()).wrap(Wrap { trim: true });
    f.render_widget(info, rows[2]);

    f.render_widget(Paragraph::new(app.attempts_label()), rows[3]);

    draw_guess_entry(f, app, rows[5]);
}

fn difficulty_line<S: SecretSource>(app: &App<S>) -> Line<'_> {
    let selecting = app.mode == AppMode::Selecting;
    let mut spans = vec![Span::raw("Difficulty: ")];

    for (i, name) in app.difficulties.iter().enumerate() {
        let style = match (i == app.selected_difficulty, selecting) {
            (true, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, true) => Style::default(),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", name), style));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled("[ START ]", button_style(selecting)));
    Line::from(spans)
}

fn draw_guess_entry<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let guessing = app.mode == AppMode::Guessing;
    let entry_style = if guessing {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::raw(GUESS_LABEL),
        Span::styled(format!("{:<width$}", app.input, width = ENTRY_WIDTH), entry_style),
        Span::raw("  "),
        Span::styled("[ GUESS ]", button_style(guessing)),
    ]);
    f.render_widget(Paragraph::new(line), area);

    if guessing {
        let offset = (GUESS_LABEL.len() + app.input.chars().count()) as u16;
        f.set_cursor(area.x + offset.min(area.width.saturating_sub(1)), area.y);
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_status_bar<S: SecretSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help = match app.mode {
        AppMode::Selecting => "←/→ difficulty, Enter start, q quit",
        AppMode::Guessing => "type a number, Enter guess, Esc quit",
        AppMode::RoundOver => "any key to continue",
    };
    let text = format!("Score: {}  |  {}", app.engine.score(), help);
    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn draw_outcome_dialog(f: &mut Frame, outcome: RoundOutcome, area: Rect) {
    let popup = centered_rect(50, 7, area);
    let color = if outcome.won { Color::Green } else { Color::Red };

    let text = vec![
        Line::from(""),
        Line::from(outcome.message()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(outcome.title()),
        );

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
