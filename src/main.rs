//! # Number Guessing Game
//!
//! Entry point for the terminal guessing game. Pick a difficulty, press
//! START, and find the secret number before your attempts run out.
//! Out-of-range guesses are free; every other guess costs an attempt.
//!
//! ## Usage
//! ```text
//! play [--difficulty <NAME>] [--seed <N>] [--log-file <PATH>]
//! ```
//! Logging is off unless `--log-file` is given; the level comes from
//! `RUST_LOG` and defaults to `info`.

pub mod app;
pub mod tui;

use crate::app::App;
use clap::Parser;
use colored::Colorize;
use guess::{DifficultyTable, RoundEngine, DEFAULT_DIFFICULTY};
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Difficulty selected when the game opens
    #[clap(short, long, default_value = DEFAULT_DIFFICULTY)]
    difficulty: String,

    /// Seed for reproducible secret numbers
    #[clap(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

/// Routes tracing output to `path`, if one was given
fn init_tracing(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let table = DifficultyTable::standard();
    let engine = match args.seed {
        Some(seed) => RoundEngine::seeded(table, seed),
        None => RoundEngine::from_entropy(table),
    };

    let mut app = match App::new(engine, &args.difficulty) {
        Ok(app) => app,
        Err(err) => {
            let standard = DifficultyTable::standard();
            let names: Vec<&str> = standard.names().collect();
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!("valid difficulties: {}", names.join(", "));
            process::exit(2);
        }
    };

    info!(difficulty = %args.difficulty, seeded = args.seed.is_some(), "session started");
    tui::run(&mut app)?;

    let score = app.engine.score();
    info!(score, "session finished");
    println!("Thanks for playing! Rounds won: {}", score);
    Ok(())
}
