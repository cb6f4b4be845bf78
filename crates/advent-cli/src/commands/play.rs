//! The interactive game loop.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use advent_engine::{GameConfig, GameSession, SessionStatus, TurnReport};

/// Settings gathered from the command line.
pub struct PlayOptions {
    pub restore: bool,
    pub debug: bool,
    pub seed: Option<u64>,
    pub save_file: PathBuf,
}

pub fn run(options: &PlayOptions) -> Result<(), String> {
    let config = match options.seed {
        Some(seed) => GameConfig::new().with_seed(seed),
        None => GameConfig::new(),
    };

    let mut session = if options.restore {
        match restore(&options.save_file, config.clone()) {
            Ok(session) => session,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("could not restore {}: {e}", options.save_file.display()).yellow()
                );
                new_game(config)?
            }
        }
    } else {
        new_game(config)?
    };

    for line in session.opening_messages() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let report = session.process_turn(input).map_err(|e| e.to_string())?;
        print_report(&report, options.debug)?;

        match report.status {
            SessionStatus::Playing => {}
            SessionStatus::Suspended => {
                save(&session, &options.save_file)?;
                println!(
                    "Game saved to {} -- see you later!",
                    options.save_file.display()
                );
                return Ok(());
            }
            SessionStatus::Finished => return Ok(()),
        }
    }

    println!();
    Ok(())
}

fn new_game(config: GameConfig) -> Result<GameSession, String> {
    GameSession::new(config).map_err(|e| format!("failed to start game: {e}"))
}

fn restore(path: &Path, config: GameConfig) -> Result<GameSession, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    GameSession::restore(config, &bytes).map_err(|e| e.to_string())
}

fn save(session: &GameSession, path: &Path) -> Result<(), String> {
    let bytes = session.snapshot().map_err(|e| e.to_string())?;
    fs::write(path, bytes).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

fn print_report(report: &TurnReport, debug: bool) -> Result<(), String> {
    if let Some(command) = report.command.as_ref().filter(|_| debug) {
        let json = serde_json::to_string(command).map_err(|e| e.to_string())?;
        println!("{}", json.dimmed());
    }
    for message in &report.messages {
        if report.accepted {
            println!("{message}");
        } else {
            println!("{}", message.yellow());
        }
    }
    Ok(())
}
