//! Terminal front end for the Colossal Cave adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// How many `-d` flags turn on debug output.
const DEBUG_THRESHOLD: u8 = 3;

#[derive(Parser)]
#[command(
    name = "advent",
    about = "Colossal Cave adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Resume the game saved in the save file
    #[arg(short, long)]
    restore: bool,

    /// Debug output; repeat three times to enable
    #[arg(short, action = clap::ArgAction::Count)]
    debug: u8,

    /// Seed for the game's random events
    #[arg(long)]
    seed: Option<u64>,

    /// Where games are saved (default: ~/.adventure)
    #[arg(long)]
    save_file: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("ADVENT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_save_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".adventure"))
        .unwrap_or_else(|| PathBuf::from(".adventure"))
}

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug >= DEBUG_THRESHOLD;
    init_logging(debug);

    let options = commands::play::PlayOptions {
        restore: cli.restore,
        debug,
        seed: cli.seed,
        save_file: cli.save_file.unwrap_or_else(default_save_file),
    };

    if let Err(e) = commands::play::run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
