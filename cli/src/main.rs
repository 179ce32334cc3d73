use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hangman_core::WordList;

use crate::config::Settings;
use crate::presenter::{OutputMode, Presenter};

mod config;
mod presenter;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Guess the word letter by letter", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Incorrect guesses allowed per game
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    lives: Option<u8>,

    /// Word list to draw from, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// TOML file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print game state as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(Settings {
        lives: args.lives,
        words: args.words.clone(),
    });
    let game_config = settings.game_config()?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, ?settings, "starting session");

    let source = match &settings.words {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read word list {}", path.display()))?;
            let list = WordList::parse(seed, &text);
            ensure!(!list.is_empty(), "No usable words in {}", path.display());
            list
        }
        None => WordList::builtin(seed),
    };

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Presenter::new(source, game_config, stdin, stdout, mode).run()?;

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn zero_lives_flag_is_rejected() {
        assert!(Args::try_parse_from(["hangman", "--lives", "0"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "hangman", "-s", "42", "-l", "3", "--json", "-w", "w.txt",
        ])
        .unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.lives, Some(3));
        assert_eq!(args.words, Some(PathBuf::from("w.txt")));
        assert!(args.json);
    }
}
