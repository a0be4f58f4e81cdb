//! Spaceman - CLI
//!
//! Terminal word-guessing game: reveal the secret word before seven misses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spaceman::{
    commands::{check_wordlist, run_play},
    console::StdConsole,
    output::check_report,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "spaceman",
    about = "Spaceman word-guessing game for the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret-word selection (deterministic games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Spaceman interactively (default)
    Play,

    /// Check a word-list file and report how many words are usable
    Check {
        /// Path to the word-list file
        path: String,
    },
}

/// Load the word source based on the -w flag
fn load_word_source(wordlist_mode: &str) -> Result<WordSource> {
    match wordlist_mode {
        "embedded" => Ok(WordSource::embedded()),
        path => WordSource::from_file(path)
            .with_context(|| format!("Failed to load word list from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let source = load_word_source(&cli.wordlist)?;
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            run_play(&mut StdConsole, &source, &mut rng)?;
            Ok(())
        }
        Commands::Check { path } => {
            let report = check_wordlist(&path)?;
            println!("{}", check_report(&report));
            Ok(())
        }
    }
}
