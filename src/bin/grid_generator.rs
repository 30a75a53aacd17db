use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsearch_engine::game::{EngineConfig, Session};
use wordsearch_engine::grid::DEFAULT_GRID_SIZE;
use wordsearch_engine::placement::MAX_PLACEMENT_ATTEMPTS;
use wordsearch_engine::solver::answer_key;
use wordsearch_engine::words::{default_word_list, load_word_list};
use wordsearch_engine::WordSearchError;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generate a word search grid", long_about = None)]
struct Args {
    /// Seed for the grid
    #[clap(long)]
    seed: u64,

    /// Width and height of the grid
    #[clap(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Random placement attempts per word
    #[clap(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    attempts: u32,

    /// JSON word list; built-in list if omitted
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Also print where each word is
    #[clap(short, long)]
    key: bool,

    /// Print the session snapshot as JSON instead of text
    #[clap(long)]
    json: bool,
}

fn run(args: Args) -> Result<(), WordSearchError> {
    let words = match &args.words {
        Some(path) => load_word_list(path)?,
        None => default_word_list(),
    };
    let config = EngineConfig {
        grid_size: args.size,
        max_placement_attempts: args.attempts,
        seed: Some(args.seed),
    };
    let mut session = Session::new(config, words)?;
    session.start_game()?;
    info!(seed = args.seed, size = args.size, "Generated grid");

    if args.json {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize snapshot: {}", e),
        }
        return Ok(());
    }

    println!("{}\n", session.grid());
    for entry in session.words() {
        println!("  {:<14} {}", entry.word, entry.hint);
    }

    if args.key {
        println!("\nKey:");
        for entry in answer_key(session.grid(), session.words()) {
            match entry.cells {
                Some(cells) => {
                    let (first, last) = (cells[0], cells[cells.len() - 1]);
                    println!("  {:<14} {} -> {}", entry.word, first, last);
                }
                None => println!("  {:<14} (missing)", entry.word),
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
