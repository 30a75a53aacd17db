use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wordsearch_engine::game::{EngineConfig, GameStatus, SelectionOutcome, Session};
use wordsearch_engine::grid::{Coord, DEFAULT_GRID_SIZE};
use wordsearch_engine::placement::MAX_PLACEMENT_ATTEMPTS;
use wordsearch_engine::words::{default_word_list, load_word_list};
use wordsearch_engine::WordSearchError;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play a word search in the terminal", long_about = None)]
struct Args {
    /// Width and height of the grid
    #[clap(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Seed for a reproducible grid
    #[clap(long)]
    seed: Option<u64>,

    /// Random placement attempts per word
    #[clap(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    attempts: u32,

    /// JSON word list (`[{"word": ..., "hint": ...}]`); built-in list if omitted
    #[clap(short, long)]
    words: Option<PathBuf>,
}

enum Command {
    Drag(Coord, Coord),
    NewGame,
    Quit,
}

fn parse_command(input: &str, size: usize) -> Result<Command, String> {
    match input {
        "q" => return Ok(Command::Quit),
        "n" => return Ok(Command::NewGame),
        _ => {}
    }
    let numbers: Vec<usize> = input
        .split_whitespace()
        .map(|part| part.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| {
            "Invalid input: enter four numbers (e.g. '0 0 0 4'), 'n' or 'q'.".to_string()
        })?;
    if numbers.len() != 4 {
        return Err("Invalid input format. Use 'row col row col', 'n' or 'q'.".to_string());
    }
    if numbers.iter().any(|&n| n >= size) {
        return Err(format!(
            "Invalid coordinates: rows and columns must be between 0 and {}.",
            size - 1
        ));
    }
    Ok(Command::Drag(
        Coord::new(numbers[0], numbers[1]),
        Coord::new(numbers[2], numbers[3]),
    ))
}

fn print_session(session: &Session) {
    let state = session.state();
    println!("---------------------");
    println!(
        "Time: {}, Score: {}, Found: {}/{}",
        session.elapsed_string(),
        state.score(),
        state.words_found(),
        state.total_words()
    );
    println!("{}", session.grid().to_ansi_string());
    println!();
    for entry in session.words() {
        let mark = if entry.found { "x" } else { " " };
        let shown = if entry.found {
            entry.word.clone()
        } else {
            "_".repeat(entry.len())
        };
        println!("  [{}] {:<14} {}", mark, shown, entry.hint);
    }
}

// Catches the timer up with wall-clock time, one tick per elapsed second.
fn sync_timer(session: &mut Session, started: Instant) {
    let target = started.elapsed().as_secs();
    while session.state().status() == GameStatus::Playing
        && session.state().time_elapsed() < target
    {
        session.tick();
    }
}

fn run(args: Args) -> Result<(), WordSearchError> {
    let words = match &args.words {
        Some(path) => load_word_list(path)?,
        None => default_word_list(),
    };
    let config = EngineConfig {
        grid_size: args.size,
        max_placement_attempts: args.attempts,
        seed: args.seed,
    };
    let mut session = Session::new(config, words)?;

    println!("Welcome to Word Search!");
    println!("Drag across a word by entering its first and last cell: 'row col row col'.");
    session.start_game()?;
    let mut started = Instant::now();

    loop {
        sync_timer(&mut session, started);
        print_session(&session);

        if session.state().status() == GameStatus::Completed {
            println!();
            println!("---------------------");
            println!("🎉 ALL WORDS FOUND! 🎉");
            println!("Final Score: {}", session.state().score());
            println!("Time: {}", session.elapsed_string());
            println!("---------------------");
            print!("Enter 'n' for a new game or anything else to quit: ");
            io::stdout().flush().ok();
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_ok() && input.trim() == "n" {
                session.start_game()?;
                started = Instant::now();
                continue;
            }
            break;
        }

        print!("Enter a drag (row col row col), 'n' for a new grid, or 'q' to quit: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match parse_command(input.trim(), session.grid().size()) {
            Ok(Command::Quit) => {
                println!("Thanks for playing!");
                break;
            }
            Ok(Command::NewGame) => {
                session.start_game()?;
                started = Instant::now();
                println!("New grid generated.");
            }
            Ok(Command::Drag(from, to)) => {
                session.press(from);
                session.enter(to);
                match session.release() {
                    SelectionOutcome::Matched { word_index } => {
                        println!("Found {}!", session.words()[word_index].word);
                    }
                    _ => println!("No word there. Cells must form a straight line."),
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
