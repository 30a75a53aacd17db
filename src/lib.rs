//! # Word Search Engine Library
//!
//! This library provides the core logic of a word search puzzle: it places a
//! word list on a square grid, fills the remaining cells with random letters,
//! turns pointer drags into straight-line selections and checks those
//! selections against the words still to be found.
//!
//! It is used by two binaries:
//! - `word_search_player`: Allows interactive play in the terminal.
//! - `grid_generator`: Prints a generated puzzle for a seed, optionally with
//!   its answer key or as JSON.
//!
//! ## Modules
//! - `grid`: Grid representation (`Grid`, `Cell`, `Coord`).
//! - `words`: Word entries, the built-in word list and JSON word list loading.
//! - `placement`: The placement generator (`PlacementGenerator`, `Placement`, `Direction`).
//! - `filler`: Builds the final letter grid from placements.
//! - `line`: Straight-line classification shared by selection and matching.
//! - `selection`: The selection tracker and the pointer-to-cell resolver seam.
//! - `matcher`: Resolves finished selections into found words.
//! - `game`: The `Session` tying everything together, with scoring and timing.
//! - `solver`: Locates words in a grid to build answer keys.
//! - `utils`: Parsing grids from strings and time formatting.
//! - `error`: The crate error type.

pub mod error;
pub mod filler;
pub mod game;
pub mod grid;
pub mod line;
pub mod matcher;
pub mod placement;
pub mod selection;
pub mod solver;
pub mod utils;
pub mod words;

pub use error::WordSearchError;
