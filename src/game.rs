//! Word search session: lifecycle, scoring and input routing.
//!
//! A `Session` owns everything for one play-through:
//! - the word list (with per-word `found` flags),
//! - the placements and the filled `Grid`,
//! - the `SelectionTracker` for the gesture in progress,
//! - the `SessionState` counters (score, words found, elapsed time, status),
//! - the seeded random source used to generate each new grid.
//!
//! All mutation happens synchronously in response to one input event or one
//! timer tick, so there is never more than one gesture being interpreted.
use crate::error::WordSearchError;
use crate::filler::fill_grid;
use crate::grid::{Coord, Grid, DEFAULT_GRID_SIZE};
use crate::matcher::{apply_match, match_path};
use crate::placement::{Placement, PlacementGenerator, MAX_PLACEMENT_ATTEMPTS};
use crate::selection::{CellResolver, PointerEvent, SelectionTracker};
use crate::utils::format_elapsed;
use crate::words::{validate_fit, validate_words, WordEntry};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Points awarded per discovered word.
pub const SCORE_PER_WORD: u32 = 10;

/// Knobs for building a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Width and height of the grid.
    pub grid_size: usize,
    /// Random placement attempts per word before the fallback scan.
    pub max_placement_attempts: u32,
    /// Seed for placements and filler letters. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            grid_size: DEFAULT_GRID_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Not started yet.
    Menu,
    /// Grid generated, player searching.
    Playing,
    /// Every word found.
    Completed,
}

/// Score and progress counters of a session.
///
/// `score` is always `words_found * SCORE_PER_WORD`, `words_found` never
/// decreases, and the status becomes `Completed` exactly when every word has
/// been found. Only `start` resets the counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    score: u32,
    words_found: usize,
    total_words: usize,
    time_elapsed: u64,
    status: GameStatus,
}

impl SessionState {
    /// Counters for a session that has not started.
    pub fn new(total_words: usize) -> Self {
        SessionState {
            score: 0,
            words_found: 0,
            total_words,
            time_elapsed: 0,
            status: GameStatus::Menu,
        }
    }

    /// Resets every counter and enters `Playing`.
    pub fn start(&mut self, total_words: usize) {
        *self = SessionState {
            status: GameStatus::Playing,
            ..SessionState::new(total_words)
        };
    }

    /// Counts one more found word; completes the session on the last one.
    ///
    /// Returns `false`, changing nothing, unless the session is `Playing`.
    pub fn record_find(&mut self) -> bool {
        if self.status != GameStatus::Playing || self.words_found >= self.total_words {
            return false;
        }
        self.words_found += 1;
        self.score = self.words_found as u32 * SCORE_PER_WORD;
        if self.words_found == self.total_words {
            self.status = GameStatus::Completed;
        }
        true
    }

    /// Adds one second of play time. Only counts while `Playing`.
    pub fn tick(&mut self) {
        if self.status == GameStatus::Playing {
            self.time_elapsed += 1;
        }
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of words found so far.
    pub fn words_found(&self) -> usize {
        self.words_found
    }

    /// Number of words in the session.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Seconds spent playing.
    pub fn time_elapsed(&self) -> u64 {
        self.time_elapsed
    }

    /// Lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

/// What an input event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The event had no effect.
    Ignored,
    /// A gesture started or its path changed.
    Updated,
    /// A gesture ended without finding a word.
    Cleared,
    /// A gesture ended on a word.
    Matched {
        /// Index of the found word in the word list.
        word_index: usize,
    },
}

/// Everything a host needs to draw the game, as plain serializable data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The letter grid with found and highlight flags.
    pub grid: Grid,
    /// The word list with found flags.
    pub words: Vec<WordEntry>,
    /// Counters and status.
    pub state: SessionState,
    /// The gesture in progress, empty when idle.
    pub selection: Vec<Coord>,
}

/// One word search play-through.
///
/// # Examples
/// ```
/// use wordsearch_engine::game::{EngineConfig, GameStatus, Session};
/// use wordsearch_engine::words::default_word_list;
///
/// let config = EngineConfig { seed: Some(42), ..EngineConfig::default() };
/// let mut session = Session::new(config, default_word_list()).unwrap();
/// assert_eq!(session.state().status(), GameStatus::Menu);
///
/// session.start_game().unwrap();
/// assert_eq!(session.state().status(), GameStatus::Playing);
/// assert_eq!(session.state().total_words(), default_word_list().len());
///
/// // Drag across the first word's letters.
/// let cells = session.placements()[0].cells();
/// session.press(cells[0]);
/// session.enter(*cells.last().unwrap());
/// session.release();
/// assert_eq!(session.state().words_found(), 1);
/// assert_eq!(session.state().score(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    words: Vec<WordEntry>,
    placements: Vec<Placement>,
    grid: Grid,
    tracker: SelectionTracker,
    state: SessionState,
    rng: SmallRng,
}

impl Session {
    /// Creates a session in `Menu` status with a blank grid.
    ///
    /// # Errors
    /// Returns an error if the word list is empty, holds an invalid word, or
    /// holds a word that cannot fit the configured grid.
    pub fn new(config: EngineConfig, words: Vec<WordEntry>) -> Result<Self, WordSearchError> {
        validate_words(&words)?;
        validate_fit(&words, config.grid_size)?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Session {
            config,
            state: SessionState::new(words.len()),
            words,
            placements: Vec::new(),
            grid: Grid::blank(config.grid_size),
            tracker: SelectionTracker::new(),
            rng,
        })
    }

    /// Creates a session already `Playing` on a caller-supplied layout.
    ///
    /// `placements[i]` must belong to `words[i]`, fit the grid and spell its
    /// word in the grid's letters. Every `found` flag, found cell and highlight
    /// is cleared. Later calls to `start_game` generate fresh layouts.
    ///
    /// # Errors
    /// Everything `new` rejects, plus `InvalidLayout` when the placements do
    /// not line up with the words or the grid.
    pub fn with_layout(
        words: Vec<WordEntry>,
        placements: Vec<Placement>,
        mut grid: Grid,
    ) -> Result<Self, WordSearchError> {
        let config = EngineConfig {
            grid_size: grid.size(),
            seed: Some(0),
            ..EngineConfig::default()
        };
        let mut session = Session::new(config, words)?;
        check_layout(&session.words, &placements, &grid)?;
        for entry in &mut session.words {
            entry.found = false;
        }
        grid.clear_marks();
        session.placements = placements;
        session.grid = grid;
        session.state.start(session.words.len());
        Ok(session)
    }

    /// Generates a new grid and resets the session to `Playing`.
    ///
    /// All found flags, the score, the counters and the timer go back to zero.
    #[instrument(skip(self), fields(size = self.config.grid_size, words = self.words.len()))]
    pub fn start_game(&mut self) -> Result<(), WordSearchError> {
        let placements = PlacementGenerator::new(self.config.grid_size)
            .with_max_attempts(self.config.max_placement_attempts)
            .generate(&self.words, &mut self.rng)?;
        self.grid = fill_grid(self.config.grid_size, &placements, &mut self.rng);
        self.placements = placements;
        for entry in &mut self.words {
            entry.found = false;
        }
        self.tracker = SelectionTracker::new();
        self.state.start(self.words.len());
        info!("Word search started");
        Ok(())
    }

    /// Advances the play timer by one second while `Playing`.
    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Starts a gesture on `cell`.
    pub fn press(&mut self, cell: Coord) -> SelectionOutcome {
        if !self.accepts_input(cell) || !self.tracker.press(cell) {
            return SelectionOutcome::Ignored;
        }
        self.grid.set_highlight(self.tracker.path());
        SelectionOutcome::Updated
    }

    /// Extends the gesture in progress towards `cell`.
    pub fn enter(&mut self, cell: Coord) -> SelectionOutcome {
        if !self.accepts_input(cell) || !self.tracker.enter(cell) {
            return SelectionOutcome::Ignored;
        }
        self.grid.set_highlight(self.tracker.path());
        SelectionOutcome::Updated
    }

    /// Ends the gesture in progress and checks it against the word list.
    pub fn release(&mut self) -> SelectionOutcome {
        let path = self.tracker.release();
        self.finish_gesture(path)
    }

    /// The pointer left the grid; ends the gesture like a release.
    pub fn leave(&mut self) -> SelectionOutcome {
        let path = self.tracker.leave();
        self.finish_gesture(path)
    }

    /// Routes a raw pointer or touch event, resolving screen points with `resolver`.
    ///
    /// Points that resolve to no cell are ignored.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        resolver: &impl CellResolver,
    ) -> SelectionOutcome {
        match event {
            PointerEvent::Down(point) => match resolver.resolve(point) {
                Some(cell) => self.press(cell),
                None => SelectionOutcome::Ignored,
            },
            PointerEvent::Move(point) => match resolver.resolve(point) {
                Some(cell) => self.enter(cell),
                None => SelectionOutcome::Ignored,
            },
            PointerEvent::Up => self.release(),
            PointerEvent::Leave => self.leave(),
        }
    }

    fn accepts_input(&self, cell: Coord) -> bool {
        self.state.status() == GameStatus::Playing && self.grid.contains(cell)
    }

    fn finish_gesture(&mut self, path: Option<Vec<Coord>>) -> SelectionOutcome {
        let Some(path) = path else {
            return SelectionOutcome::Ignored;
        };
        self.grid.clear_highlight();
        if self.state.status() != GameStatus::Playing {
            return SelectionOutcome::Cleared;
        }

        match match_path(&self.grid, &self.words, &path) {
            Some(found) => {
                apply_match(&mut self.grid, &mut self.words, &mut self.state, &found);
                if self.state.status() == GameStatus::Completed {
                    info!(
                        score = self.state.score(),
                        seconds = self.state.time_elapsed(),
                        "Word search completed"
                    );
                }
                SelectionOutcome::Matched {
                    word_index: found.word_index,
                }
            }
            None => {
                debug!(cells = path.len(), "Selection matched no word");
                SelectionOutcome::Cleared
            }
        }
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The word list with found flags.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Where each word was placed; empty before the first `start_game`.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Score and progress counters.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The gesture in progress, empty when idle.
    pub fn selection(&self) -> &[Coord] {
        self.tracker.path()
    }

    /// Play time formatted as `MM:SS`.
    pub fn elapsed_string(&self) -> String {
        format_elapsed(self.state.time_elapsed())
    }

    /// Copies the render-relevant data out of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid.clone(),
            words: self.words.clone(),
            state: self.state,
            selection: self.tracker.path().to_vec(),
        }
    }
}

fn check_layout(
    words: &[WordEntry],
    placements: &[Placement],
    grid: &Grid,
) -> Result<(), WordSearchError> {
    if placements.len() != words.len() {
        return Err(WordSearchError::InvalidLayout {
            reason: format!("{} placements for {} words", placements.len(), words.len()),
        });
    }
    for (placement, entry) in placements.iter().zip(words) {
        if placement.word != entry.word {
            return Err(WordSearchError::InvalidLayout {
                reason: format!("placement {:?} listed for word {:?}", placement.word, entry.word),
            });
        }
        if grid.read(&placement.cells()).as_deref() != Some(entry.word.as_str()) {
            return Err(WordSearchError::InvalidLayout {
                reason: format!(
                    "grid does not spell {:?} at ({}, {})",
                    entry.word, placement.row, placement.col
                ),
            });
        }
    }
    Ok(())
}
