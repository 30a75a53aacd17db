//! Placement generator: decides where each word lives in the grid.
//!
//! Every word gets exactly one `Placement`. Candidate slots are drawn at random
//! and accepted only if none of their cells is already used by an earlier
//! word; sharing a cell is rejected even when the letters would agree. When the
//! attempt bound runs out, a deterministic fallback scan looks for any free
//! slot instead of overwriting letters. If even the scan finds nothing, the
//! whole layout is thrown away and drawn again from the same random source.
use crate::error::WordSearchError;
use crate::grid::Coord;
use crate::words::{validate_fit, validate_words, WordEntry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Number of random slots tried per word before falling back.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Number of complete layouts drawn before giving up on a crowded word list.
pub const MAX_LAYOUT_RESTARTS: u32 = 50;

/// The direction a word is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
}

impl Direction {
    /// All directions, in the order the fallback scan tries them.
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// Row and column step for one letter.
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3u8) {
            0 => Direction::Horizontal,
            1 => Direction::Vertical,
            2 => Direction::Diagonal,
            _ => unreachable!("Generated value out of range"),
        }
    }
}

/// Where one word sits in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The word written at this placement.
    pub word: String,
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    /// Direction the word runs in.
    pub direction: Direction,
}

impl Placement {
    /// Creates a placement.
    pub fn new(word: &str, row: usize, col: usize, direction: Direction) -> Self {
        Placement {
            word: word.to_string(),
            row,
            col,
            direction,
        }
    }

    /// Returns the coordinates of every letter, first letter first.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::grid::Coord;
    /// use wordsearch_engine::placement::{Direction, Placement};
    /// let p = Placement::new("GIZI", 1, 0, Direction::Diagonal);
    /// assert_eq!(p.cells()[3], Coord::new(4, 3));
    /// ```
    pub fn cells(&self) -> Vec<Coord> {
        slot_cells(self.row, self.col, self.direction, self.word.chars().count())
    }

    /// Returns `true` if every letter lies inside a `size` x `size` grid.
    pub fn fits(&self, size: usize) -> bool {
        self.cells()
            .iter()
            .all(|c| c.row < size && c.col < size)
    }
}

fn slot_cells(row: usize, col: usize, direction: Direction, len: usize) -> Vec<Coord> {
    let (dr, dc) = direction.step();
    (0..len)
        .map(|i| Coord::new(row + dr * i, col + dc * i))
        .collect()
}

/// Places a word list on a square grid.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use wordsearch_engine::placement::PlacementGenerator;
/// use wordsearch_engine::words::default_word_list;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let placements = PlacementGenerator::new(13)
///     .generate(&default_word_list(), &mut rng)
///     .unwrap();
/// assert_eq!(placements.len(), default_word_list().len());
/// assert!(placements.iter().all(|p| p.fits(13)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementGenerator {
    size: usize,
    max_attempts: u32,
    max_restarts: u32,
}

impl PlacementGenerator {
    /// Creates a generator for a `size` x `size` grid with the default attempt bound.
    pub fn new(size: usize) -> Self {
        PlacementGenerator {
            size,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_restarts: MAX_LAYOUT_RESTARTS,
        }
    }

    /// Overrides the number of random attempts per word. Zero sends every word
    /// straight to the deterministic fallback.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Overrides how many complete layouts are drawn before `NoRoomForWord`
    /// is returned.
    pub fn with_max_restarts(mut self, max_restarts: u32) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Produces one placement per word, in list order.
    ///
    /// A layout that paints itself into a corner is discarded and redrawn, up
    /// to the restart bound. With zero random attempts every layout is the
    /// deterministic fallback one, so no restart is made.
    ///
    /// # Errors
    /// - `EmptyWordList`, `InvalidWord`, `GridTooSmall`, `WordTooLong` when the
    ///   input cannot possibly be placed.
    /// - `NoRoomForWord` when every layout drawn ran out of room for a word
    ///   even after the fallback scan.
    #[instrument(skip(self, words, rng), fields(size = self.size, words = words.len()))]
    pub fn generate<R: Rng>(
        &self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<Vec<Placement>, WordSearchError> {
        validate_words(words)?;
        validate_fit(words, self.size)?;

        let mut restarts = 0;
        loop {
            match self.layout(words, rng) {
                Ok(placements) => return Ok(placements),
                Err(err) if restarts < self.max_restarts && self.max_attempts > 0 => {
                    restarts += 1;
                    debug!(restarts, error = %err, "Layout ran out of room, starting over");
                }
                Err(err) => {
                    warn!(restarts, error = %err, "Giving up on layout");
                    return Err(err);
                }
            }
        }
    }

    /// One pass over the list in order, never revisiting earlier words.
    fn layout<R: Rng>(
        &self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<Vec<Placement>, WordSearchError> {
        let mut used: HashSet<Coord> = HashSet::new();
        let mut placements = Vec::with_capacity(words.len());

        for entry in words {
            let placement = match self.place_randomly(&entry.word, &used, rng) {
                Some(p) => p,
                None => {
                    let fallback = self
                        .place_fallback(&entry.word, placements.len(), &used)
                        .ok_or_else(|| WordSearchError::NoRoomForWord {
                            word: entry.word.clone(),
                        })?;
                    warn!(
                        word = %entry.word,
                        row = fallback.row,
                        col = fallback.col,
                        "Random placement exhausted, used fallback slot"
                    );
                    fallback
                }
            };
            debug!(
                word = %placement.word,
                row = placement.row,
                col = placement.col,
                direction = ?placement.direction,
                "Placed word"
            );
            used.extend(placement.cells());
            placements.push(placement);
        }

        Ok(placements)
    }

    fn place_randomly<R: Rng>(
        &self,
        word: &str,
        used: &HashSet<Coord>,
        rng: &mut R,
    ) -> Option<Placement> {
        let len = word.chars().count();
        let span = self.size + 1 - len;

        for _ in 0..self.max_attempts {
            let direction = Direction::random(rng);
            let (row, col) = match direction {
                Direction::Horizontal => (rng.gen_range(0..self.size), rng.gen_range(0..span)),
                Direction::Vertical => (rng.gen_range(0..span), rng.gen_range(0..self.size)),
                Direction::Diagonal => (rng.gen_range(0..span), rng.gen_range(0..span)),
            };
            if self.is_free(row, col, direction, len, used) {
                return Some(Placement::new(word, row, col, direction));
            }
        }
        None
    }

    /// Horizontal at `(placed_so_far, 0)` first, then every slot in
    /// direction-major, row-major order.
    fn place_fallback(
        &self,
        word: &str,
        placed_so_far: usize,
        used: &HashSet<Coord>,
    ) -> Option<Placement> {
        let len = word.chars().count();
        let preferred = (placed_so_far, 0, Direction::Horizontal);
        let scan = Direction::ALL.into_iter().flat_map(|direction| {
            (0..self.size)
                .flat_map(move |row| (0..self.size).map(move |col| (row, col, direction)))
        });

        std::iter::once(preferred)
            .chain(scan)
            .find(|&(row, col, direction)| self.is_free(row, col, direction, len, used))
            .map(|(row, col, direction)| Placement::new(word, row, col, direction))
    }

    fn is_free(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
        used: &HashSet<Coord>,
    ) -> bool {
        slot_cells(row, col, direction, len)
            .iter()
            .all(|c| c.row < self.size && c.col < self.size && !used.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words.iter().map(|w| WordEntry::new(w, "").unwrap()).collect()
    }

    fn assert_disjoint(placements: &[Placement]) {
        let mut seen = HashSet::new();
        for p in placements {
            for c in p.cells() {
                assert!(seen.insert(c), "Cell {} used by two placements", c);
            }
        }
    }

    #[test]
    fn test_every_word_placed_in_bounds() {
        for seed in 0..300 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let words = crate::words::default_word_list();
            let placements = PlacementGenerator::new(13).generate(&words, &mut rng).unwrap();
            assert_eq!(placements.len(), words.len());
            for (p, w) in placements.iter().zip(&words) {
                assert_eq!(p.word, w.word, "Placements must follow list order");
                assert!(p.fits(13), "Seed {}: {:?} out of bounds", seed, p);
            }
            assert_disjoint(&placements);
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let words = entries(&["SEHAT", "GIZI", "HORMON"]);
        let a = PlacementGenerator::new(8)
            .generate(&words, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        let b = PlacementGenerator::new(8)
            .generate(&words, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fallback_uses_row_of_placed_count() {
        let words = entries(&["SEHAT", "GIZI"]);
        let mut rng = SmallRng::seed_from_u64(1);
        let placements = PlacementGenerator::new(5)
            .with_max_attempts(0)
            .generate(&words, &mut rng)
            .unwrap();
        assert_eq!(placements[0], Placement::new("SEHAT", 0, 0, Direction::Horizontal));
        assert_eq!(placements[1], Placement::new("GIZI", 1, 0, Direction::Horizontal));
    }

    #[test]
    fn test_fallback_scans_past_collision() {
        // The preferred fallback row for the last word lies outside the grid and
        // every horizontal slot is taken, so the scan moves on to a vertical slot
        // without touching earlier words.
        let words = entries(&["ABC", "DE", "FG", "HI"]);
        let mut rng = SmallRng::seed_from_u64(3);
        let placements = PlacementGenerator::new(3)
            .with_max_attempts(0)
            .generate(&words, &mut rng)
            .unwrap();
        assert_eq!(placements[3], Placement::new("HI", 1, 2, Direction::Vertical));
        assert_disjoint(&placements);
        assert!(placements.iter().all(|p| p.fits(3)));
    }

    #[test]
    fn test_fallback_exhaustion_errors() {
        // 3x3 grid has 9 cells; six 2-letter words need 12.
        let words = entries(&["AB", "CD", "EF", "GH", "IJ", "KL"]);
        let mut rng = SmallRng::seed_from_u64(9);
        let placements = PlacementGenerator::new(3)
            .with_max_attempts(0)
            .generate(&words, &mut rng);
        assert!(matches!(
            placements,
            Err(WordSearchError::NoRoomForWord { ref word }) if word == "IJ"
        ));
    }

    #[test]
    fn test_crowded_list_restarts_instead_of_failing() {
        // 34 of 49 cells: a single greedy pass strands a word about a third
        // of the time.
        let words = entries(&["GIZI", "OTAK", "SUSU", "MATA", "KAKI", "LARI", "BUAH", "SEHAT"]);
        let single_pass_failures = (0..50)
            .filter(|&seed| {
                PlacementGenerator::new(7)
                    .with_max_restarts(0)
                    .generate(&words, &mut SmallRng::seed_from_u64(seed))
                    .is_err()
            })
            .count();
        assert!(single_pass_failures > 0);

        for seed in 0..50 {
            let placements = PlacementGenerator::new(7)
                .generate(&words, &mut SmallRng::seed_from_u64(seed))
                .unwrap_or_else(|e| panic!("Seed {}: {}", seed, e));
            assert_eq!(placements.len(), words.len());
            assert_disjoint(&placements);
        }
    }

    #[test]
    fn test_overfull_grid_errors_after_restarts() {
        // 11 letters never fit in 9 cells, however often the layout is redrawn.
        let words = entries(&["ABC", "DEF", "GHI", "JK"]);
        let result = PlacementGenerator::new(3).generate(&words, &mut SmallRng::seed_from_u64(5));
        assert!(matches!(result, Err(WordSearchError::NoRoomForWord { .. })));
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            PlacementGenerator::new(5).generate(&[], &mut rng),
            Err(WordSearchError::EmptyWordList)
        ));
        assert!(matches!(
            PlacementGenerator::new(3).generate(&entries(&["SEHAT"]), &mut rng),
            Err(WordSearchError::WordTooLong { .. })
        ));
        assert!(matches!(
            PlacementGenerator::new(0).generate(&entries(&["A"]), &mut rng),
            Err(WordSearchError::GridTooSmall { .. })
        ));
    }

    #[test]
    fn test_word_as_long_as_grid() {
        let mut rng = SmallRng::seed_from_u64(11);
        let placements = PlacementGenerator::new(5)
            .generate(&entries(&["SEHAT"]), &mut rng)
            .unwrap();
        let p = &placements[0];
        assert!(p.fits(5));
        match p.direction {
            Direction::Horizontal => assert_eq!(p.col, 0),
            Direction::Vertical => assert_eq!(p.row, 0),
            Direction::Diagonal => assert_eq!((p.row, p.col), (0, 0)),
        }
    }
}
