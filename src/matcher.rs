//! Word matcher: decides whether a finished selection spells an unfound word.
use crate::game::SessionState;
use crate::grid::{Coord, Grid};
use crate::line::{straighten, LineOrientation};
use crate::words::WordEntry;
use tracing::debug;

/// A selection that spelled one of the remaining words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMatch {
    /// Index of the matched word in the word list.
    pub word_index: usize,
    /// Orientation of the selection.
    pub orientation: LineOrientation,
    /// Selected cells in line order.
    pub cells: Vec<Coord>,
}

/// Looks for an unfound word spelled by `path`, forwards or backwards.
///
/// Paths shorter than two cells, paths that are not one contiguous straight
/// line and paths that leave the grid never match. If the list holds the same
/// word twice, the first unfound copy wins.
///
/// # Examples
/// ```
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::matcher::match_path;
/// use wordsearch_engine::utils::grid_from_str_array;
/// use wordsearch_engine::words::WordEntry;
///
/// let grid = grid_from_str_array(&["GIZI", "XXXX", "XXXX", "XXXX"]).unwrap();
/// let words = vec![WordEntry::new("GIZI", "").unwrap()];
/// let reversed: Vec<Coord> = (0..4).rev().map(|c| Coord::new(0, c)).collect();
/// assert_eq!(match_path(&grid, &words, &reversed).unwrap().word_index, 0);
/// assert!(match_path(&grid, &words, &[Coord::new(0, 0)]).is_none());
/// ```
pub fn match_path(grid: &Grid, words: &[WordEntry], path: &[Coord]) -> Option<WordMatch> {
    let line = straighten(path)?;
    let forward = grid.read(&line.cells)?;
    let reversed: String = forward.chars().rev().collect();

    let word_index = words
        .iter()
        .position(|entry| !entry.found && (entry.word == forward || entry.word == reversed))?;

    Some(WordMatch {
        word_index,
        orientation: line.orientation,
        cells: line.cells,
    })
}

/// Records a match: flags the word and its cells as found and updates the score.
///
/// Does nothing unless `state` is `Playing`, so the found flags never run
/// ahead of the counters.
pub fn apply_match(
    grid: &mut Grid,
    words: &mut [WordEntry],
    state: &mut SessionState,
    found: &WordMatch,
) {
    let Some(entry) = words.get_mut(found.word_index) else {
        return;
    };
    if entry.found || !state.record_find() {
        return;
    }
    entry.found = true;
    grid.mark_found(&found.cells);
    debug!(
        word = %entry.word,
        orientation = ?found.orientation,
        words_found = state.words_found(),
        "Word found"
    );
}
