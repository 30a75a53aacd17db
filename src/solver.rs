use crate::grid::{Coord, Grid};
use crate::words::WordEntry;

/// All eight reading directions as `(row step, col step)`.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, -1),
];

/// One line of the answer key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    /// The word searched for.
    pub word: String,
    /// Cells spelling the word from first to last letter, or `None` if the grid lacks it.
    pub cells: Option<Vec<Coord>>,
}

/// Finds `word` anywhere in the grid, reading in any of the eight directions.
///
/// Scans cells row by row and returns the first occurrence, listing cells from
/// the first letter to the last. Returns `None` for an empty word or when the
/// word does not occur.
///
/// # Examples
/// ```
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::solver::find_word;
/// use wordsearch_engine::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["TAB", "XEX", "XXS"]).unwrap();
/// let cells = find_word(&grid, "SET").unwrap();
/// assert_eq!(cells, vec![Coord::new(2, 2), Coord::new(1, 1), Coord::new(0, 0)]);
/// assert!(find_word(&grid, "CAT").is_none());
/// ```
pub fn find_word(grid: &Grid, word: &str) -> Option<Vec<Coord>> {
    let letters: Vec<char> = word.chars().collect();
    let first = *letters.first()?;

    grid.cells()
        .filter(|(_, cell)| cell.letter == first)
        .find_map(|(start, _)| {
            DIRECTIONS
                .iter()
                .find_map(|&(dr, dc)| spell_from(grid, start, dr, dc, &letters))
        })
}

fn spell_from(
    grid: &Grid,
    start: Coord,
    dr: isize,
    dc: isize,
    letters: &[char],
) -> Option<Vec<Coord>> {
    let mut cells = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let step = i as isize;
        let coord = start.offset(dr * step, dc * step)?;
        if grid.letter_at(coord)? != letter {
            return None;
        }
        cells.push(coord);
    }
    Some(cells)
}

/// Locates every word of the list in the grid.
pub fn answer_key(grid: &Grid, words: &[WordEntry]) -> Vec<AnswerKeyEntry> {
    words
        .iter()
        .map(|entry| AnswerKeyEntry {
            word: entry.word.clone(),
            cells: find_word(grid, &entry.word),
        })
        .collect()
}
