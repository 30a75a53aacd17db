//! Letter grid for the word search.
//!
//! This module defines the grid's fundamental components:
//! - `Coord`: A `(row, col)` position on the grid.
//! - `Cell`: One letter of the grid together with its found/highlight flags and
//!   the index of the placement that wrote it, if any.
//! - `Grid`: The square matrix of cells, with helpers used by the filler, the
//!   selection tracker and the matcher.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width and height of a session grid.
pub const DEFAULT_GRID_SIZE: usize = 13;

/// A zero-based `(row, col)` position on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns the coordinate shifted by `(dr, dc)`, or `None` if it would go negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One letter of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The letter shown in this cell. A space until the grid is filled.
    pub letter: char,
    /// Set once the cell belongs to a discovered word. Never cleared within a session.
    pub is_found: bool,
    /// Index of the placement whose letter lives here; `None` for filler letters.
    pub word_id: Option<usize>,
    /// Whether the cell is part of the gesture currently being dragged.
    pub highlighted: bool,
}

impl Cell {
    /// A cell with no letter yet.
    pub const fn blank() -> Self {
        Cell {
            letter: ' ',
            is_found: false,
            word_id: None,
            highlighted: false,
        }
    }

    /// Returns `true` if no letter has been written to this cell yet.
    pub fn is_blank(&self) -> bool {
        self.letter == ' '
    }

    /// ANSI background code for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        if self.highlighted {
            "43"
        } else if self.is_found {
            "42"
        } else {
            "40"
        }
    }
}

/// The square letter matrix of a word search session.
///
/// Cells are stored row-major. The grid is fully built before play starts and
/// afterwards only changes through the `is_found` and `highlighted` flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `size` x `size` grid of blank cells.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::grid::{Coord, Grid};
    /// let grid = Grid::blank(5);
    /// assert_eq!(grid.size(), 5);
    /// assert!(grid.get(Coord::new(4, 4)).unwrap().is_blank());
    /// assert!(grid.get(Coord::new(5, 0)).is_none());
    /// ```
    pub fn blank(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::blank(); size * size],
        }
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.size + coord.col)
    }

    /// Returns the cell at `coord`, or `None` if it is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// Returns the letter at `coord`, or `None` if it is out of bounds.
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.get(coord).map(|cell| cell.letter)
    }

    /// Writes `letter` into the cell at `coord`, tagging it with `word_id`.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_letter(&mut self, coord: Coord, letter: char, word_id: Option<usize>) {
        if let Some(cell) = self.get_mut(coord) {
            cell.letter = letter;
            cell.word_id = word_id;
        }
    }

    /// Iterates over every cell together with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / size, i % size), cell))
    }

    /// Returns the letters of row `row` as a string.
    pub fn row_string(&self, row: usize) -> String {
        (0..self.size)
            .filter_map(|col| self.letter_at(Coord::new(row, col)))
            .collect()
    }

    /// Concatenates the letters along `path`, or returns `None` if any step is out of bounds.
    pub fn read(&self, path: &[Coord]) -> Option<String> {
        path.iter().map(|&c| self.letter_at(c)).collect()
    }

    /// Sets `is_found` on every cell of `path`. Cells already found stay found.
    pub fn mark_found(&mut self, path: &[Coord]) {
        for &coord in path {
            if let Some(cell) = self.get_mut(coord) {
                cell.is_found = true;
            }
        }
    }

    /// Replaces the highlighted cells with exactly the cells of `path`.
    pub fn set_highlight(&mut self, path: &[Coord]) {
        self.clear_highlight();
        for &coord in path {
            if let Some(cell) = self.get_mut(coord) {
                cell.highlighted = true;
            }
        }
    }

    /// Un-highlights every cell.
    pub fn clear_highlight(&mut self) {
        for cell in &mut self.cells {
            cell.highlighted = false;
        }
    }

    /// Clears the `is_found` and `highlighted` flags of every cell. Letters stay.
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            cell.is_found = false;
            cell.highlighted = false;
        }
    }

    /// Returns the coordinates of all highlighted cells in row-major order.
    pub fn highlighted(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.highlighted)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Generates a terminal rendering of the grid with row and column numbers.
    ///
    /// Highlighted cells get a yellow background and found cells a green one.
    pub fn to_ansi_string(&self) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for c_idx in 0..self.size {
            output.push_str(&format!("{:<3}", c_idx));
        }
        output.push('\n');

        for (r_idx, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            output.push_str(&format!("{:<3}", r_idx));
            for cell in row {
                output.push_str(&format!(
                    "\x1b[1;{};m {} \x1b[m",
                    cell.to_ansi_color_code(),
                    cell.letter
                ));
            }
            if r_idx + 1 < self.size {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Grid {
    /// Formats the grid as plain rows of letters separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            let row: Vec<String> = self
                .row_string(r)
                .chars()
                .map(|ch| ch.to_string())
                .collect();
            write!(f, "{}", row.join(" "))?;
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_str_array;

    #[test]
    fn test_blank_grid() {
        let grid = Grid::blank(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().count(), 16);
        assert!(grid.cells().all(|(_, cell)| cell.is_blank() && !cell.is_found));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let grid = Grid::blank(3);
        assert!(grid.get(Coord::new(3, 0)).is_none());
        assert!(grid.get(Coord::new(0, 3)).is_none());
        assert_eq!(grid.letter_at(Coord::new(2, 2)), Some(' '));
    }

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(1, 1);
        assert_eq!(c.offset(-1, 1), Some(Coord::new(0, 2)));
        assert_eq!(c.offset(-2, 0), None);
        assert_eq!(Coord::from((3, 4)), Coord::new(3, 4));
    }

    #[test]
    fn test_read_path() {
        let grid = grid_from_str_array(&["ABC", "DEF", "GHI"]).unwrap();
        let diagonal = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];
        assert_eq!(grid.read(&diagonal), Some("AEI".to_string()));
        assert_eq!(grid.read(&[Coord::new(0, 0), Coord::new(9, 9)]), None);
    }

    #[test]
    fn test_mark_found_is_sticky() {
        let mut grid = grid_from_str_array(&["AB", "CD"]).unwrap();
        grid.mark_found(&[Coord::new(0, 0), Coord::new(0, 1)]);
        grid.mark_found(&[Coord::new(0, 1), Coord::new(1, 1)]);
        let found: Vec<Coord> = grid
            .cells()
            .filter(|(_, c)| c.is_found)
            .map(|(coord, _)| coord)
            .collect();
        assert_eq!(
            found,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_highlight_replaces_previous() {
        let mut grid = Grid::blank(3);
        grid.set_highlight(&[Coord::new(0, 0), Coord::new(0, 1)]);
        grid.set_highlight(&[Coord::new(2, 2)]);
        assert_eq!(grid.highlighted(), vec![Coord::new(2, 2)]);
        grid.clear_highlight();
        assert!(grid.highlighted().is_empty());
    }

    #[test]
    fn test_clear_marks_keeps_letters() {
        let mut grid = grid_from_str_array(&["AB", "CD"]).unwrap();
        grid.mark_found(&[Coord::new(0, 0), Coord::new(0, 1)]);
        grid.set_highlight(&[Coord::new(1, 0)]);
        grid.clear_marks();
        assert!(grid.cells().all(|(_, c)| !c.is_found && !c.highlighted));
        assert_eq!(grid.row_string(0), "AB");
    }

    #[test]
    fn test_display_grid() {
        let grid = grid_from_str_array(&["AB", "CD"]).unwrap();
        assert_eq!(format!("{}", grid), "A B\nC D");
    }

    #[test]
    fn test_ansi_rendering_has_header_and_rows() {
        let grid = grid_from_str_array(&["AB", "CD"]).unwrap();
        let rendered = grid.to_ansi_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with("   0  1  "));
    }
}
