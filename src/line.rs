//! Straight-line geometry shared by the selection tracker and the word matcher.
//!
//! A selection is valid only when all of its cells lie on one row, one column
//! or one 45° diagonal. Both the tracker (while the player drags) and the
//! matcher (when the gesture ends) classify lines through these functions so
//! the two can never disagree.
use crate::grid::Coord;
use serde::{Deserialize, Serialize};

/// Orientation of a straight run of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOrientation {
    /// Same row.
    Horizontal,
    /// Same column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Classifies the line through `anchor` and `target`.
///
/// Identical cells count as a (degenerate) horizontal line. Returns `None`
/// when the two cells are not on a common row, column or diagonal.
///
/// # Examples
/// ```
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::line::{classify, LineOrientation};
///
/// let anchor = Coord::new(2, 2);
/// assert_eq!(classify(anchor, Coord::new(2, 7)), Some(LineOrientation::Horizontal));
/// assert_eq!(classify(anchor, Coord::new(0, 2)), Some(LineOrientation::Vertical));
/// assert_eq!(classify(anchor, Coord::new(4, 4)), Some(LineOrientation::Diagonal));
/// assert_eq!(classify(anchor, Coord::new(0, 4)), Some(LineOrientation::AntiDiagonal));
/// assert_eq!(classify(anchor, Coord::new(3, 5)), None);
/// ```
pub fn classify(anchor: Coord, target: Coord) -> Option<LineOrientation> {
    let (dr, dc) = deltas(anchor, target);
    if dr == 0 {
        Some(LineOrientation::Horizontal)
    } else if dc == 0 {
        Some(LineOrientation::Vertical)
    } else if dr.abs() == dc.abs() {
        if dr.signum() == dc.signum() {
            Some(LineOrientation::Diagonal)
        } else {
            Some(LineOrientation::AntiDiagonal)
        }
    } else {
        None
    }
}

/// Returns every cell from `anchor` to `target` inclusive, in that order.
///
/// Works in either direction along the line. Returns `None` if the two cells
/// are not on a straight line.
///
/// # Examples
/// ```
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::line::run_between;
///
/// let run = run_between(Coord::new(0, 3), Coord::new(0, 1)).unwrap();
/// assert_eq!(run, vec![Coord::new(0, 3), Coord::new(0, 2), Coord::new(0, 1)]);
/// assert!(run_between(Coord::new(0, 0), Coord::new(1, 2)).is_none());
/// ```
pub fn run_between(anchor: Coord, target: Coord) -> Option<Vec<Coord>> {
    classify(anchor, target)?;
    let (dr, dc) = deltas(anchor, target);
    let steps = dr.abs().max(dc.abs());
    let (step_r, step_c) = (dr.signum(), dc.signum());
    (0..=steps)
        .map(|i| anchor.offset(step_r * i, step_c * i))
        .collect()
}

/// A validated straight selection, with its cells in line order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Orientation of the line.
    pub orientation: LineOrientation,
    /// Cells sorted top-to-bottom, then left-to-right.
    pub cells: Vec<Coord>,
}

/// Validates a whole path and sorts it into line order.
///
/// The path may arrive in any order (a reversed drag, for instance). It is
/// accepted only if it has at least two cells, no repeats and no gaps, and all
/// cells sit on one straight line.
pub fn straighten(path: &[Coord]) -> Option<Line> {
    if path.len() < 2 {
        return None;
    }
    let mut cells = path.to_vec();
    cells.sort_unstable();

    let first = *cells.first()?;
    let last = *cells.last()?;
    let orientation = classify(first, last)?;
    let run = run_between(first, last)?;
    (run == cells).then_some(Line { orientation, cells })
}

fn deltas(anchor: Coord, target: Coord) -> (isize, isize) {
    (
        target.row as isize - anchor.row as isize,
        target.col as isize - anchor.col as isize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(usize, usize)]) -> Vec<Coord> {
        points.iter().map(|&p| Coord::from(p)).collect()
    }

    #[test]
    fn test_classify_same_cell_is_horizontal() {
        let c = Coord::new(3, 3);
        assert_eq!(classify(c, c), Some(LineOrientation::Horizontal));
        assert_eq!(run_between(c, c), Some(vec![c]));
    }

    #[test]
    fn test_run_between_diagonals_both_ways() {
        assert_eq!(
            run_between(Coord::new(2, 2), Coord::new(0, 0)),
            Some(coords(&[(2, 2), (1, 1), (0, 0)]))
        );
        assert_eq!(
            run_between(Coord::new(0, 2), Coord::new(2, 0)),
            Some(coords(&[(0, 2), (1, 1), (2, 0)]))
        );
    }

    #[test]
    fn test_run_between_vertical_up() {
        assert_eq!(
            run_between(Coord::new(3, 1), Coord::new(1, 1)),
            Some(coords(&[(3, 1), (2, 1), (1, 1)]))
        );
    }

    #[test]
    fn test_straighten_sorts_reversed_path() {
        let line = straighten(&coords(&[(0, 4), (0, 3), (0, 2)])).unwrap();
        assert_eq!(line.orientation, LineOrientation::Horizontal);
        assert_eq!(line.cells, coords(&[(0, 2), (0, 3), (0, 4)]));
    }

    #[test]
    fn test_straighten_anti_diagonal() {
        let line = straighten(&coords(&[(2, 0), (1, 1), (0, 2)])).unwrap();
        assert_eq!(line.orientation, LineOrientation::AntiDiagonal);
        assert_eq!(line.cells, coords(&[(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn test_straighten_rejects_short_bent_gapped_and_repeated() {
        assert!(straighten(&coords(&[(0, 0)])).is_none());
        assert!(straighten(&coords(&[(0, 0), (0, 1), (1, 1)])).is_none());
        assert!(straighten(&coords(&[(0, 0), (0, 2)])).is_none());
        assert!(straighten(&coords(&[(0, 0), (0, 1), (0, 1)])).is_none());
    }
}
