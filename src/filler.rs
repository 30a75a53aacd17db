//! Grid filler: turns placements into the final letter grid.
use crate::grid::{Coord, Grid};
use crate::placement::Placement;
use rand::Rng;
use tracing::{debug, instrument};

// Uniformly random uppercase letter for cells no placement covers.
fn generate_random_letter(rng: &mut impl Rng) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

/// Builds a `size` x `size` grid from `placements`.
///
/// Each placement's letters are written along its cells and tagged with the
/// placement's index; every remaining cell receives a random letter `A`-`Z`.
/// Letters falling outside the grid are dropped, which cannot happen for
/// placements produced by `PlacementGenerator` for the same size.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use wordsearch_engine::filler::fill_grid;
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::placement::{Direction, Placement};
///
/// let placements = vec![Placement::new("SEHAT", 0, 0, Direction::Horizontal)];
/// let grid = fill_grid(5, &placements, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(grid.row_string(0), "SEHAT");
/// assert_eq!(grid.get(Coord::new(0, 2)).unwrap().word_id, Some(0));
/// assert!(grid.cells().all(|(_, c)| c.letter.is_ascii_uppercase()));
/// ```
#[instrument(skip(placements, rng), fields(placements = placements.len()))]
pub fn fill_grid<R: Rng>(size: usize, placements: &[Placement], rng: &mut R) -> Grid {
    let mut grid = Grid::blank(size);

    for (word_id, placement) in placements.iter().enumerate() {
        for (coord, letter) in placement.cells().into_iter().zip(placement.word.chars()) {
            grid.set_letter(coord, letter, Some(word_id));
        }
    }

    let mut filler_count = 0usize;
    for row in 0..size {
        for col in 0..size {
            let coord = Coord::new(row, col);
            if grid.get(coord).is_some_and(|cell| cell.is_blank()) {
                grid.set_letter(coord, generate_random_letter(rng), None);
                filler_count += 1;
            }
        }
    }
    debug!(filler_count, "Filled grid");

    grid
}
