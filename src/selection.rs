//! Selection tracker: turns pointer input into a straight run of cells.
//!
//! The tracker is a two-state machine. A press anchors a new gesture; every
//! cell the pointer enters afterwards replaces the path with the straight run
//! from the anchor to that cell, or is ignored when no such run exists. Release
//! (or leaving the grid) ends the gesture and hands the path back to the caller.
//!
//! Raw screen coordinates are turned into cells by a host-supplied
//! [`CellResolver`], so the tracker never depends on a rendering technology.
use crate::grid::Coord;
use crate::line::run_between;
use serde::{Deserialize, Serialize};

/// A point in host screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        ScreenPoint { x, y }
    }
}

/// Pointer or touch input, as delivered by the host UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Mouse button pressed or touch started.
    Down(ScreenPoint),
    /// Pointer or finger moved.
    Move(ScreenPoint),
    /// Mouse button released or touch ended.
    Up,
    /// Pointer left the grid area.
    Leave,
}

/// Maps a screen point to the grid cell under it.
pub trait CellResolver {
    /// Returns the cell at `point`, or `None` if the point is outside the grid.
    fn resolve(&self, point: ScreenPoint) -> Option<Coord>;
}

/// Resolver for a grid drawn as equal square cells from a top-left origin.
///
/// # Examples
/// ```
/// use wordsearch_engine::grid::Coord;
/// use wordsearch_engine::selection::{CellResolver, ScreenPoint, UniformCellResolver};
///
/// let resolver = UniformCellResolver::new(ScreenPoint::new(10.0, 20.0), 32.0, 13);
/// assert_eq!(resolver.resolve(ScreenPoint::new(10.0, 20.0)), Some(Coord::new(0, 0)));
/// assert_eq!(resolver.resolve(ScreenPoint::new(75.0, 60.0)), Some(Coord::new(1, 2)));
/// assert_eq!(resolver.resolve(ScreenPoint::new(5.0, 60.0)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformCellResolver {
    origin: ScreenPoint,
    cell_size: f64,
    grid_size: usize,
}

impl UniformCellResolver {
    /// Creates a resolver for `grid_size` x `grid_size` cells of `cell_size` pixels.
    pub fn new(origin: ScreenPoint, cell_size: f64, grid_size: usize) -> Self {
        UniformCellResolver {
            origin,
            cell_size,
            grid_size,
        }
    }
}

impl CellResolver for UniformCellResolver {
    fn resolve(&self, point: ScreenPoint) -> Option<Coord> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let x = (point.x - self.origin.x) / self.cell_size;
        let y = (point.y - self.origin.y) / self.cell_size;
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (row, col) = (y.floor() as usize, x.floor() as usize);
        (row < self.grid_size && col < self.grid_size).then_some(Coord::new(row, col))
    }
}

/// Tracker state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture anchored at `anchor` is in progress.
    Selecting {
        /// Cell where the gesture started.
        anchor: Coord,
        /// Straight run from `anchor` to the last accepted cell, in drag order.
        path: Vec<Coord>,
    },
}

/// Interprets presses, drags and releases as straight-line selections.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    state: SelectionState,
}

impl SelectionTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        SelectionTracker::default()
    }

    /// Current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting { .. })
    }

    /// The in-progress path; empty when idle.
    pub fn path(&self) -> &[Coord] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Selecting { path, .. } => path,
        }
    }

    /// Starts a gesture at `cell`. Ignored if a gesture is already in progress.
    ///
    /// Returns `true` if a gesture started.
    pub fn press(&mut self, cell: Coord) -> bool {
        if self.is_selecting() {
            return false;
        }
        self.state = SelectionState::Selecting {
            anchor: cell,
            path: vec![cell],
        };
        true
    }

    /// Extends the gesture towards `cell`.
    ///
    /// The path becomes the full straight run from the anchor to `cell`, which
    /// also covers backing up or reversing through the anchor. Cells off every
    /// line through the anchor leave the path unchanged.
    ///
    /// Returns `true` if the path changed.
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::grid::Coord;
    /// use wordsearch_engine::selection::SelectionTracker;
    ///
    /// let mut tracker = SelectionTracker::new();
    /// tracker.press(Coord::new(0, 0));
    /// assert!(tracker.enter(Coord::new(2, 2)));
    /// assert_eq!(tracker.path(), &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]);
    /// assert!(!tracker.enter(Coord::new(2, 3)));
    /// assert_eq!(tracker.path().len(), 3);
    /// ```
    pub fn enter(&mut self, cell: Coord) -> bool {
        let SelectionState::Selecting { anchor, path } = &mut self.state else {
            return false;
        };
        match run_between(*anchor, cell) {
            Some(run) if run != *path => {
                *path = run;
                true
            }
            _ => false,
        }
    }

    /// Ends the gesture, returning the finished path. `None` when idle.
    pub fn release(&mut self) -> Option<Vec<Coord>> {
        match std::mem::take(&mut self.state) {
            SelectionState::Idle => None,
            SelectionState::Selecting { path, .. } => Some(path),
        }
    }

    /// The pointer left the grid; ends the gesture the same way as a release.
    pub fn leave(&mut self) -> Option<Vec<Coord>> {
        self.release()
    }
}
