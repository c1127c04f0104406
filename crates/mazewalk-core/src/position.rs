//! Grid position representation.

use std::fmt::{self, Display};

use crate::Direction;

/// A zero-based `(row, col)` position in a maze grid.
///
/// Positions are plain values: they are not tied to any particular grid and
/// are only meaningful relative to a grid's bounds.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Position};
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.moved_in(Direction::Down), Position::new(2, 1));
/// assert_eq!(pos.moved_in(Direction::Left), Position::new(1, 0));
/// assert_eq!(pos.to_string(), "(1, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (zero-based, counted from the top).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (zero-based, counted from the left).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position one step away in the given direction.
    ///
    /// Moving up from row 0 or left from column 0 wraps around to a position
    /// far outside any supported grid, so bounds-checked lookups such as
    /// [`CellGrid::get`](crate::CellGrid::get) simply return `None` for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewalk_core::{Direction, Position};
    ///
    /// let origin = Position::new(0, 0);
    /// let outside = origin.moved_in(Direction::Up);
    /// assert_ne!(outside.row(), 0);
    /// assert_eq!(outside.moved_in(Direction::Down), origin);
    /// ```
    #[must_use]
    #[inline]
    pub const fn moved_in(self, dir: Direction) -> Self {
        Self {
            row: self.row.wrapping_add_signed(dir.row_delta()),
            col: self.col.wrapping_add_signed(dir.col_delta()),
        }
    }

    /// Returns the four positions adjacent to this one, in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbors(self) -> [(Direction, Self); 4] {
        Direction::ALL.map(|dir| (dir, self.moved_in(dir)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
