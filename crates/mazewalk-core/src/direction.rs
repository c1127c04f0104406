//! Movement directions.

use std::fmt::{self, Display};

use crate::Position;

/// One of the four directions in which a maze can be traversed.
///
/// Each direction carries a unit `(row, col)` delta. Rows grow downwards, so
/// [`Direction::Up`] decreases the row.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Direction, Position};
///
/// assert_eq!(Direction::Up.opposite(), Direction::Down);
///
/// let from = Position::new(3, 3);
/// let to = Position::new(3, 4);
/// assert_eq!(Direction::between(from, to), Some(Direction::Right));
/// assert_eq!(Direction::between(from, Position::new(4, 4)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Array containing all directions in declaration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The order in which the auto-solver and the generator try directions.
    ///
    /// Solver determinism depends on this exact order: down, right, up, left.
    pub const PRIORITY: [Self; 4] = [Self::Down, Self::Right, Self::Up, Self::Left];

    /// Returns the row change of a single step in this direction.
    #[must_use]
    #[inline]
    pub const fn row_delta(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Returns the column change of a single step in this direction.
    #[must_use]
    #[inline]
    pub const fn col_delta(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }

    /// Returns the direction pointing the other way (up/down, left/right).
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` if `other` points the opposite way to `self`.
    #[must_use]
    #[inline]
    pub fn is_opposite_to(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Returns the direction in which `to` lies as seen from `from`.
    ///
    /// Returns `None` unless `to` is exactly one orthogonal step away from
    /// `from`.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::ALL.into_iter().find(|&dir| from.moved_in(dir) == to)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
