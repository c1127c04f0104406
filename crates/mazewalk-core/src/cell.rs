//! Maze cell classification.

use std::fmt::{self, Display};

/// The classification of a single grid position.
///
/// # Examples
///
/// ```
/// use mazewalk_core::Cell;
///
/// assert_eq!(Cell::from_char('#'), Some(Cell::Wall));
/// assert_eq!(Cell::from_char('.'), Some(Cell::Path));
/// assert_eq!(Cell::from_char(' '), Some(Cell::Path));
/// assert_eq!(Cell::from_char('x'), None);
///
/// assert!(Cell::Start.is_traversable());
/// assert_eq!(Cell::Path.to_char(), ' ');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// An open cell that can be walked through.
    Path,
    /// A blocking cell.
    Wall,
    /// The cell where traversal begins.
    Start,
    /// The goal cell.
    End,
}

impl Cell {
    /// Array containing all cell kinds.
    pub const ALL: [Self; 4] = [Self::Path, Self::Wall, Self::Start, Self::End];

    /// Converts a maze text character into a cell.
    ///
    /// `'#'` is a wall, `' '` and `'.'` are paths, `'S'` is the start and `'E'`
    /// is the end. Any other character yields `None`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            ' ' | '.' => Some(Self::Path),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the canonical maze text character for this cell.
    ///
    /// Paths are always written as `' '`.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Path => ' ',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Returns `true` for every cell that is not a wall.
    #[must_use]
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
    }

    #[test]
    fn test_invalid_chars() {
        for ch in ['x', 's', 'e', '\t', '0', '@'] {
            assert_eq!(Cell::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn test_traversable() {
        assert!(Cell::Path.is_traversable());
        assert!(Cell::Start.is_traversable());
        assert!(Cell::End.is_traversable());
        assert!(!Cell::Wall.is_traversable());
        assert!(Cell::Wall.is_wall());
    }
}
