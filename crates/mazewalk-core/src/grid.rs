//! Validated maze grids.
//!
//! A [`CellGrid`] can only be obtained through validating constructors, so any
//! grid in hand satisfies the maze invariants:
//!
//! - height and width are odd and within [`MIN_DIMENSION`]..=[`MAX_DIMENSION`]
//! - every border cell is a [`Cell::Wall`]
//! - exactly one [`Cell::Start`] and exactly one [`Cell::End`] exist
//!
//! Code that consumes a grid (the traversal engine, renderers) therefore never
//! re-validates it.

use std::ops::Index;

use crate::{Cell, Position};

/// The smallest supported grid height or width.
pub const MIN_DIMENSION: usize = 5;

/// The largest supported grid height or width.
pub const MAX_DIMENSION: usize = 999;

/// A grid dimension that violates the size rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DimensionError {
    /// The dimension is below [`MIN_DIMENSION`] or above [`MAX_DIMENSION`].
    #[display(
        "dimension {value} must be between {} and {} (inclusive)",
        MIN_DIMENSION,
        MAX_DIMENSION
    )]
    OutOfRange {
        /// The rejected dimension.
        value: i64,
    },
    /// The dimension is even.
    #[display("dimension {value} must be odd")]
    Even {
        /// The rejected dimension.
        value: i64,
    },
}

/// Checks a grid height or width and returns it as a `usize`.
///
/// The range is checked before the parity.
///
/// # Errors
///
/// Returns [`DimensionError::OutOfRange`] if `value` is outside
/// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`], or [`DimensionError::Even`] if it is even.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{DimensionError, validate_dimension};
///
/// assert_eq!(validate_dimension(7), Ok(7));
/// assert_eq!(validate_dimension(8), Err(DimensionError::Even { value: 8 }));
/// assert_eq!(validate_dimension(3), Err(DimensionError::OutOfRange { value: 3 }));
/// ```
pub fn validate_dimension(value: i64) -> Result<usize, DimensionError> {
    let dimension = usize::try_from(value)
        .ok()
        .filter(|v| (MIN_DIMENSION..=MAX_DIMENSION).contains(v))
        .ok_or(DimensionError::OutOfRange { value })?;
    if dimension % 2 != 1 {
        return Err(DimensionError::Even { value });
    }
    Ok(dimension)
}

/// A structural violation of the grid invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The height or the width is not a valid dimension.
    #[display("invalid grid dimension: {_0}")]
    InvalidDimension(DimensionError),
    /// A row has a different length from the first row.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// A cell on the outer border is not a wall.
    #[display("border cell at {pos} must be a wall")]
    NonWallBorder {
        /// Position of the offending cell.
        pos: Position,
    },
    /// A second start cell was found.
    #[display("multiple start cells found (second at {pos})")]
    DuplicateStart {
        /// Position of the second start cell.
        pos: Position,
    },
    /// A second end cell was found.
    #[display("multiple end cells found (second at {pos})")]
    DuplicateEnd {
        /// Position of the second end cell.
        pos: Position,
    },
    /// No start cell was found.
    #[display("missing start cell")]
    MissingStart,
    /// No end cell was found.
    #[display("missing end cell")]
    MissingEnd,
}

/// A rectangular maze grid satisfying all grid invariants.
///
/// Cells are stored in row-major order. The start and end positions are located
/// once during construction.
///
/// # Examples
///
/// ```
/// use mazewalk_core::{Cell, CellGrid, Position};
///
/// let w = Cell::Wall;
/// let p = Cell::Path;
/// let rows = [
///     [w, w, w, w, w],
///     [w, Cell::Start, p, p, w],
///     [w, w, w, p, w],
///     [w, Cell::End, p, p, w],
///     [w, w, w, w, w],
/// ];
/// let grid = CellGrid::from_rows(rows)?;
///
/// assert_eq!((grid.height(), grid.width()), (5, 5));
/// assert_eq!(grid.start(), Position::new(1, 1));
/// assert_eq!(grid.end(), Position::new(3, 1));
/// assert_eq!(grid.get(Position::new(9, 9)), None);
/// # Ok::<(), mazewalk_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl CellGrid {
    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] describing the first invariant violation found,
    /// scanning rows top to bottom and cells left to right.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut builder = GridBuilder::new(dimension_from_len(height)?, dimension_from_len(width)?);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                builder.push(Position::new(r, c), cell)?;
            }
        }
        builder.finish()
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the position of the start cell.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the position of the end cell.
    #[must_use]
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns `true` if `pos` lies on the outermost ring of the grid.
    #[must_use]
    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row() == 0
                || pos.col() == 0
                || pos.row() == self.height - 1
                || pos.col() == self.width - 1)
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.row() * self.width + pos.col()])
    }

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }
}

impl Index<Position> for CellGrid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {}x{} grid",
            self.height,
            self.width
        );
        &self.cells[pos.row() * self.width + pos.col()]
    }
}

fn dimension_from_len(len: usize) -> Result<usize, GridError> {
    validate_dimension(i64::try_from(len).unwrap_or(i64::MAX)).map_err(GridError::InvalidDimension)
}

/// Incremental grid validation shared by [`CellGrid::from_rows`] and the text parser.
///
/// Cells must be pushed in row-major order.
#[derive(Debug)]
pub(crate) struct GridBuilder {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: Option<Position>,
    end: Option<Position>,
}

impl GridBuilder {
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: Vec::with_capacity(height * width),
            start: None,
            end: None,
        }
    }

    pub(crate) fn push(&mut self, pos: Position, cell: Cell) -> Result<(), GridError> {
        debug_assert_eq!(pos.row() * self.width + pos.col(), self.cells.len());
        let at_border = pos.row() == 0
            || pos.col() == 0
            || pos.row() == self.height - 1
            || pos.col() == self.width - 1;
        if at_border && !cell.is_wall() {
            return Err(GridError::NonWallBorder { pos });
        }
        match cell {
            Cell::Start if self.start.is_some() => return Err(GridError::DuplicateStart { pos }),
            Cell::Start => self.start = Some(pos),
            Cell::End if self.end.is_some() => return Err(GridError::DuplicateEnd { pos }),
            Cell::End => self.end = Some(pos),
            Cell::Path | Cell::Wall => {}
        }
        self.cells.push(cell);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<CellGrid, GridError> {
        debug_assert_eq!(self.cells.len(), self.height * self.width);
        let start = self.start.ok_or(GridError::MissingStart)?;
        let end = self.end.ok_or(GridError::MissingEnd)?;
        Ok(CellGrid {
            height: self.height,
            width: self.width,
            cells: self.cells,
            start,
            end,
        })
    }
}
