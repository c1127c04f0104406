//! Core data structures for maze puzzles.
//!
//! This crate provides the value types shared by maze generation, traversal,
//! and presentation components.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Coordinates** - Where things are and how to move between them
//!    - [`position`]: Zero-based `(row, col)` grid positions
//!    - [`direction`]: The four movement directions, including the fixed
//!      [`Direction::PRIORITY`] order used by the auto-solver
//!
//! 2. **Grid model** - What is at each position
//!    - [`cell`]: Classification of a single grid position
//!    - [`grid`]: A validated rectangular grid of cells with exactly one start
//!      and one end
//!
//! 3. **Text format** - How grids are stored on disk
//!    - [`text`]: The `height width` header plus rows format, parsing errors, and
//!      file loading
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::{Cell, CellGrid, Direction, Position};
//!
//! let grid: CellGrid = "5 5\n#####\n#S  #\n# # #\n#  E#\n#####\n".parse()?;
//!
//! assert_eq!(grid.start(), Position::new(1, 1));
//! assert_eq!(grid[grid.start().moved_in(Direction::Down)], Cell::Path);
//! assert_eq!(grid[Position::new(2, 2)], Cell::Wall);
//! # Ok::<(), mazewalk_core::GridParseError>(())
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod position;
pub mod text;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    direction::Direction,
    grid::{CellGrid, DimensionError, GridError, MAX_DIMENSION, MIN_DIMENSION, validate_dimension},
    position::Position,
    text::{GridParseError, LoadError},
};
