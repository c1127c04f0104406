//! Maze traversal state and automatic solving.
//!
//! # Overview
//!
//! - [`Maze`]: a grid plus the walker's live position, moved one step at a
//!   time with [`Maze::attempt_move`]
//! - [`Trail`]: the route from the start to the live position and the cells
//!   abandoned along the way, including loop collapsing
//! - [`DepthFirstSolver`]: a deterministic search driven entirely through the
//!   trail, used by [`Maze::auto_solve`]
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::Direction;
//! use mazewalk_game::{Maze, MoveError, SolveOutcome};
//!
//! let mut maze = Maze::generate(11)?;
//!
//! // The start is always surrounded by the outer wall on the top and left.
//! assert!(matches!(
//!     maze.attempt_move(Direction::Up),
//!     Err(MoveError::BlockedByWall { .. })
//! ));
//!
//! assert_eq!(maze.auto_solve()?, SolveOutcome::Solved);
//! assert!(maze.end_reached());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::{MoveError, SolverError},
    maze::Maze,
    solver::{DepthFirstSolver, SolveOutcome, SolveStats, SolveStep},
    trail::{MoveKind, Trail},
};

mod error;
mod maze;
mod solver;
mod trail;
