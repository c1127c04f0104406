use mazewalk_core::{Direction, Position};

/// Errors returned by [`Maze::attempt_move`](crate::Maze::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// A wall blocks the step.
    #[display("cannot move {dir}: there is a wall at {target}")]
    BlockedByWall {
        /// The requested direction.
        dir: Direction,
        /// The wall cell the walker would have stepped onto.
        target: Position,
    },
}

/// Errors that can occur during depth-first solving.
///
/// These indicate a broken trail invariant rather than a property of the maze;
/// an unsolvable maze is reported as
/// [`SolveOutcome::Unsolvable`](crate::SolveOutcome::Unsolvable) instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The cell to retreat to is not next to the live position.
    #[display("cannot retreat from {from} to non-adjacent {to}")]
    NonAdjacentRetreat {
        /// The live position.
        from: Position,
        /// The trail position before it.
        to: Position,
    },
    /// The live position is away from the start but the trail has no cell
    /// before it.
    #[display("trail has no cell to retreat to from {at}")]
    DetachedTrail {
        /// The live position.
        at: Position,
    },
    /// A move chosen by the solver was rejected.
    #[display("solver move rejected: {_0}")]
    Move(#[from] MoveError),
}
