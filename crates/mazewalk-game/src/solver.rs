use mazewalk_core::Direction;

use crate::{Maze, SolverError};

/// Terminal result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// The walker reached the end cell.
    Solved,
    /// Every cell reachable from the start was explored without finding the end.
    Unsolvable,
}

/// A single iteration of the depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveStep {
    /// Moved onto an unexplored cell.
    Advanced(Direction),
    /// Stepped back to the previous trail cell from a dead end.
    Retreated(Direction),
    /// The walker is on the end cell. Nothing was moved.
    ReachedEnd,
    /// The walker is back at the start with nothing left to explore.
    Exhausted,
}

/// Step counters collected while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of moves onto unexplored cells.
    pub advances: usize,
    /// Number of moves back out of dead ends.
    pub retreats: usize,
}

impl SolveStats {
    /// Returns the total number of moves made.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.advances + self.retreats
    }
}

/// A deterministic depth-first maze solver.
///
/// At every step the solver looks at the four directions in
/// [`Direction::PRIORITY`] order and advances onto the first open cell that
/// is neither on the trail nor backtracked. When there is no such cell it
/// retreats to the previous trail cell, which marks the dead end as
/// backtracked. The search state lives entirely in the maze's [`Trail`](crate::Trail);
/// the solver keeps nothing of its own.
///
/// If the walker is back at the start and cannot advance, every reachable
/// cell has been explored and the maze is unsolvable.
///
/// # Examples
///
/// ```
/// use mazewalk_game::{DepthFirstSolver, Maze, SolveOutcome};
///
/// let mut maze = Maze::generate(21)?;
/// let (outcome, stats) = DepthFirstSolver::new().solve(&mut maze)?;
///
/// assert_eq!(outcome, SolveOutcome::Solved);
/// assert!(maze.end_reached());
/// assert!(stats.advances >= maze.trail().path().len() - 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSolver;

impl DepthFirstSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Performs one iteration of the search from the maze's current state.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if a move chosen by the solver is rejected or
    /// the trail does not lead back from the live position to an adjacent
    /// cell.
    pub fn step(&self, maze: &mut Maze, stats: &mut SolveStats) -> Result<SolveStep, SolverError> {
        if maze.end_reached() {
            return Ok(SolveStep::ReachedEnd);
        }

        let live = maze.live_position();
        let unexplored = Direction::PRIORITY.into_iter().find(|&dir| {
            let target = live.moved_in(dir);
            maze.can_move(dir) && !maze.was_visited(target) && !maze.was_backtracked(target)
        });
        if let Some(dir) = unexplored {
            maze.attempt_move(dir)?;
            stats.advances += 1;
            return Ok(SolveStep::Advanced(dir));
        }

        if live == maze.start_position() {
            return Ok(SolveStep::Exhausted);
        }
        let parent = maze
            .trail()
            .parent()
            .ok_or(SolverError::DetachedTrail { at: live })?;
        let dir = Direction::between(live, parent).ok_or(SolverError::NonAdjacentRetreat {
            from: live,
            to: parent,
        })?;
        maze.attempt_move(dir)?;
        stats.retreats += 1;
        Ok(SolveStep::Retreated(dir))
    }

    /// Runs the search until the end is reached or the start is exhausted.
    ///
    /// The maze is searched from its current state; call
    /// [`Maze::auto_solve`] to start over from the beginning.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`step`](Self::step).
    pub fn solve(&self, maze: &mut Maze) -> Result<(SolveOutcome, SolveStats), SolverError> {
        let mut stats = SolveStats::default();
        loop {
            match self.step(maze, &mut stats)? {
                SolveStep::ReachedEnd => return Ok((SolveOutcome::Solved, stats)),
                SolveStep::Exhausted => return Ok((SolveOutcome::Unsolvable, stats)),
                SolveStep::Advanced(_) | SolveStep::Retreated(_) => {}
            }
        }
    }
}
