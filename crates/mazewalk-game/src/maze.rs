use mazewalk_core::{Cell, CellGrid, DimensionError, Direction, Position};
use mazewalk_generator::{GeneratedMaze, MazeGenerator};

use crate::{DepthFirstSolver, MoveError, MoveKind, SolveOutcome, SolverError, Trail};

/// A maze being walked through.
///
/// Holds the grid together with the live position and the [`Trail`] that led
/// there. All progress is made through [`attempt_move`](Self::attempt_move);
/// [`auto_solve`](Self::auto_solve) drives the same operation automatically.
///
/// # Example
///
/// ```
/// use mazewalk_core::{Direction, Position};
/// use mazewalk_game::Maze;
///
/// let text = "5 5\n#####\n#S  #\n### #\n#E  #\n#####\n";
/// let mut maze: Maze = text.parse::<mazewalk_core::CellGrid>()?.into();
///
/// assert!(maze.attempt_move(Direction::Down).is_err());
/// maze.attempt_move(Direction::Right)?;
/// assert!(maze.is_live(Position::new(1, 2)));
///
/// assert!(maze.auto_solve()?.is_solved());
/// assert!(maze.end_reached());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: CellGrid,
    live: Position,
    trail: Trail,
}

impl Maze {
    /// Creates a maze positioned at the start of `grid`.
    #[must_use]
    pub fn new(grid: CellGrid) -> Self {
        let start = grid.start();
        Self {
            grid,
            live: start,
            trail: Trail::new(start),
        }
    }

    /// Generates a random `size`×`size` maze.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] if `size` is not a valid maze dimension.
    pub fn generate(size: usize) -> Result<Self, DimensionError> {
        Ok(MazeGenerator::new(size)?.generate().into())
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid[pos]
    }

    /// Returns the start position.
    #[must_use]
    pub fn start_position(&self) -> Position {
        self.grid.start()
    }

    /// Returns the current position of the walker.
    #[must_use]
    pub fn live_position(&self) -> Position {
        self.live
    }

    /// Returns `true` if the walker is at `pos`.
    #[must_use]
    pub fn is_live(&self, pos: Position) -> bool {
        self.live == pos
    }

    /// Returns `true` if `pos` is the start position.
    #[must_use]
    pub fn is_start(&self, pos: Position) -> bool {
        self.grid.start() == pos
    }

    /// Returns `true` if `pos` is on the trail from the start to the walker.
    #[must_use]
    pub fn was_visited(&self, pos: Position) -> bool {
        self.trail.contains(pos)
    }

    /// Returns `true` if `pos` was visited and later abandoned.
    #[must_use]
    pub fn was_backtracked(&self, pos: Position) -> bool {
        self.trail.is_backtracked(pos)
    }

    /// Returns `true` if the walker stands on the end cell.
    #[must_use]
    pub fn end_reached(&self) -> bool {
        self.grid[self.live].is_end()
    }

    /// Returns `true` if no wall blocks a step in `dir`.
    #[must_use]
    pub fn can_move(&self, dir: Direction) -> bool {
        self.grid
            .get(self.live.moved_in(dir))
            .is_some_and(Cell::is_traversable)
    }

    /// Returns the trail walked so far.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Moves the walker one step in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BlockedByWall`] if a wall is in the way. The maze
    /// is left unchanged in that case.
    pub fn attempt_move(&mut self, dir: Direction) -> Result<MoveKind, MoveError> {
        let target = self.live.moved_in(dir);
        if !self.can_move(dir) {
            return Err(MoveError::BlockedByWall { dir, target });
        }
        let kind = self.trail.step_to(target);
        self.live = target;
        Ok(kind)
    }

    /// Moves the walker back to the start and forgets the trail.
    pub fn reset(&mut self) {
        let start = self.grid.start();
        self.live = start;
        self.trail.reset(start);
    }

    /// Resets the maze and searches for the end with a [`DepthFirstSolver`].
    ///
    /// The trail and backtracked cells left behind describe the search, so
    /// they can be shown to the user afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the search breaks an internal invariant.
    pub fn auto_solve(&mut self) -> Result<SolveOutcome, SolverError> {
        self.reset();
        let (outcome, stats) = DepthFirstSolver::new().solve(self)?;
        log::debug!(
            "auto-solve finished: outcome={outcome:?}, advances={}, retreats={}",
            stats.advances,
            stats.retreats,
        );
        Ok(outcome)
    }
}

impl From<CellGrid> for Maze {
    fn from(grid: CellGrid) -> Self {
        Self::new(grid)
    }
}

impl From<GeneratedMaze> for Maze {
    fn from(maze: GeneratedMaze) -> Self {
        let GeneratedMaze { grid, seed: _ } = maze;
        Self::new(grid)
    }
}
