//! Random maze generation.
//!
//! [`MazeGenerator`] produces square grids that always contain a route from the
//! start to the end. Generation is driven by a [`MazeSeed`], so every maze can
//! be reproduced exactly.
//!
//! # Algorithm
//!
//! The interior of the maze is treated as a lattice of *nodes* at even offsets,
//! with the cells between adjacent nodes acting as walls or openings.
//!
//! 1. Starting from the top-left node, *main* paths are carved node by node in
//!    random directions, repeatedly from every main node, until a main path
//!    reaches the bottom-right end node.
//! 2. Every node that is still a wall then seeds a *filler* path. A filler path
//!    stops when it dead-ends or when it joins a path of the other class, which
//!    connects the leftover regions to the rest of the maze.
//! 3. The lattice is converted to open cells, the start and end markers are
//!    placed, and a one-cell wall border is added.
//!
//! # Examples
//!
//! ```
//! use mazewalk_core::Position;
//! use mazewalk_generator::{MazeGenerator, MazeSeed};
//!
//! let generator = MazeGenerator::new(11)?;
//! let maze = generator.generate_with_seed(MazeSeed::from([42; 32]));
//!
//! assert_eq!(maze.grid.height(), 11);
//! assert_eq!(maze.grid.start(), Position::new(1, 1));
//! assert_eq!(maze.grid.end(), Position::new(9, 9));
//!
//! // The same seed always yields the same maze.
//! assert_eq!(generator.generate_with_seed(maze.seed), maze);
//! # Ok::<(), mazewalk_core::DimensionError>(())
//! ```

use mazewalk_core::{CellGrid, DimensionError, validate_dimension};

pub use self::seed::{MazeSeed, SeedParseError};
use self::carve::Lattice;

mod carve;
mod seed;

/// A generated maze together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The generated grid.
    pub grid: CellGrid,
    /// The seed used for generation.
    pub seed: MazeSeed,
}

/// Generates square mazes of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    size: usize,
}

impl MazeGenerator {
    /// Creates a generator for `size`×`size` mazes, including the outer wall.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] if `size` is even or outside
    /// [`MIN_DIMENSION`](mazewalk_core::MIN_DIMENSION)..=[`MAX_DIMENSION`](mazewalk_core::MAX_DIMENSION).
    pub fn new(size: usize) -> Result<Self, DimensionError> {
        let size = validate_dimension(i64::try_from(size).unwrap_or(i64::MAX))?;
        Ok(Self { size })
    }

    /// Returns the side length of generated mazes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generates a maze from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedMaze {
        self.generate_with_seed(MazeSeed::random())
    }

    /// Generates the maze determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: MazeSeed) -> GeneratedMaze {
        let mut rng = seed.rng();
        let mut lattice = Lattice::new(self.size - 2);
        let stats = lattice.populate(&mut rng);
        log::debug!(
            "generated {size}x{size} maze: seed={seed}, main_passes={}, filler_paths={}",
            stats.main_passes,
            stats.filler_paths,
            size = self.size,
        );
        GeneratedMaze {
            grid: lattice.into_grid(),
            seed,
        }
    }
}
