use std::io;

use mazewalk_core::{DimensionError, LoadError};
use mazewalk_game::SolverError;

/// Errors that end the program.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The maze file could not be loaded.
    #[display("{_0}")]
    Load(#[from] LoadError),
    /// The requested maze size is invalid.
    #[display("invalid maze size: {_0}")]
    Size(#[from] DimensionError),
    /// Reading input or writing output failed.
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
    /// The auto-solver broke an internal invariant.
    #[display("auto-solver failed: {_0}")]
    Solver(#[from] SolverError),
}
