//! The maze text format.
//!
//! A maze file consists of a header line with the height and width separated by
//! a single space, followed by exactly `height` rows of exactly `width`
//! characters each:
//!
//! ```text
//! 7 7
//! #######
//! #S#   #
//! # ### #
//! # #   #
//! # # # #
//! #   #E#
//! #######
//! ```
//!
//! Valid characters are `'#'` (wall), `' '` or `'.'` (path), `'S'` (start) and
//! `'E'` (end). Parsing enforces every [`CellGrid`] invariant and reports the
//! first violation in reading order.
//!
//! [`CellGrid`] implements [`FromStr`] for this format and [`Display`] writes it
//! back with canonical characters, so any grid survives a round trip.

use std::{
    fmt::{self, Display},
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    Cell, CellGrid, GridError, Position,
    grid::{GridBuilder, validate_dimension},
};

/// An error produced while parsing the maze text format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridParseError {
    /// The input contains no lines.
    #[display("maze text is empty")]
    Empty,
    /// The header line is not two integers separated by a single space.
    #[display("first line must contain the height and width separated by a single space")]
    MalformedDimensions,
    /// The number of rows differs from the header height.
    #[display("expected {expected} rows but found {actual}")]
    RowCountMismatch {
        /// Height given in the header.
        expected: usize,
        /// Number of rows present.
        actual: usize,
    },
    /// A row's length differs from the header width.
    #[display("row {row} has {actual} characters but the width is {expected}")]
    RowWidthMismatch {
        /// Zero-based grid row of the offending line.
        row: usize,
        /// Width given in the header.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A character outside the maze vocabulary was found.
    #[display("invalid maze character {ch:?} at {pos}")]
    InvalidCharacter {
        /// Position of the character.
        pos: Position,
        /// The rejected character.
        ch: char,
    },
    /// The grid violates a structural invariant.
    #[display("{_0}")]
    Grid(#[from] GridError),
}

/// An error produced while loading a maze file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[display("maze file could not be found (filename: {})", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[display("failed to read maze file (filename: {}): {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file contents are not a valid maze.
    #[display("{source} (filename: {})", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Parsing failure.
        source: GridParseError,
    },
}

impl CellGrid {
    /// Reads and parses a maze file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist,
    /// [`LoadError::Io`] if it cannot be read, and [`LoadError::Parse`] if its
    /// contents are not a valid maze.
    pub fn load<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_owned(),
                }
            } else {
                LoadError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })?;
        text.parse().map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl FromStr for CellGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().ok_or(GridParseError::Empty)?;
        let (height, width) = parse_header(header)?;

        let rows = lines.collect::<Vec<_>>();
        if rows.len() != height {
            return Err(GridParseError::RowCountMismatch {
                expected: height,
                actual: rows.len(),
            });
        }

        let mut builder = GridBuilder::new(height, width);
        for (r, line) in rows.into_iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(GridParseError::RowWidthMismatch {
                    row: r,
                    expected: width,
                    actual: len,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Position::new(r, c);
                let cell = Cell::from_char(ch).ok_or(GridParseError::InvalidCharacter { pos, ch })?;
                builder.push(pos, cell)?;
            }
        }
        Ok(builder.finish()?)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), GridParseError> {
    let tokens = line.trim_end().split(' ').collect::<Vec<_>>();
    let &[height, width] = tokens.as_slice() else {
        return Err(GridParseError::MalformedDimensions);
    };
    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| GridParseError::MalformedDimensions)
    };
    let (height, width) = (parse(height)?, parse(width)?);
    let height = validate_dimension(height).map_err(GridError::InvalidDimension)?;
    let width = validate_dimension(width).map_err(GridError::InvalidDimension)?;
    Ok((height, width))
}

impl Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height(), self.width())?;
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
