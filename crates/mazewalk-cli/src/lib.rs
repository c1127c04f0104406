//! Terminal front end for mazewalk.
//!
//! Loads or generates a maze, draws it as text, and lets the user walk
//! through it with `W`/`A`/`S`/`D` or hand it to the auto-solver by typing
//! `solve`.
//!
//! The `mazewalk` binary is a thin wrapper around [`run`].

use std::io::{self, IsTerminal as _, Write as _};

use mazewalk_core::CellGrid;
use mazewalk_game::Maze;
use mazewalk_generator::MazeGenerator;

pub use self::{
    args::{Args, ThemeKind},
    command::{Command, CommandParseError},
    error::AppError,
    render::render,
    session::{Session, SessionEnd},
    theme::{Palette, Theme},
};

mod args;
mod command;
mod error;
mod render;
mod session;
mod theme;

/// Loads the maze described by `args` and returns it with a title for display.
///
/// # Errors
///
/// Returns [`AppError::Load`] if the maze file cannot be loaded, or
/// [`AppError::Size`] if the size of a generated maze is invalid.
pub fn load_maze(args: &Args) -> Result<(Maze, String), AppError> {
    if let Some(path) = &args.file {
        let grid = CellGrid::load(path)?;
        log::debug!(
            "loaded {}x{} maze from {}",
            grid.height(),
            grid.width(),
            path.display()
        );
        return Ok((Maze::new(grid), path.display().to_string()));
    }

    let generator = MazeGenerator::new(args.size)?;
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    let title = format!("auto-generated maze (seed: {})", generated.seed);
    Ok((generated.into(), title))
}

/// Runs the program on standard input and output.
///
/// # Errors
///
/// Returns an error if the maze cannot be set up, if terminal I/O fails, or if
/// the auto-solver fails.
pub fn run(args: &Args) -> Result<SessionEnd, AppError> {
    let (maze, title) = load_maze(args)?;

    let mut stdout = io::stdout().lock();
    let palette = args.palette(stdout.is_terminal());
    let info = palette.info;
    writeln!(stdout)?;
    writeln!(stdout, "{info}Now viewing: {title}{info:#}")?;
    writeln!(stdout)?;

    let mut session = Session::new(maze, args.theme.theme(), io::stdin().lock(), stdout)
        .with_palette(palette);
    let end = if args.solve {
        session.auto_solve()?
    } else {
        session.run()?
    };
    log::debug!("session ended: {end:?}");
    Ok(end)
}

#[cfg(test)]
mod tests {
    use std::{env, ffi::OsStr, fs, process};

    use clap::Parser as _;
    use mazewalk_core::{LoadError, Position};
    use mazewalk_generator::MazeSeed;

    use super::*;

    #[test]
    fn test_load_generated_maze() {
        let seed = MazeSeed::from([5; 32]);
        let args = Args::try_parse_from(["mazewalk", "--size", "15", "--seed", &seed.to_string()])
            .unwrap();
        let (maze, title) = load_maze(&args).unwrap();
        assert_eq!((maze.height(), maze.width()), (15, 15));
        assert!(title.contains(&seed.to_string()));

        let (again, _) = load_maze(&args).unwrap();
        assert_eq!(maze, again);
    }

    #[test]
    fn test_load_rejects_invalid_size() {
        let args = Args::try_parse_from(["mazewalk", "--size", "8"]).unwrap();
        assert!(matches!(load_maze(&args), Err(AppError::Size(_))));
    }

    #[test]
    fn test_load_maze_file() {
        let path = env::temp_dir().join(format!("mazewalk-cli-{}.txt", process::id()));
        fs::write(&path, "5 5\n#####\n#S  #\n### #\n#E  #\n#####\n").unwrap();
        let args = Args::try_parse_from([OsStr::new("mazewalk"), path.as_os_str()]).unwrap();
        let (maze, title) = load_maze(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(maze.start_position(), Position::new(1, 1));
        assert_eq!(title, path.display().to_string());
    }

    #[test]
    fn test_load_missing_file() {
        let args = Args::try_parse_from(["mazewalk", "/nonexistent/mazewalk/maze.txt"]).unwrap();
        assert!(matches!(
            load_maze(&args),
            Err(AppError::Load(LoadError::NotFound { .. }))
        ));
    }
}
