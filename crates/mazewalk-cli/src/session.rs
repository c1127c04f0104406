use std::io::{BufRead, Write};

use mazewalk_game::{Maze, SolveOutcome};

use crate::{AppError, Command, Palette, Theme, render};

const CONGRATULATIONS: &str = "Congratulations, you reached the end of the maze!";
const AUTO_SOLVED: &str = "The autosolver successfully found the end of the maze.";
const UNSOLVABLE: &str = "The autosolver failed to solve this maze.";
const INVALID_DIRECTION: &str = "Invalid direction, please try again.";
const WALL_IN_THE_WAY: &str = "Could not move in the given direction as there was a wall.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionEnd {
    /// The user walked onto the end cell.
    Completed,
    /// The auto-solver ran, with the given result.
    AutoSolved(SolveOutcome),
    /// Input ran out before the maze was finished.
    InputClosed,
}

/// An interactive text session over one maze.
///
/// Reads commands line by line from `input` and writes the maze and messages
/// to `output`. Messages are unstyled unless a [`Palette`] is set with
/// [`with_palette`](Self::with_palette).
#[derive(Debug)]
pub struct Session<R, W> {
    maze: Maze,
    theme: Theme,
    palette: Palette,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session.
    #[must_use]
    pub fn new(maze: Maze, theme: Theme, input: R, output: W) -> Self {
        Self {
            maze,
            theme,
            palette: Palette::PLAIN,
            input,
            output,
        }
    }

    /// Sets the styles used for messages.
    #[must_use]
    pub fn with_palette(self, palette: Palette) -> Self {
        Self { palette, ..self }
    }

    /// Returns the maze in its current state.
    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Shows the maze, then reads and applies commands until the end is
    /// reached, the auto-solver has run, or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if the auto-solver
    /// fails.
    pub fn run(&mut self) -> Result<SessionEnd, AppError> {
        self.draw()?;
        let mut line = String::new();
        loop {
            let info = self.palette.info;
            write!(
                self.output,
                "Enter a direction to move {info}(W, A, S or D){info:#} \
                 or type {info}solve{info:#} to autosolve: "
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(SessionEnd::InputClosed);
            }
            if let Some(end) = self.apply(line.trim_end_matches(['\n', '\r']))? {
                return Ok(end);
            }
        }
    }

    /// Runs the auto-solver and shows its result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or if the auto-solver fails.
    pub fn auto_solve(&mut self) -> Result<SessionEnd, AppError> {
        let outcome = self.maze.auto_solve()?;
        self.draw()?;
        let (style, message) = match outcome {
            SolveOutcome::Solved => (self.palette.info, AUTO_SOLVED),
            SolveOutcome::Unsolvable => (self.palette.failure, UNSOLVABLE),
        };
        writeln!(self.output, "{style}{message}{style:#}")?;
        Ok(SessionEnd::AutoSolved(outcome))
    }

    fn apply(&mut self, input: &str) -> Result<Option<SessionEnd>, AppError> {
        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("{err}");
                let style = self.palette.failure;
                writeln!(self.output, "{style}{INVALID_DIRECTION}{style:#}")?;
                return Ok(None);
            }
        };
        let dir = match command {
            Command::Solve => return self.auto_solve().map(Some),
            Command::Move(dir) => dir,
        };
        if let Err(err) = self.maze.attempt_move(dir) {
            log::debug!("{err}");
            let style = self.palette.failure;
            writeln!(self.output, "{style}{WALL_IN_THE_WAY}{style:#}")?;
            return Ok(None);
        }
        self.draw()?;
        if self.maze.end_reached() {
            let style = self.palette.success;
            writeln!(self.output, "{style}{CONGRATULATIONS}{style:#}")?;
            return Ok(Some(SessionEnd::Completed));
        }
        Ok(None)
    }

    fn draw(&mut self) -> Result<(), AppError> {
        write!(self.output, "{}", render(&self.maze, &self.theme))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mazewalk_core::Position;

    use super::*;

    const PROMPT: &str = "Enter a direction to move (W, A, S or D) or type solve to autosolve: ";

    const MAZE: &str = "\
5 7
#######
#S   E#
# ### #
#     #
#######
";

    const WALLED_OFF: &str = "\
5 7
#######
#S # E#
# ### #
#  #  #
#######
";

    fn session<'a>(text: &str, input: &'a str) -> Session<&'a [u8], Vec<u8>> {
        Session::new(
            Maze::new(text.parse().unwrap()),
            Theme::ASCII,
            input.as_bytes(),
            vec![],
        )
    }

    fn output<R>(session: &Session<R, Vec<u8>>) -> &str {
        std::str::from_utf8(&session.output).unwrap()
    }

    #[test]
    fn test_walk_to_end() {
        let mut s = session(MAZE, "d\nD\nd\nd\n");
        assert_eq!(s.run().unwrap(), SessionEnd::Completed);
        assert!(s.maze().end_reached());
        let out = output(&s);
        assert_eq!(out.matches(PROMPT).count(), 4);
        assert!(out.ends_with(&format!("{CONGRATULATIONS}\n")));
        assert!(out.contains("#S...@#"));
    }

    #[test]
    fn test_warnings_leave_maze_unchanged() {
        let mut s = session(MAZE, "up\nw\n");
        assert_eq!(s.run().unwrap(), SessionEnd::InputClosed);
        assert!(s.maze().is_live(Position::new(1, 1)));
        let out = output(&s);
        assert!(out.contains(INVALID_DIRECTION));
        assert!(out.contains(WALL_IN_THE_WAY));
        // Only the initial drawing.
        assert_eq!(out.matches("#######").count(), 2);
    }

    #[test]
    fn test_solve_command() {
        let mut s = session(MAZE, "s\nsolve\nd\n");
        assert_eq!(
            s.run().unwrap(),
            SessionEnd::AutoSolved(SolveOutcome::Solved)
        );
        assert!(s.maze().end_reached());
        // The trailing move is never read.
        assert_eq!(output(&s).matches(PROMPT).count(), 2);
        assert!(output(&s).ends_with(&format!("{AUTO_SOLVED}\n")));
    }

    #[test]
    fn test_solve_unsolvable() {
        let mut s = session(WALLED_OFF, "SOLVE\r\n");
        assert_eq!(
            s.run().unwrap(),
            SessionEnd::AutoSolved(SolveOutcome::Unsolvable)
        );
        assert!(s.maze().is_live(Position::new(1, 1)));
        assert!(output(&s).ends_with(&format!("{UNSOLVABLE}\n")));
    }

    #[test]
    fn test_auto_solve_without_input() {
        let mut s = session(MAZE, "");
        assert_eq!(
            s.auto_solve().unwrap(),
            SessionEnd::AutoSolved(SolveOutcome::Solved)
        );
        assert!(!output(&s).contains(PROMPT));
    }

    #[test]
    fn test_palette_colours_messages() {
        let mut s = session(MAZE, "x\nw\nd\nd\nd\nd\n").with_palette(Palette::ANSI);
        assert_eq!(s.run().unwrap(), SessionEnd::Completed);
        let out = output(&s);
        assert!(out.contains("\u{1b}[34m(W, A, S or D)\u{1b}[0m"));
        assert!(out.contains("\u{1b}[34msolve\u{1b}[0m"));
        assert!(out.contains(&format!("\u{1b}[31m{INVALID_DIRECTION}\u{1b}[0m\n")));
        assert!(out.contains(&format!("\u{1b}[31m{WALL_IN_THE_WAY}\u{1b}[0m\n")));
        assert!(out.ends_with(&format!("\u{1b}[32m{CONGRATULATIONS}\u{1b}[0m\n")));
        // The maze itself is never styled.
        assert!(out.contains("#S...@#"));
    }

    #[test]
    fn test_palette_colours_solver_result() {
        let mut s = session(WALLED_OFF, "").with_palette(Palette::ANSI);
        s.auto_solve().unwrap();
        assert!(output(&s).ends_with(&format!("\u{1b}[31m{UNSOLVABLE}\u{1b}[0m\n")));

        let mut s = session(MAZE, "").with_palette(Palette::ANSI);
        s.auto_solve().unwrap();
        assert!(output(&s).ends_with(&format!("\u{1b}[34m{AUTO_SOLVED}\u{1b}[0m\n")));
    }
}
