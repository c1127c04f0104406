use std::str::FromStr;

use mazewalk_core::Direction;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Move one step.
    Move(Direction),
    /// Run the auto-solver.
    Solve,
}

/// Input that is neither a direction key nor `solve`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid command {input:?}")]
pub struct CommandParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses `W`, `A`, `S`, `D` or `solve`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("solve") {
            return Ok(Self::Solve);
        }
        let mut chars = s.chars();
        let dir = match (chars.next(), chars.next()) {
            (Some(key), None) => match key.to_ascii_uppercase() {
                'W' => Some(Direction::Up),
                'A' => Some(Direction::Left),
                'S' => Some(Direction::Down),
                'D' => Some(Direction::Right),
                _ => None,
            },
            _ => None,
        };
        dir.map(Self::Move).ok_or_else(|| CommandParseError {
            input: s.to_owned(),
        })
    }
}
