use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use mazewalk_generator::MazeSeed;

use crate::{Palette, Theme};

/// Glyph sets selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    /// Plain ASCII characters.
    #[default]
    Ascii,
    /// Emoji squares.
    Emoji,
}

impl ThemeKind {
    /// Returns the glyph set for this kind.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Ascii => Theme::ASCII,
            Self::Emoji => Theme::EMOJI,
        }
    }
}

/// Walk through a maze in the terminal.
///
/// Loads the maze from FILE, or generates a random one when no file is given.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Maze file to load.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Side length of a generated maze (odd, 5 to 999).
    #[arg(long, value_name = "SIZE", default_value_t = 101, conflicts_with = "file")]
    pub size: usize,

    /// Seed of a generated maze, as 64 hexadecimal digits.
    #[arg(long, value_name = "SEED", conflicts_with = "file")]
    pub seed: Option<MazeSeed>,

    /// Run the auto-solver immediately instead of reading moves.
    #[arg(long)]
    pub solve: bool,

    /// Glyphs used to draw the maze.
    #[arg(long, value_name = "THEME", value_enum, default_value_t)]
    pub theme: ThemeKind,

    /// When to colour messages.
    #[arg(long, value_name = "WHEN", value_enum, default_value_t)]
    pub color: ColorChoice,
}

impl Args {
    /// Returns the message styles to use, given whether the output is a
    /// terminal.
    #[must_use]
    pub fn palette(&self, is_terminal: bool) -> Palette {
        match self.color {
            ColorChoice::Always => Palette::ANSI,
            ColorChoice::Auto if is_terminal => Palette::ANSI,
            ColorChoice::Auto | ColorChoice::Never => Palette::PLAIN,
        }
    }
}
