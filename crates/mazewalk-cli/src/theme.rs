use clap::builder::styling::{AnsiColor, Style};
use mazewalk_core::Cell;

/// The glyphs used to draw a maze.
///
/// Every glyph is drawn in a single terminal cell (or two, for emoji), so all
/// glyphs of a theme should have the same display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// An open cell.
    pub path: &'static str,
    /// A wall cell.
    pub wall: &'static str,
    /// The start cell.
    pub start: &'static str,
    /// The end cell.
    pub end: &'static str,
    /// The walker.
    pub live: &'static str,
    /// A cell on the trail.
    pub trail: &'static str,
    /// An abandoned cell.
    pub backtracked: &'static str,
}

impl Theme {
    /// Plain ASCII glyphs, matching the maze file format where possible.
    pub const ASCII: Self = Self {
        path: " ",
        wall: "#",
        start: "S",
        end: "E",
        live: "@",
        trail: ".",
        backtracked: "x",
    };

    /// Emoji glyphs.
    pub const EMOJI: Self = Self {
        path: "\u{2b1c}\u{fe0f}",
        wall: "\u{2b1b}",
        start: "\u{1f3c1}",
        end: "\u{1f3e0}",
        live: "\u{1f464}",
        trail: "\u{1f7e6}",
        backtracked: "\u{1f7e5}",
    };

    /// Returns the glyph for a plain cell.
    #[must_use]
    pub const fn cell(&self, cell: Cell) -> &'static str {
        match cell {
            Cell::Path => self.path,
            Cell::Wall => self.wall,
            Cell::Start => self.start,
            Cell::End => self.end,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ASCII
    }
}

/// Text styles for the messages printed around the maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    /// Titles, command names and auto-solver success.
    pub info: Style,
    /// Reaching the end.
    pub success: Style,
    /// Warnings and auto-solver failure.
    pub failure: Style,
}

impl Palette {
    /// No styling at all.
    pub const PLAIN: Self = Self {
        info: Style::new(),
        success: Style::new(),
        failure: Style::new(),
    };

    /// ANSI terminal colours.
    pub const ANSI: Self = Self {
        info: AnsiColor::Blue.on_default(),
        success: AnsiColor::Green.on_default(),
        failure: AnsiColor::Red.on_default(),
    };
}
