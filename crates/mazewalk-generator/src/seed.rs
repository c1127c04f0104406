use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed that fully determines a generated maze.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits, so a
/// maze can be reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use mazewalk_generator::MazeSeed;
///
/// let seed = MazeSeed::from([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert!(text.starts_with("abab"));
/// assert_eq!(text.parse::<MazeSeed>()?, seed);
/// # Ok::<(), mazewalk_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

impl MazeSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for MazeSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error produced when parsing a [`MazeSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a character that is not a hexadecimal digit.
    #[display("invalid hexadecimal digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Index of the rejected character.
        index: usize,
        /// The rejected character.
        ch: char,
    },
}

impl FromStr for MazeSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        for (index, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { index, ch })?;
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[index / 2] = (bytes[index / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let mut bytes = [0; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = u8::try_from(i * 7).unwrap();
        }
        let seed = MazeSeed::from(bytes);
        let text = seed.to_string();
        assert!(text.starts_with("00070e15"));
        assert_eq!(text.parse::<MazeSeed>().unwrap(), seed);
        assert_eq!(text.to_uppercase().parse::<MazeSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<MazeSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            text.parse::<MazeSeed>(),
            Err(SeedParseError::InvalidDigit { index: 10, ch: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(MazeSeed::random(), MazeSeed::random());
    }
}
