use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A tile on the board: a regular letter, or a blank assigned to a letter.
///
/// A blank plays as its assigned letter but is worth 0 points. In the text
/// representation a regular tile is an uppercase character and a blank is
/// the lowercase character of its assigned letter; an empty cell is a `.`
/// and is represented by `None` in the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// A regular letter tile
    Letter(Letter),
    /// A blank played as the given letter
    Blank(Letter),
}

impl Tile {
    /// The letter this tile plays as, whether regular or blank.
    pub fn letter(self) -> Letter {
        match self {
            Tile::Letter(letter) | Tile::Blank(letter) => letter,
        }
    }

    /// Check if the tile is a blank.
    pub fn is_blank(self) -> bool {
        matches!(self, Tile::Blank(_))
    }

    /// Parse a tile from its character form: uppercase is a regular
    /// letter, lowercase a blank assigned to that letter.
    pub fn from_char(c: char) -> Option<Tile> {
        let letter = Letter::from_char(c)?;
        if c.is_ascii_uppercase() {
            Some(Tile::Letter(letter))
        } else {
            Some(Tile::Blank(letter))
        }
    }

    /// The character form: the mirror of [`from_char`](Tile::from_char).
    pub fn as_char(self) -> char {
        match self {
            Tile::Letter(letter) => letter.as_char(),
            Tile::Blank(letter) => letter.as_char().to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Tile::from_char(c).ok_or(Error::InvalidTileChar(c))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
