use crate::board::N;
use crate::tiles::Tile;
use std::fmt;

/// The direction a word is played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Increasing x
    Horizontal,
    /// Increasing y
    Vertical,
}

impl Direction {
    /// The (dx, dy) step for this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
        }
    }

    /// The crossing direction.
    pub fn orthogonal(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// The next cell in this direction, or None at the board edge.
    pub(crate) fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let (x, y) = (x + dx, y + dy);
        if x < N && y < N {
            Some((x, y))
        } else {
            None
        }
    }

    /// The previous cell in this direction, or None at the board edge.
    pub(crate) fn step_back(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        if x >= dx && y >= dy {
            Some((x - dx, y - dy))
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A scored move: where to put which tiles.
///
/// `(x, y)` is the anchor, the position of the first *newly placed* tile.
/// `tiles` holds the newly placed tiles only, in play order; tiles already
/// on the board are skipped over when the placement is applied. A
/// `Placement` is only meaningful for the board it was generated against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// anchor x: 0..15
    pub x: usize,
    /// anchor y: 0..15
    pub y: usize,
    /// direction of the word
    pub dir: Direction,
    /// the newly placed tiles, in order
    pub tiles: Vec<Tile>,
    /// score for this placement
    pub score: u32,
}

impl Placement {
    /// The placed tiles in text form: uppercase for regular letters,
    /// lowercase for blanks.
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|tile| tile.as_char()).collect()
    }

    /// Key that identifies equivalent placements: anchor, direction and
    /// the visible word. A blank and a regular tile playing the same
    /// letter collapse to the same key.
    pub(crate) fn dedup_key(&self) -> (usize, usize, Direction, Vec<u8>) {
        let word = self
            .tiles
            .iter()
            .map(|tile| tile.letter().index() as u8)
            .collect();
        (self.x, self.y, self.dir, word)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {} {}",
            self.letters(),
            self.x,
            self.y,
            self.dir,
            self.score
        )
    }
}
