//! Basic types for the tiles of the game.
mod letter;
mod tile;

use crate::board::N;
pub use letter::{Letter, ALPHABET};
pub use tile::Tile;
use tinyvec::ArrayVec;

/// A word as a list of letters, at most one board dimension long.
pub type Word = ArrayVec<[Letter; N]>;
