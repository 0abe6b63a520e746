use crate::placement::Direction;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word file
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing a bincoded lexicon
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Lexicon file {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// Error parsing a board from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// A board row needs 15 cells
    #[error("Invalid row \"{0}\" of length {1} (expect 15)")]
    InvalidRowLength(String, usize),

    /// A character that is not a tile, a blank or an empty cell
    #[error("Invalid tile character '{0}'")]
    InvalidTileChar(char),

    /// Error parsing a bonus cell
    #[error("Invalid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// A flat cell index outside the 15x15 board
    #[error("Cell index {0} is outside the board")]
    InvalidCellIndex(usize),

    /// The same cell appears in more than one bonus set
    #[error("Cell index {0} has more than one bonus")]
    OverlappingBonus(usize),

    /// A rack can hold at most 7 tiles
    #[error("Rack of {0} tiles is too large (expect at most 7)")]
    RackTooLarge(usize),

    /// Attempt to apply a placement that runs off the board
    #[error("Placing {len} tiles {dir} at ({x}, {y}) does not fit")]
    PlacementOffBoard {
        x: usize,
        y: usize,
        dir: Direction,
        len: usize,
    },
}
