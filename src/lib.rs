//! A move generation and scoring engine for Scrabble-like word games.
//! <br>
//! Given a 15x15 board, a rack of up to 7 tiles (blanks included), a
//! [`Ruleset`] with letter values and premium squares, and a [`Lexicon`]
//! of legal words, the engine enumerates every legal placement, scores
//! each one, and returns them ranked by score. The inverse query is also
//! supported: given a completed word, [`find_placements`] lists every
//! position where it could legally have been played.
//!
//! The dictionary is held in two coupled forms: a prefix trie that
//! prunes the placement search, and a hashed word-set that answers the
//! cross-word checks. The search itself is an anchor-driven depth-first
//! walk of trie and board in lockstep. With the `rayon` feature (on by
//! default) the anchor rows are searched in parallel.
//!
//! The engine performs no I/O and keeps no global state: boards, racks,
//! rulesets and lexicons are plain values owned by the caller. `Ruleset`
//! and `Lexicon` are immutable once built and can be shared freely
//! between concurrent queries.
//!
//! # Basic usage
//! ```
//! # use std::convert::TryFrom;
//! # use gridplay::{Board, Error, Lexicon, Rack, Ruleset};
//! let lexicon = Lexicon::from_words(&["cable", "cables", "ace"]);
//! let mut board = Board::new();
//! let rules = Ruleset::standard();
//! let rack = Rack::try_from("celbas")?;
//! let moves = gridplay::top_n_moves(&board, &rules, &lexicon, &rack, 10);
//! for placement in &moves {
//!     println!("{}", placement);
//! }
//! board.apply(&moves[0])?;
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```

mod board;
mod error;
mod finder;
mod grid;
mod letterset;
mod lexicon;
mod movegen;
mod placement;
mod playspace;
mod rack;
mod ruleset;
mod score;
mod tiles;

pub use crate::board::{Board, CENTER, N};
pub use crate::error::Error;
pub use crate::finder::find_placements;
pub use crate::grid::{BonusGrid, Premium};
pub use crate::letterset::LetterSet;
pub use crate::lexicon::{Lexicon, NodeId, Trie};
pub use crate::movegen::{all_moves, top_n_moves};
pub use crate::placement::{Direction, Placement};
pub use crate::playspace::{CrossContext, PlaySpace};
pub use crate::rack::{Rack, RACK_CAPACITY};
pub use crate::ruleset::Ruleset;
pub use crate::score::score_placement;
pub use crate::tiles::{Letter, Tile, Word, ALPHABET};
