//! The anchor-driven move generator.
//!
//! Every empty cell is tried as an anchor in both directions. For each
//! anchor the play-space is extracted once, the trie is pre-walked
//! through the tiles already sitting before the anchor, and a
//! depth-first search then walks the trie and the remaining run in
//! lockstep: existing tiles force the matching trie edge, empty cells
//! branch over the letters the rack can produce that both continue a
//! word and survive the cross-word check.

use crate::board::{Board, CENTER, N};
use crate::lexicon::{Lexicon, NodeId};
use crate::placement::{Direction, Placement};
use crate::playspace::PlaySpace;
use crate::rack::{Rack, RACK_CAPACITY};
use crate::ruleset::Ruleset;
use crate::score::score_placement;
use crate::tiles::Tile;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashSet;

/// The best `n` placements for `rack` on `board`, highest score first.
///
/// The whole search tree is enumerated regardless of `n`; `n` only
/// truncates the result. Identical inputs produce identical output.
///
/// ## Examples
/// ```
/// # use std::convert::TryFrom;
/// # use gridplay::{Board, Error, Lexicon, Rack, Ruleset};
/// let lexicon = Lexicon::from_words(&["rust", "ruts"]);
/// let board = Board::new();
/// let rack = Rack::try_from("strun")?;
/// let moves = gridplay::top_n_moves(&board, &Ruleset::standard(), &lexicon, &rack, 3);
/// assert_eq!(moves.len(), 3);
/// # Ok::<(), Error>(())
/// ```
pub fn top_n_moves(
    board: &Board,
    rules: &Ruleset,
    lexicon: &Lexicon,
    rack: &Rack,
    n: usize,
) -> Vec<Placement> {
    let mut moves = all_moves(board, rules, lexicon, rack);
    moves.truncate(n);
    moves
}

/// Every legal placement for `rack` on `board`, deduplicated and sorted
/// by score descending. Ties keep generation order, which is fixed, so
/// the result is deterministic.
pub fn all_moves(
    board: &Board,
    rules: &Ruleset,
    lexicon: &Lexicon,
    rack: &Rack,
) -> Vec<Placement> {
    #[cfg(feature = "rayon")]
    let rows: Vec<Vec<Placement>> = (0..N)
        .into_par_iter()
        .map(|y| row_candidates(board, rules, lexicon, rack, y))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let rows: Vec<Vec<Placement>> = (0..N)
        .map(|y| row_candidates(board, rules, lexicon, rack, y))
        .collect();

    let mut seen = HashSet::new();
    let mut moves: Vec<Placement> = rows
        .into_iter()
        .flatten()
        .filter(|placement| seen.insert(placement.dedup_key()))
        .collect();
    moves.sort_by_key(|placement| Reverse(placement.score));
    moves
}

/// All candidates anchored in row `y`, in both directions.
fn row_candidates(
    board: &Board,
    rules: &Ruleset,
    lexicon: &Lexicon,
    rack: &Rack,
    y: usize,
) -> Vec<Placement> {
    let mut out = Vec::new();
    let mut placed = Vec::with_capacity(RACK_CAPACITY);
    for x in 0..N {
        if !board.is_empty(x, y) {
            continue;
        }
        for &dir in &[Direction::Horizontal, Direction::Vertical] {
            let space = PlaySpace::extract(board, x, y, dir);
            let offset = match dir {
                Direction::Horizontal => x - space.x0,
                Direction::Vertical => y - space.y0,
            };
            // the tiles before the anchor are mandatory prefix letters;
            // a prefix the trie does not know kills the whole anchor
            let mut node = Some(lexicon.trie().root());
            for i in 0..offset {
                node = space.play[i]
                    .and_then(|tile| node.and_then(|n| lexicon.trie().child(n, tile.letter())));
            }
            let node = match node {
                Some(node) => node,
                None => continue,
            };
            let mut search = Search {
                board,
                rules,
                lexicon,
                space: &space,
                x,
                y,
                dir,
                rack_len: rack.len(),
                out: &mut out,
            };
            let mut rack = rack.clone();
            search.dfs(node, offset, &mut rack, &mut placed, offset > 0, false);
        }
    }
    out
}

/// One anchor's depth-first search over the play-space.
struct Search<'a> {
    board: &'a Board,
    rules: &'a Ruleset,
    lexicon: &'a Lexicon,
    space: &'a PlaySpace,
    /// anchor x
    x: usize,
    /// anchor y
    y: usize,
    dir: Direction,
    rack_len: usize,
    out: &'a mut Vec<Placement>,
}

impl<'a> Search<'a> {
    /// Walk trie and play-space in lockstep from `node` at `idx`.
    ///
    /// `covers` records whether the word so far spans a pre-existing
    /// tile; `connected` whether any placed tile formed a cross-word.
    /// Both feed the contiguity check when a candidate is recorded.
    fn dfs(
        &mut self,
        node: NodeId,
        idx: usize,
        rack: &mut Rack,
        placed: &mut Vec<Tile>,
        covers: bool,
        connected: bool,
    ) {
        let current = self.space.play.get(idx).copied().flatten();
        // a word may only end on an empty cell or the board edge
        let can_stop = idx >= self.space.play.len() || current.is_none();
        if can_stop && self.lexicon.trie().is_terminal(node) && !placed.is_empty() {
            self.record(placed, covers, connected);
        }
        if idx >= self.space.play.len() || rack.is_empty() {
            return;
        }
        match current {
            Some(tile) => {
                // an existing tile forces its trie edge, consuming no rack tile
                if let Some(child) = self.lexicon.trie().child(node, tile.letter()) {
                    self.dfs(child, idx + 1, rack, placed, true, connected);
                }
            }
            None => {
                let candidates = self.lexicon.trie().children_mask(node) & rack.producible();
                for letter in candidates.iter() {
                    if let Some(cross) = &self.space.cross[idx] {
                        if !self.lexicon.contains_word(&cross.word_with(letter)) {
                            continue;
                        }
                    }
                    let child = match self.lexicon.trie().child(node, letter) {
                        Some(child) => child,
                        None => continue,
                    };
                    let tile = match rack.take(letter) {
                        Some(tile) => tile,
                        None => continue,
                    };
                    let has_cross = self.space.cross[idx].is_some();
                    placed.push(tile);
                    self.dfs(child, idx + 1, rack, placed, covers, connected || has_cross);
                    placed.pop();
                    rack.put_back(tile);
                }
            }
        }
    }

    /// Validate and score a candidate word ending before `placed` runs
    /// out of board.
    fn record(&mut self, placed: &[Tile], covers: bool, connected: bool) {
        if self.board.center_is_empty() {
            // first move: the placement must cover the center square
            if !self.covers_center(placed.len()) {
                return;
            }
        } else if !covers && !connected {
            return;
        }
        let mut score = score_placement(self.board, self.rules, self.x, self.y, self.dir, placed);
        if self.rack_len == RACK_CAPACITY && placed.len() == RACK_CAPACITY {
            score += self.rules.bingo_bonus();
        }
        self.out.push(Placement {
            x: self.x,
            y: self.y,
            dir: self.dir,
            tiles: placed.to_vec(),
            score,
        });
    }

    /// Whether one of `count` newly placed tiles, laid out from the
    /// anchor with existing tiles skipped, lands on the center square.
    fn covers_center(&self, count: usize) -> bool {
        let mut remaining = count;
        let mut pos = Some((self.x, self.y));
        while remaining > 0 {
            let (cx, cy) = match pos {
                Some(p) => p,
                None => return false,
            };
            if self.board.is_empty(cx, cy) {
                if (cx, cy) == CENTER {
                    return true;
                }
                remaining -= 1;
            }
            pos = self.dir.step(cx, cy);
        }
        false
    }
}
