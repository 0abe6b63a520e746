//! Scoring of prospective placements.
//!
//! A placement is scored before it is applied: the board still shows its
//! cells as empty, and the new tiles come from the placement's overlay.
//! Premium squares therefore apply exactly to the newly placed tiles,
//! never to tiles already on the board.

use crate::board::Board;
use crate::grid::Premium;
use crate::placement::Direction;
use crate::ruleset::Ruleset;
use crate::tiles::Tile;

/// The score of placing `placed` at anchor `(x, y)` in direction `dir`:
/// the main word plus every cross-word formed by a newly placed tile.
///
/// Single-letter runs score 0, so a lone tile only scores through the
/// words it actually forms. The bingo bonus is not included here; it
/// depends on the rack, which the scorer does not see.
pub fn score_placement(
    board: &Board,
    rules: &Ruleset,
    x: usize,
    y: usize,
    dir: Direction,
    placed: &[Tile],
) -> u32 {
    let mut total = 0;
    let mut pos = Some((x, y));
    for &tile in placed {
        // move to the cell this tile lands on, skipping existing tiles
        while let Some((cx, cy)) = pos {
            if board.is_empty(cx, cy) {
                break;
            }
            pos = dir.step(cx, cy);
        }
        let (cx, cy) = match pos {
            Some(p) => p,
            None => break,
        };
        total += cross_word_score(board, rules, cx, cy, dir.orthogonal(), tile);
        pos = dir.step(cx, cy);
    }
    total + main_word_score(board, rules, x, y, dir, placed)
}

/// Score the main word: back up from the anchor to the start of the
/// contiguous run, then walk forward over existing tiles (face value)
/// and the `placed` overlay (face value with premiums) until the run
/// ends. Returns 0 for a single-letter run.
fn main_word_score(
    board: &Board,
    rules: &Ruleset,
    x: usize,
    y: usize,
    dir: Direction,
    placed: &[Tile],
) -> u32 {
    let (mut sx, mut sy) = (x, y);
    while let Some((px, py)) = dir.step_back(sx, sy) {
        if board.is_empty(px, py) {
            break;
        }
        sx = px;
        sy = py;
    }

    let mut overlay = placed.iter();
    let mut next_new = overlay.next();
    let mut sum = 0;
    let mut word_multiplier = 1;
    let mut len = 0;
    let mut pos = Some((sx, sy));
    while let Some((cx, cy)) = pos {
        match board.at(cx, cy) {
            Some(tile) => sum += rules.tile_value(tile),
            None => {
                let &tile = match next_new {
                    Some(tile) => tile,
                    None => break,
                };
                next_new = overlay.next();
                sum += premium_value(rules, cx, cy, tile, &mut word_multiplier);
            }
        }
        len += 1;
        pos = dir.step(cx, cy);
    }
    if len < 2 {
        0
    } else {
        sum * word_multiplier
    }
}

/// Score the cross-word formed by the new `tile` at the empty cell
/// `(x, y)`: the contiguous orthogonal run through it. Returns 0 when
/// the run is just the tile itself.
fn cross_word_score(
    board: &Board,
    rules: &Ruleset,
    x: usize,
    y: usize,
    orth: Direction,
    tile: Tile,
) -> u32 {
    let (mut sx, mut sy) = (x, y);
    while let Some((px, py)) = orth.step_back(sx, sy) {
        if board.is_empty(px, py) {
            break;
        }
        sx = px;
        sy = py;
    }

    let mut sum = 0;
    let mut word_multiplier = 1;
    let mut len = 0;
    let mut pos = Some((sx, sy));
    while let Some((cx, cy)) = pos {
        if (cx, cy) == (x, y) {
            sum += premium_value(rules, cx, cy, tile, &mut word_multiplier);
        } else {
            match board.at(cx, cy) {
                Some(existing) => sum += rules.tile_value(existing),
                None => break,
            }
        }
        len += 1;
        pos = orth.step(cx, cy);
    }
    if len < 2 {
        0
    } else {
        sum * word_multiplier
    }
}

/// The contribution of a newly placed tile on its square, accumulating
/// any word multiplier into `word_multiplier`. The start square doubles
/// the word played over it.
fn premium_value(rules: &Ruleset, x: usize, y: usize, tile: Tile, word_multiplier: &mut u32) -> u32 {
    let value = rules.tile_value(tile);
    match rules.premium(x, y) {
        Premium::Normal => value,
        Premium::Start => {
            *word_multiplier *= 2;
            value
        }
        Premium::LetterBonus(n) => value * n,
        Premium::WordBonus(n) => {
            *word_multiplier *= n;
            value
        }
    }
}
