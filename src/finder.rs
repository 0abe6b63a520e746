//! The inverse query: where could a given word have been played?

use crate::board::{Board, CENTER, N};
use crate::lexicon::Lexicon;
use crate::placement::{Direction, Placement};
use crate::playspace::cross_context;
use crate::rack::RACK_CAPACITY;
use crate::ruleset::Ruleset;
use crate::score::score_placement;
use crate::tiles::{Letter, Tile};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Every legal placement of the completed `word` on `board`, sorted by
/// score descending.
///
/// A placement is legal when the word fits inside a maximal run (the
/// cells just before and after it are empty or off the board), agrees
/// with every tile it crosses, places at least one new tile, is
/// connected to the existing tiles (or covers the center on the first
/// move), and every cross-word it forms is in the lexicon. A word that
/// fits nowhere yields an empty list.
///
/// ## Examples
/// ```
/// # use gridplay::{Board, Error, Lexicon, Ruleset};
/// let lexicon = Lexicon::from_words(&["hello", "hellos"]);
/// let mut rows = vec!["..............."; 15];
/// rows[7] = ".....HELLO.....";
/// let board = Board::from_rows(&rows)?;
/// let found = gridplay::find_placements(&board, &Ruleset::standard(), &lexicon, "hellos");
/// assert!(!found.is_empty());
/// # Ok::<(), Error>(())
/// ```
pub fn find_placements(
    board: &Board,
    rules: &Ruleset,
    lexicon: &Lexicon,
    word: &str,
) -> Vec<Placement> {
    let letters: Vec<Letter> = match parse_word(word) {
        Some(letters) => letters,
        None => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for &dir in &[Direction::Horizontal, Direction::Vertical] {
        let (last_x, last_y) = match dir {
            Direction::Horizontal => (N - letters.len(), N - 1),
            Direction::Vertical => (N - 1, N - letters.len()),
        };
        for sy in 0..=last_y {
            for sx in 0..=last_x {
                if let Some(placement) = try_place(board, rules, lexicon, &letters, sx, sy, dir) {
                    if seen.insert(placement.dedup_key()) {
                        found.push(placement);
                    }
                }
            }
        }
    }
    found.sort_by_key(|placement| Reverse(placement.score));
    found
}

/// The word as letters, or None when it could never be on a board.
fn parse_word(word: &str) -> Option<Vec<Letter>> {
    let word = word.trim();
    let letters: Option<Vec<Letter>> = word.chars().map(Letter::from_char).collect();
    let letters = letters?;
    if letters.len() < 2 || letters.len() > N {
        None
    } else {
        Some(letters)
    }
}

/// Check `word` laid out from `(sx, sy)` in `dir` against every rule,
/// returning the scored placement when it is legal.
fn try_place(
    board: &Board,
    rules: &Ruleset,
    lexicon: &Lexicon,
    word: &[Letter],
    sx: usize,
    sy: usize,
    dir: Direction,
) -> Option<Placement> {
    // the word must be a maximal run: nothing directly before or after
    if let Some((px, py)) = dir.step_back(sx, sy) {
        if !board.is_empty(px, py) {
            return None;
        }
    }

    let mut tiles = Vec::new();
    let mut anchor = None;
    let mut reuses_tile = false;
    let mut has_neighbor = false;
    let mut covers_center = false;
    let (mut cx, mut cy) = (sx, sy);
    for (i, &letter) in word.iter().enumerate() {
        match board.at(cx, cy) {
            Some(tile) => {
                // an occupied cell must already show this letter
                if tile.letter() != letter {
                    return None;
                }
                reuses_tile = true;
            }
            None => {
                if let Some(cross) = cross_context(board, cx, cy, dir.orthogonal()) {
                    if !lexicon.contains_word(&cross.word_with(letter)) {
                        return None;
                    }
                    has_neighbor = true;
                }
                if anchor.is_none() {
                    anchor = Some((cx, cy));
                }
                if (cx, cy) == CENTER {
                    covers_center = true;
                }
                tiles.push(Tile::Letter(letter));
            }
        }
        if i + 1 < word.len() {
            match dir.step(cx, cy) {
                Some((nx, ny)) => {
                    cx = nx;
                    cy = ny;
                }
                None => return None,
            }
        }
    }
    if let Some((nx, ny)) = dir.step(cx, cy) {
        if !board.is_empty(nx, ny) {
            return None;
        }
    }

    // a placement must place something
    let (ax, ay) = anchor?;
    if board.center_is_empty() {
        if !covers_center {
            return None;
        }
    } else if !reuses_tile && !has_neighbor {
        return None;
    }

    let mut score = score_placement(board, rules, ax, ay, dir, &tiles);
    if tiles.len() == RACK_CAPACITY {
        // seven new tiles can only have come from a full rack
        score += rules.bingo_bonus();
    }
    Some(Placement {
        x: ax,
        y: ay,
        dir,
        tiles,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BonusGrid;
    use anyhow::Result;

    const STANDARD: [u32; 26] = [
        1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
    ];

    fn plain_rules() -> Ruleset {
        Ruleset::new(STANDARD, BonusGrid::empty(), 50)
    }

    fn board_with_row7(row: &str) -> Board {
        let mut rows = vec![String::from("..............."); N];
        rows[7] = String::from(row);
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_extends_existing_word() -> Result<()> {
        let lexicon = Lexicon::from_words(&["hello", "hellos"]);
        let board = board_with_row7(".....HELLO.....");
        let found = find_placements(&board, &plain_rules(), &lexicon, "hellos");
        let s = found
            .iter()
            .find(|p| p.dir == Direction::Horizontal)
            .expect("the horizontal S extension");
        assert_eq!((s.x, s.y), (10, 7));
        assert_eq!(s.letters(), "S");
        // the whole of HELLOS is scored
        assert_eq!(s.score, 9);
        Ok(())
    }

    #[test]
    fn test_crossing_placements_found() -> Result<()> {
        let lexicon = Lexicon::from_words(&["hello", "hellos"]);
        let board = board_with_row7(".....HELLO.....");
        let found = find_placements(&board, &plain_rules(), &lexicon, "hellos");
        // vertically through H, E, O once each and through either L at
        // both of its alignments, plus the horizontal extension
        assert_eq!(found.len(), 8);
        for p in &found {
            assert_eq!(p.score, 9);
        }
        let vertical = found
            .iter()
            .find(|p| p.dir == Direction::Vertical && p.x == 5)
            .expect("HELLOS down through the H");
        // H is the first letter, so the anchor is the cell below it
        assert_eq!((vertical.x, vertical.y), (5, 8));
        assert_eq!(vertical.letters(), "ELLOS");
        Ok(())
    }

    #[test]
    fn test_boundary_rule() -> Result<()> {
        let lexicon = Lexicon::from_words(&["hell", "hello"]);
        let board = board_with_row7(".....HELLO.....");
        // HELL may not be "placed" inside HELLO: the O follows it
        let found = find_placements(&board, &plain_rules(), &lexicon, "hell");
        assert!(found.iter().all(|p| p.dir != Direction::Horizontal || p.y != 7));
        Ok(())
    }

    #[test]
    fn test_word_must_match_existing_tiles() -> Result<()> {
        let lexicon = Lexicon::from_words(&["hello", "jello"]);
        let board = board_with_row7(".....HELLO.....");
        // JELLO cannot overlay HELLO in place, though it may still
        // cross it vertically through a shared letter
        let found = find_placements(&board, &plain_rules(), &lexicon, "jello");
        assert!(found
            .iter()
            .all(|p| p.dir != Direction::Horizontal || p.y != 7));
        assert!(found.iter().all(|p| p.dir == Direction::Vertical));

        // a word sharing no letter with the board fits nowhere
        let lexicon = Lexicon::from_words(&["hello", "jam"]);
        let found = find_placements(&board, &plain_rules(), &lexicon, "jam");
        assert!(found.is_empty());
        Ok(())
    }

    #[test]
    fn test_cross_words_must_be_legal() -> Result<()> {
        let board = board_with_row7(".....HELLO.....");
        // every position touching HELLO forms an illegal cross-word,
        // and every other position is disconnected
        let lexicon = Lexicon::from_words(&["hello", "we"]);
        let found = find_placements(&board, &plain_rules(), &lexicon, "we");
        assert!(found.is_empty());

        // with EH legal, WE fits above the H: its E at (5,6) makes EH
        let lexicon = Lexicon::from_words(&["hello", "we", "eh"]);
        let found = find_placements(&board, &plain_rules(), &lexicon, "we");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].x, found[0].y), (4, 6));
        assert_eq!(found[0].dir, Direction::Horizontal);
        Ok(())
    }

    #[test]
    fn test_first_move_must_cover_center() -> Result<()> {
        let lexicon = Lexicon::from_words(&["rust"]);
        let board = Board::new();
        let found = find_placements(&board, &plain_rules(), &lexicon, "rust");
        // 4 horizontal + 4 vertical positions cover (7,7)
        assert_eq!(found.len(), 8);
        for p in &found {
            assert_eq!(p.tiles.len(), 4);
        }
        Ok(())
    }

    #[test]
    fn test_unplaceable_word_is_empty_not_error() -> Result<()> {
        let lexicon = Lexicon::from_words(&["hello"]);
        let board = board_with_row7(".....HELLO.....");
        assert!(find_placements(&board, &plain_rules(), &lexicon, "q").is_empty());
        assert!(find_placements(&board, &plain_rules(), &lexicon, "it's").is_empty());
        // QUIZ shares no letter with HELLO and every touching position
        // would form an illegal cross-word
        assert!(find_placements(&board, &plain_rules(), &lexicon, "quiz").is_empty());
        Ok(())
    }

    #[test]
    fn test_bingo_for_seven_new_tiles() -> Result<()> {
        let lexicon = Lexicon::from_words(&["sealant"]);
        let board = Board::new();
        let rules = plain_rules();
        let found = find_placements(&board, &rules, &lexicon, "sealant");
        // 7 horizontal and 7 vertical positions cover the center
        assert_eq!(found.len(), 14);
        for p in &found {
            assert_eq!(p.tiles.len(), RACK_CAPACITY);
            let raw = score_placement(&board, &rules, p.x, p.y, p.dir, &p.tiles);
            assert_eq!(p.score, raw + rules.bingo_bonus());
        }
        Ok(())
    }

    #[test]
    fn test_deduplicated_and_sorted() -> Result<()> {
        let lexicon = Lexicon::from_words(&["oo", "hello"]);
        let board = board_with_row7(".....HELLO.....");
        let found = find_placements(&board, &plain_rules(), &lexicon, "oo");
        let mut keys = HashSet::new();
        for p in &found {
            assert!(keys.insert(p.dedup_key()));
        }
        for pair in found.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        Ok(())
    }
}
