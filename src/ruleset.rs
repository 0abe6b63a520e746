use crate::grid::{BonusGrid, Premium};
use crate::tiles::{Letter, Tile, ALPHABET};

/// English letter values, indexed by letter.
const STANDARD_VALUES: [u32; ALPHABET] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

const STANDARD_BINGO: u32 = 50;

/// The immutable scoring parameters of a game: the value of each letter,
/// the premium square layout, and the bonus for playing a full rack.
///
/// A `Ruleset` is a plain value, threaded through every query; it is
/// never global state. It can be shared freely between concurrent
/// queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    values: [u32; ALPHABET],
    grid: BonusGrid,
    bingo_bonus: u32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::standard()
    }
}

impl Ruleset {
    pub fn new(values: [u32; ALPHABET], grid: BonusGrid, bingo_bonus: u32) -> Ruleset {
        Ruleset {
            values,
            grid,
            bingo_bonus,
        }
    }

    /// English letter values, the classic premium layout and a 50 point
    /// bingo bonus.
    pub fn standard() -> Ruleset {
        Ruleset::new(STANDARD_VALUES, BonusGrid::standard(), STANDARD_BINGO)
    }

    /// The point value of a letter.
    pub fn letter_value(&self, letter: Letter) -> u32 {
        self.values[letter.index()]
    }

    /// The point value of a tile on the board: a blank is worth 0 no
    /// matter which letter it plays as.
    pub fn tile_value(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(letter) => self.letter_value(letter),
            Tile::Blank(_) => 0,
        }
    }

    /// The premium kind of the square at (x, y).
    pub fn premium(&self, x: usize, y: usize) -> Premium {
        self.grid[y][x]
    }

    pub fn is_triple_word(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::WordBonus(3)
    }

    pub fn is_double_word(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::WordBonus(2)
    }

    pub fn is_triple_letter(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::LetterBonus(3)
    }

    pub fn is_double_letter(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::LetterBonus(2)
    }

    /// The bonus for playing all 7 tiles of a full rack in one move.
    pub fn bingo_bonus(&self) -> u32 {
        self.bingo_bonus
    }

    pub fn grid(&self) -> &BonusGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_letter_values() {
        let rules = Ruleset::standard();
        assert_eq!(rules.letter_value(letter('a')), 1);
        assert_eq!(rules.letter_value(letter('q')), 10);
        assert_eq!(rules.letter_value(letter('z')), 10);
        assert_eq!(rules.letter_value(letter('d')), 2);
    }

    #[test]
    fn test_blank_is_worthless() {
        let rules = Ruleset::standard();
        assert_eq!(rules.tile_value(Tile::Blank(letter('q'))), 0);
        assert_eq!(rules.tile_value(Tile::Letter(letter('q'))), 10);
    }

    #[test]
    fn test_premium_queries() {
        let rules = Ruleset::standard();
        assert!(rules.is_triple_word(0, 0));
        assert!(rules.is_double_word(1, 1));
        assert!(rules.is_triple_letter(5, 1));
        assert!(rules.is_double_letter(3, 0));
        assert!(!rules.is_double_word(7, 7)); // start square, not 2w
        assert_eq!(rules.bingo_bonus(), 50);
    }
}
