use crate::error::Error;
use crate::letterset::LetterSet;
use crate::tiles::{Letter, Tile, ALPHABET};
use std::convert::TryFrom;
use std::fmt;

/// A rack holds at most 7 tiles.
pub const RACK_CAPACITY: usize = 7;

/// The tiles a player holds, as a multiset: a counter per letter plus a
/// blank counter.
///
/// The engine never mutates a caller's rack; a search works on its own
/// copy, consuming tiles with [`take`](Rack::take) and restoring them with
/// [`put_back`](Rack::put_back) while unwinding.
///
/// ## Examples
/// ```
/// # use std::convert::TryFrom;
/// # use gridplay::{Rack, Error};
/// let rack = Rack::try_from("cat*s")?;
/// assert_eq!(rack.len(), 5);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    counts: [u8; ALPHABET],
    blanks: u8,
    len: u8,
}

impl Rack {
    /// An empty rack.
    pub fn new() -> Rack {
        Rack::default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The set of letters this rack can produce: every counted letter,
    /// or the whole alphabet when a blank is held.
    pub fn producible(&self) -> LetterSet {
        if self.blanks > 0 {
            return LetterSet::full();
        }
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(i, &count)| {
                if count > 0 {
                    Letter::from_index(i as u8)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Consume one tile that can play as `letter`, preferring a regular
    /// tile over a blank. Returns the consumed tile, or None if the rack
    /// cannot produce `letter`.
    pub fn take(&mut self, letter: Letter) -> Option<Tile> {
        if self.counts[letter.index()] > 0 {
            self.counts[letter.index()] -= 1;
            self.len -= 1;
            Some(Tile::Letter(letter))
        } else if self.blanks > 0 {
            self.blanks -= 1;
            self.len -= 1;
            Some(Tile::Blank(letter))
        } else {
            None
        }
    }

    /// Return a tile previously consumed with [`take`](Rack::take).
    pub fn put_back(&mut self, tile: Tile) {
        match tile {
            Tile::Letter(letter) => self.counts[letter.index()] += 1,
            Tile::Blank(_) => self.blanks += 1,
        }
        self.len += 1;
    }
}

/// Parse a rack from a string: `a`..`z` (either case) counts as that
/// letter, `*` as a blank. Any other character is treated as a blank.
impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.chars().count() > RACK_CAPACITY {
            return Err(Error::RackTooLarge(s.chars().count()));
        }
        let mut rack = Rack::new();
        for c in s.chars() {
            match Letter::from_char(c) {
                Some(letter) => rack.counts[letter.index()] += 1,
                None => rack.blanks += 1,
            }
            rack.len += 1;
        }
        Ok(rack)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in Letter::alphabet() {
            for _ in 0..self.counts[letter.index()] {
                write!(f, "{}", letter.as_char().to_ascii_lowercase())?;
            }
        }
        for _ in 0..self.blanks {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_parse() {
        let rack = Rack::try_from("AbC*").unwrap();
        assert_eq!(rack.len(), 4);
        assert_eq!(rack.to_string(), "abc*");
    }

    #[test]
    fn test_too_large() {
        assert!(Rack::try_from("abcdefgh").is_err());
    }

    #[test]
    fn test_unknown_char_is_blank() {
        let rack = Rack::try_from("a?").unwrap();
        assert_eq!(rack.to_string(), "a*");
    }

    #[test]
    fn test_take_prefers_letter_over_blank() {
        let mut rack = Rack::try_from("e*").unwrap();
        assert_eq!(rack.take(letter('e')), Some(Tile::Letter(letter('e'))));
        // only the blank is left now
        assert_eq!(rack.take(letter('e')), Some(Tile::Blank(letter('e'))));
        assert_eq!(rack.take(letter('e')), None);
        assert!(rack.is_empty());
    }

    #[test]
    fn test_put_back_restores() {
        let rack = Rack::try_from("qi*").unwrap();
        let mut work = rack.clone();
        let q = work.take(letter('q')).unwrap();
        let z = work.take(letter('z')).unwrap();
        assert!(z.is_blank());
        work.put_back(z);
        work.put_back(q);
        assert_eq!(work, rack);
    }

    #[test]
    fn test_producible() {
        let rack = Rack::try_from("qi").unwrap();
        assert_eq!(rack.producible().len(), 2);
        let rack = Rack::try_from("qi*").unwrap();
        assert_eq!(rack.producible(), LetterSet::full());
    }
}
