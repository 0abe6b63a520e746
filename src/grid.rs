use crate::board::N;
use crate::error::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

const Q: usize = 1 + N / 2;

/// Quarter of the classic premium layout; the full grid is its mirror
/// image in both axes. The `ss` cell is the start square at (7,7).
const STANDARD_QUARTER: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// The bonus kind of a single square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Premium {
    Normal,
    /// The start square. The first word must cover it; it doubles the
    /// word played over it.
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Premium::{LetterBonus, Normal, Start, WordBonus};

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Normal => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Normal),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Premium; N]; N];

/// The 15x15 layout of premium squares.
///
/// Word and letter multipliers only ever apply to newly placed tiles; a
/// square's bonus is spent once the square is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusGrid(Inner);

impl Deref for BonusGrid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for BonusGrid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for BonusGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for BonusGrid {
    fn default() -> Self {
        BonusGrid::standard()
    }
}

impl BonusGrid {
    /// A grid with no premium squares at all.
    pub fn empty() -> BonusGrid {
        BonusGrid([[Normal; N]; N])
    }

    /// The classic premium layout, expanded by mirroring the quarter
    /// layout horizontally and vertically.
    pub fn standard() -> BonusGrid {
        let mut grid = BonusGrid::empty();
        for (y, row) in STANDARD_QUARTER.iter().enumerate() {
            let row: Vec<&str> = row.split(' ').collect();
            debug_assert!(row.len() == Q);
            for (x, cell) in row.iter().enumerate() {
                // the unwrap is safe: the quarter layout is a constant
                let premium = cell.parse().unwrap();
                grid[y][x] = premium;
                grid[N - y - 1][x] = premium;
                grid[y][N - x - 1] = premium;
                grid[N - y - 1][N - x - 1] = premium;
            }
        }
        grid
    }

    /// Build a grid from four sets of flat cell indices, one per bonus
    /// kind, using the `index = y * 15 + x` convention.
    ///
    /// ## Errors
    /// If an index is outside the board, or the sets are not disjoint.
    ///
    /// ## Examples
    /// ```
    /// # use gridplay::{BonusGrid, Premium, Error};
    /// // a double word square on the center only
    /// let grid = BonusGrid::from_bonus_indices(&[], &[112], &[], &[])?;
    /// assert_eq!(grid[7][7], Premium::WordBonus(2));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_bonus_indices(
        tw: &[usize],
        dw: &[usize],
        tl: &[usize],
        dl: &[usize],
    ) -> Result<BonusGrid, Error> {
        let mut grid = BonusGrid::empty();
        let kinds = [
            (tw, WordBonus(3)),
            (dw, WordBonus(2)),
            (tl, LetterBonus(3)),
            (dl, LetterBonus(2)),
        ];
        for (indices, premium) in &kinds {
            for &index in *indices {
                if index >= N * N {
                    return Err(Error::InvalidCellIndex(index));
                }
                let (x, y) = (index % N, index / N);
                if grid[y][x] != Normal {
                    return Err(Error::OverlappingBonus(index));
                }
                grid[y][x] = *premium;
            }
        }
        Ok(grid)
    }

    /// Parse a grid from 15 strings of 15 space-separated cells.
    ///
    /// ## Errors
    /// If the strings have wrong dimensions or a cell can not be parsed.
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<BonusGrid, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut grid = BonusGrid::empty();
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split(' ').collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (x, cell) in cells.iter().enumerate() {
                grid[y][x] = cell.parse()?;
            }
        }
        Ok(grid)
    }

    /// The grid as 15 strings of 15 space-separated cells.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roundtrip() -> Result<(), Error> {
        let grid = BonusGrid::standard();
        let strings = grid.to_strings();
        assert_eq!(BonusGrid::from_strings(&strings)?, grid);
        Ok(())
    }

    #[test]
    fn test_standard_cells() {
        let grid = BonusGrid::standard();
        assert_eq!(grid[7][7], Start);
        assert_eq!(grid[0][0], WordBonus(3));
        assert_eq!(grid[0][14], WordBonus(3));
        assert_eq!(grid[14][14], WordBonus(3));
        assert_eq!(grid[5][1], LetterBonus(3));
        assert_eq!(grid[7][3], LetterBonus(2));
        assert_eq!(grid[13][13], WordBonus(2));
        assert_eq!(grid[7][6], Normal);
    }

    #[test]
    fn test_overlap_rejected() {
        let result = BonusGrid::from_bonus_indices(&[0], &[0], &[], &[]);
        assert!(matches!(result, Err(Error::OverlappingBonus(0))));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = BonusGrid::from_bonus_indices(&[], &[], &[225], &[]);
        assert!(matches!(result, Err(Error::InvalidCellIndex(225))));
    }
}
