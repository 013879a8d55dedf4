use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use thiserror::Error;

/// One of the 64 board cells.
///
/// Stored as `8 * rank + file` with rank and file both zero-based, so `a1` is
/// 0 and `h8` is 63. The grid used for rendering and click handling is
/// row-major from the top of the board: row 0 is rank 8, column 0 is file a.
///
/// ```
/// # use chessboard_core::Square;
/// let e4 = Square::from_coords(4, 4);
/// assert_eq!(e4.to_string(), "e4");
/// assert_eq!(e4.coords(), (4, 4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

impl Square {
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank >= 8 || file >= 8 {
            None
        } else {
            Some(Self(8 * rank + file))
        }
    }

    pub const fn new_unchecked(rank: u8, file: u8) -> Self {
        Self(rank.overflowing_mul(8).0.overflowing_add(file).0 % 64)
    }

    pub const fn from_index_unchecked(index: usize) -> Self {
        Self((index % 64) as _)
    }

    /// Maps a grid coordinate to a square. Row and column are taken modulo 8;
    /// callers iterate a fixed 8x8 grid so they never leave that range.
    pub const fn from_coords(row: usize, col: usize) -> Self {
        Self::new_unchecked(7 - (row % 8) as u8, (col % 8) as u8)
    }

    /// Inverse of [`Square::from_coords`], as `(row, col)`.
    pub const fn coords(self) -> (usize, usize) {
        (7 - self.rank() as usize, self.file() as usize)
    }

    pub const fn index(self) -> usize {
        self.0 as _
    }

    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).map(Self)
    }
}

/// Maps a position in the drawn grid to the canonical `(row, col)` it shows.
///
/// Flipping only reverses the order in which canonical coordinates are
/// visited; it is its own inverse.
pub const fn visual_to_canonical(flipped: bool, row: usize, col: usize) -> (usize, usize) {
    if flipped {
        (7 - row, 7 - col)
    } else {
        (row, col)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((self.file() + b'a') as _)?;
        f.write_char((self.rank() + b'1') as _)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid square {0:?}")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());

        let mut char_iter = s.chars();
        let file = char_iter.next().ok_or_else(err)?;
        let rank = char_iter.next().ok_or_else(err)?;
        if char_iter.next().is_some() {
            return Err(err());
        }

        let rank = (rank as i32) - ('1' as i32);
        let file = (file as i32) - ('a' as i32);
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Ok(Square::new_unchecked(rank as _, file as _))
        } else {
            Err(err())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn corners_map_to_expected_squares() {
        assert_eq!(Square::from_coords(0, 0).to_string(), "a8");
        assert_eq!(Square::from_coords(0, 7).to_string(), "h8");
        assert_eq!(Square::from_coords(7, 0).to_string(), "a1");
        assert_eq!(Square::from_coords(7, 7).to_string(), "h1");
        assert_eq!(Square::from_coords(6, 4).to_string(), "e2");
    }

    #[test]
    fn coords_is_inverse_of_from_coords() {
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(Square::from_coords(row, col).coords(), (row, col));
            }
        }

        for square in Square::all() {
            let (row, col) = square.coords();
            assert_eq!(Square::from_coords(row, col), square);
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("e4".parse(), Ok(Square::new_unchecked(3, 4)));
        assert_eq!("a1".parse(), Ok(Square::new_unchecked(0, 0)));
        assert_eq!("h8".parse(), Ok(Square::new_unchecked(7, 7)));
        assert_eq!(Square::new_unchecked(6, 2).to_string(), "c7");
    }

    #[test]
    fn parse_invalid_cases() {
        assert_eq!(Square::from_str(""), Err(ParseSquareError("".to_string())));
        assert_eq!(
            Square::from_str("i1"),
            Err(ParseSquareError("i1".to_string()))
        );
        assert_eq!(
            Square::from_str("a9"),
            Err(ParseSquareError("a9".to_string()))
        );
        assert_eq!(
            Square::from_str("e44"),
            Err(ParseSquareError("e44".to_string()))
        );
    }

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(visual_to_canonical(false, 2, 5), (2, 5));
        assert_eq!(visual_to_canonical(true, 0, 0), (7, 7));

        for row in 0..8 {
            for col in 0..8 {
                let (r, c) = visual_to_canonical(true, row, col);
                assert_eq!(visual_to_canonical(true, r, c), (row, col));
            }
        }
    }
}
