// This file is part of the fenboard library.
// Copyright (C) 2024 The fenboard developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

use crate::util::overflow_error;

/// A square of the chessboard, encoded as a single index.
///
/// The index is `x + y * 8`, where `x` is the file (`A` is 0) and `y` is the
/// row counted from the top of the board, so that [`Square::A8`] is 0 and
/// [`Square::H1`] is 63. This is the order in which FEN lists squares.
///
/// Out of range constructions do not fail. They yield the canonical
/// [`Square::INVALID`], which compares unequal to every valid square and is
/// never present on a board.
///
/// # Examples
///
/// ```
/// use fenboard::Square;
///
/// assert_eq!(Square::from_axes(4, 6), Square::E2);
/// assert_eq!(Square::from_index(36), Square::E4);
///
/// assert!(!Square::from_axes(8, 0).is_valid());
/// assert_eq!(Square::from_axes(-1, 3), Square::from_index(64));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

macro_rules! square_consts {
    ($($name:ident = $index:expr,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

square_consts! {
    A8 = 0,
    B8 = 1,
    C8 = 2,
    D8 = 3,
    E8 = 4,
    F8 = 5,
    G8 = 6,
    H8 = 7,
    A7 = 8,
    B7 = 9,
    C7 = 10,
    D7 = 11,
    E7 = 12,
    F7 = 13,
    G7 = 14,
    H7 = 15,
    A6 = 16,
    B6 = 17,
    C6 = 18,
    D6 = 19,
    E6 = 20,
    F6 = 21,
    G6 = 22,
    H6 = 23,
    A5 = 24,
    B5 = 25,
    C5 = 26,
    D5 = 27,
    E5 = 28,
    F5 = 29,
    G5 = 30,
    H5 = 31,
    A4 = 32,
    B4 = 33,
    C4 = 34,
    D4 = 35,
    E4 = 36,
    F4 = 37,
    G4 = 38,
    H4 = 39,
    A3 = 40,
    B3 = 41,
    C3 = 42,
    D3 = 43,
    E3 = 44,
    F3 = 45,
    G3 = 46,
    H3 = 47,
    A2 = 48,
    B2 = 49,
    C2 = 50,
    D2 = 51,
    E2 = 52,
    F2 = 53,
    G2 = 54,
    H2 = 55,
    A1 = 56,
    B1 = 57,
    C1 = 58,
    D1 = 59,
    E1 = 60,
    F1 = 61,
    G1 = 62,
    H1 = 63,
}

impl Square {
    /// The canonical invalid square.
    pub const INVALID: Square = Square(64);

    /// All 64 valid squares, from [`Square::A8`] to [`Square::H1`].
    pub const ALL: [Square; 64] = {
        let mut all = [Square::INVALID; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };

    /// Gets the square at file `x` and row `y` (row 0 is rank 8), or
    /// [`Square::INVALID`] if either axis is outside `0..=7`.
    #[inline]
    pub const fn from_axes(x: i32, y: i32) -> Square {
        match Square::checked_from_axes(x, y) {
            Some(sq) => sq,
            None => Square::INVALID,
        }
    }

    /// Gets the square with the given index, or [`Square::INVALID`] if the
    /// index is outside `0..=63`.
    #[inline]
    pub const fn from_index(index: i32) -> Square {
        match Square::checked_from_index(index) {
            Some(sq) => sq,
            None => Square::INVALID,
        }
    }

    #[inline]
    pub const fn checked_from_axes(x: i32, y: i32) -> Option<Square> {
        if 0 <= x && x < 8 && 0 <= y && y < 8 {
            Some(Square((x + y * 8) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn checked_from_index(index: i32) -> Option<Square> {
        if 0 <= index && index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Gets the index in `0..=63`, or `None` for the invalid square.
    #[inline]
    pub const fn index(self) -> Option<u8> {
        if self.is_valid() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Gets the file, with `A` as 0.
    #[inline]
    pub const fn x(self) -> Option<u8> {
        if self.is_valid() {
            Some(self.0 % 8)
        } else {
            None
        }
    }

    /// Gets the row, with rank 8 as 0.
    #[inline]
    pub const fn y(self) -> Option<u8> {
        if self.is_valid() {
            Some(self.0 / 8)
        } else {
            None
        }
    }

    /// Gets the file letter, `'A'` to `'H'`.
    pub const fn file_char(self) -> Option<char> {
        match self.x() {
            Some(x) => Some((b'A' + x) as char),
            None => None,
        }
    }

    /// Gets the rank digit, `'1'` to `'8'`.
    pub const fn rank_char(self) -> Option<char> {
        match self.y() {
            Some(y) => Some((b'8' - y) as char),
            None => None,
        }
    }

    /// Parses a square name like `e4` or `E4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a file letter
    /// followed by a rank digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::Square;
    ///
    /// assert_eq!(Square::from_ascii(b"e4"), Ok(Square::E4));
    /// assert_eq!(Square::from_ascii(b"H1"), Ok(Square::H1));
    /// assert!(Square::from_ascii(b"i9").is_err());
    /// ```
    pub const fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        if s.len() != 2 {
            return Err(ParseSquareError);
        }
        let file = s[0].to_ascii_lowercase();
        let rank = s[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return Err(ParseSquareError);
        }
        Ok(Square::from_axes((file - b'a') as i32, (b'8' - rank) as i32))
    }
}

impl Default for Square {
    fn default() -> Square {
        Square::INVALID
    }
}

macro_rules! try_square_from_int_impl {
    ($($t:ty)+) => {
        $(impl TryFrom<$t> for Square {
            type Error = std::num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Square, Self::Error> {
                let index = i32::try_from(value)?;
                Square::checked_from_index(index).ok_or_else(overflow_error)
            }
        })+
    }
}

try_square_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file_char(), self.rank_char()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => f.write_str("-"),
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            fmt::Display::fmt(self, f)
        } else {
            f.write_str("INVALID")
        }
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        // One extra value so that fuzzers also reach the invalid square.
        Ok(Square::from_index(u.int_in_range(0..=64)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        for y in 0..8 {
            for x in 0..8 {
                let sq = Square::from_axes(x, y);
                assert!(sq.is_valid());
                assert_eq!(sq.x(), Some(x as u8));
                assert_eq!(sq.y(), Some(y as u8));
                assert_eq!(sq, Square::from_index(x + y * 8));
            }
        }
    }

    #[test]
    fn test_invalid_is_canonical() {
        let invalid = [
            Square::from_axes(-1, 0),
            Square::from_axes(0, 8),
            Square::from_axes(100, -100),
            Square::from_index(-1),
            Square::from_index(64),
            Square::from_index(255),
        ];
        for sq in invalid {
            assert!(!sq.is_valid());
            assert_eq!(sq, Square::INVALID);
            assert_eq!(sq.index(), None);
            assert!(Square::ALL.iter().all(|&valid| valid != sq));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Square::A8.to_string(), "A8");
        assert_eq!(Square::H1.to_string(), "H1");
        assert_eq!(Square::from_index(52).to_string(), "E2");
        assert_eq!(Square::INVALID.to_string(), "-");
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!("e2".parse::<Square>(), Ok(Square::E2));
        assert_eq!("A8".parse::<Square>(), Ok(Square::A8));
        assert_eq!(Square::E2.index(), Some(52));
        assert_eq!(Square::E4.index(), Some(36));
        assert_eq!("e".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e0".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e44".parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(Square::try_from(63u8), Ok(Square::H1));
        assert!(Square::try_from(64u32).is_err());
        assert!(Square::try_from(-1i8).is_err());
    }
}
