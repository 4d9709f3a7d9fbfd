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

//! Sets of squares.

use std::{
    fmt::{self, Write as _},
    iter::FusedIterator,
    ops,
};

use crate::square::Square;

/// A set of [squares](Square) represented by a 64 bit integer mask.
///
/// Bit `i` corresponds to the square with index `i`, so the least
/// significant bit is [`Square::A8`].
///
/// # Examples
///
/// ```
/// use fenboard::{Bitboard, Square};
///
/// let mask = Bitboard::from(Square::A8) | Bitboard::from(Square::H1);
/// assert_eq!(mask, Bitboard(0x8000_0000_0000_0001));
/// assert_eq!(mask.count(), 2);
/// assert!(mask.contains(Square::H1));
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    /// Gets the set containing only `sq`, or the empty set for an invalid
    /// square.
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        match sq.index() {
            Some(index) => Bitboard(1 << index),
            None => Bitboard::EMPTY,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tests if `sq` is in the set. Always false for an invalid square.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Bitboard::from_square(sq).0 != 0
    }

    /// Adds `sq` to the set. Has no effect for an invalid square.
    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= Bitboard::from_square(sq).0;
    }

    /// Removes `sq` from the set, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> bool {
        let present = self.contains(sq);
        self.0 &= !Bitboard::from_square(sq).0;
        present
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Gets the square with the lowest index.
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::checked_from_index(self.0.trailing_zeros() as i32)
        }
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = Bitboard::EMPTY;
        for sq in iter {
            result.add(sq);
        }
        result
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::ALL {
            f.write_char(if self.contains(sq) { '1' } else { '.' })?;
            f.write_char(if sq.x() == Some(7) { '\n' } else { ' ' })?;
        }
        Ok(())
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

/// Iterator over the squares of a [`Bitboard`], in index order.
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.0.first();
        self.0 .0 &= self.0 .0.wrapping_sub(1);
        sq
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(Bitboard::from(Square::A8).first(), Some(Square::A8));
        assert_eq!(Bitboard::from(Square::D2).first(), Some(Square::D2));
        assert_eq!(Bitboard::EMPTY.first(), None);
    }

    #[test]
    fn test_invalid_square() {
        let mut bb = Bitboard::EMPTY;
        bb.add(Square::INVALID);
        assert!(bb.is_empty());
        assert!(!Bitboard::FULL.contains(Square::INVALID));
        assert!(!bb.remove(Square::INVALID));
    }

    #[test]
    fn test_add_remove() {
        let mut bb = Bitboard::EMPTY;
        bb.add(Square::E2);
        assert!(bb.contains(Square::E2));
        assert!(bb.remove(Square::E2));
        assert!(!bb.remove(Square::E2));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter() {
        let bb: Bitboard = [Square::H1, Square::A8, Square::E4].into_iter().collect();
        assert_eq!(bb.into_iter().len(), 3);
        assert_eq!(
            bb.into_iter().collect::<Vec<_>>(),
            [Square::A8, Square::E4, Square::H1]
        );
    }
}
