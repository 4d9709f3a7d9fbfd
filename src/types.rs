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

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Role`], [`Color`] and the [`Square`] it stands on.
///
/// Pieces are plain values. A piece may carry [`Square::INVALID`], but such
/// a piece is never placed on a board.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub const fn new(role: Role, square: Square, color: Color) -> Piece {
        Piece {
            role,
            color,
            square,
        }
    }

    /// Gets the FEN letter, uppercase for white.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::{Color, Piece, Role, Square};
    ///
    /// assert_eq!(Piece::new(Role::Knight, Square::G1, Color::White).char(), 'N');
    /// assert_eq!(Piece::new(Role::Queen, Square::D8, Color::Black).char(), 'q');
    /// ```
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Gets the piece for a FEN letter: case gives the color, the letter
    /// gives the role.
    pub const fn from_char(ch: char, square: Square) -> Option<Piece> {
        match Role::from_char(ch) {
            Some(role) => Some(Piece::new(
                role,
                square,
                Color::from_white(ch.is_ascii_uppercase()),
            )),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(
            Piece::from_char('K', Square::E1),
            Some(Piece::new(Role::King, Square::E1, Color::White))
        );
        assert_eq!(
            Piece::from_char('p', Square::E7),
            Some(Piece::new(Role::Pawn, Square::E7, Color::Black))
        );
        assert_eq!(Piece::from_char('x', Square::E7), None);
    }
}
