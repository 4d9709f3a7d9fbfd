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

//! Human readable labels for squares, pieces and moves.
//!
//! Squares are labeled with an uppercase file letter and a rank digit, so
//! that index 0 is `A8` and index 63 is `H1`.
//!
//! # Examples
//!
//! ```
//! use fenboard::{
//!     notation::{piece_label, square_label, NotationFlags},
//!     Color, Piece, Role, Square,
//! };
//!
//! assert_eq!(square_label(Square::from_index(0)), "A8");
//! assert_eq!(square_label(Square::from_index(63)), "H1");
//!
//! let knight = Piece::new(Role::Knight, Square::G1, Color::White);
//! assert_eq!(piece_label(knight, NotationFlags::empty()), "Knight");
//! assert_eq!(piece_label(knight, NotationFlags::SIDE), "White Knight");
//! assert_eq!(piece_label(knight, NotationFlags::all()), "White Knight G1");
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::{m::Move, square::Square, types::Piece};

bitflags! {
    /// What to include in a piece label.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct NotationFlags: u8 {
        /// Prefix the side, e.g. `White Pawn`.
        const SIDE = 1;
        /// Suffix the square, e.g. `Pawn E2`.
        const SQUARE = 2;
    }
}

impl Default for NotationFlags {
    fn default() -> NotationFlags {
        NotationFlags::SIDE
    }
}

/// Gets the label of a square, or an empty string for an invalid square.
pub fn square_label(sq: Square) -> String {
    if sq.is_valid() {
        sq.to_string()
    } else {
        String::new()
    }
}

/// Gets the label of a piece.
pub fn piece_label(piece: Piece, flags: NotationFlags) -> String {
    piece.label(flags).to_string()
}

/// Gets the long algebraic label of a move, e.g. `E2-E4`.
pub fn move_label(m: Move) -> String {
    m.to_string()
}

/// Displays a piece according to [`NotationFlags`].
#[derive(Copy, Clone, Debug)]
pub struct PieceLabel {
    piece: Piece,
    flags: NotationFlags,
}

impl Piece {
    /// Gets a [`Display`](fmt::Display) adapter for the label of the piece.
    pub const fn label(self, flags: NotationFlags) -> PieceLabel {
        PieceLabel { piece: self, flags }
    }
}

impl fmt::Display for PieceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.contains(NotationFlags::SIDE) {
            write!(f, "{} ", self.piece.color.name())?;
        }
        f.write_str(self.piece.role.name())?;
        if self.flags.contains(NotationFlags::SQUARE) && self.piece.square.is_valid() {
            write!(f, " {}", self.piece.square)?;
        }
        Ok(())
    }
}

/// Full label with side and square, e.g. `Black Queen D8`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label(NotationFlags::all()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Role};

    #[test]
    fn test_square_label() {
        assert_eq!(square_label(Square::from_index(0)), "A8");
        assert_eq!(square_label(Square::from_index(63)), "H1");
        assert_eq!(square_label(Square::from_index(52)), "E2");
        assert_eq!(square_label(Square::INVALID), "");
    }

    #[test]
    fn test_piece_label() {
        let queen = Piece::new(Role::Queen, Square::D8, Color::Black);
        assert_eq!(piece_label(queen, NotationFlags::default()), "Black Queen");
        assert_eq!(piece_label(queen, NotationFlags::SQUARE), "Queen D8");
        assert_eq!(queen.to_string(), "Black Queen D8");

        let lost = Piece::new(Role::Pawn, Square::INVALID, Color::White);
        assert_eq!(lost.to_string(), "White Pawn");
    }

    #[test]
    fn test_move_label() {
        assert_eq!(move_label(Move::new(Square::G1, Square::F3)), "G1-F3");
    }
}
