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

//! Piece placement.

use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{
    bitboard::Bitboard,
    color::{ByColor, Color},
    role::{ByRole, Role},
    square::Square,
    types::Piece,
};

/// All pieces of a board. There can never be more than one piece per square.
pub type PieceList = ArrayVec<Piece, 64>;

/// Piece placement for both sides.
///
/// Each side keeps one presence set per [`Role`]. No square is ever in more
/// than one of the twelve sets. The public mutators keep it that way: placing
/// a piece first clears whatever stood on the square.
///
/// # Examples
///
/// ```
/// use fenboard::{Board, Color, Role, Square};
///
/// let board = Board::new();
/// assert_eq!(board.role_at(Square::E2), Some(Role::Pawn));
/// assert_eq!(board.color_at(Square::E8), Some(Color::Black));
/// assert_eq!(board.role_at(Square::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    by_color: ByColor<ByRole<Bitboard>>,
}

impl Board {
    /// The standard starting placement.
    pub const fn new() -> Board {
        Board {
            by_color: ByColor {
                white: ByRole {
                    pawn: Bitboard(0x00ff_0000_0000_0000),
                    knight: Bitboard(0x4200_0000_0000_0000),
                    bishop: Bitboard(0x2400_0000_0000_0000),
                    rook: Bitboard(0x8100_0000_0000_0000),
                    queen: Bitboard(0x0800_0000_0000_0000),
                    king: Bitboard(0x1000_0000_0000_0000),
                },
                black: ByRole {
                    pawn: Bitboard(0xff00),
                    knight: Bitboard(0x42),
                    bishop: Bitboard(0x24),
                    rook: Bitboard(0x81),
                    queen: Bitboard(0x08),
                    king: Bitboard(0x10),
                },
            },
        }
    }

    pub const fn empty() -> Board {
        Board {
            by_color: ByColor {
                white: ByRole {
                    pawn: Bitboard::EMPTY,
                    knight: Bitboard::EMPTY,
                    bishop: Bitboard::EMPTY,
                    rook: Bitboard::EMPTY,
                    queen: Bitboard::EMPTY,
                    king: Bitboard::EMPTY,
                },
                black: ByRole {
                    pawn: Bitboard::EMPTY,
                    knight: Bitboard::EMPTY,
                    bishop: Bitboard::EMPTY,
                    rook: Bitboard::EMPTY,
                    queen: Bitboard::EMPTY,
                    king: Bitboard::EMPTY,
                },
            },
        }
    }

    /// Gets the presence set of one kind of piece of one side.
    #[inline]
    pub const fn by_piece(&self, color: Color, role: Role) -> Bitboard {
        *self.by_color.get(color).get(role)
    }

    /// Gets all squares occupied by one side.
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.by_color
            .get(color)
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Gets all squares occupied by either side.
    pub fn occupied(&self) -> Bitboard {
        self.by_color(Color::White) | self.by_color(Color::Black)
    }

    /// Gets the kind of the piece `color` has on `sq`, scanning only that
    /// side's presence sets.
    #[inline]
    pub fn role_of(&self, color: Color, sq: Square) -> Option<Role> {
        self.by_color.get(color).find(|bb| bb.contains(sq))
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.by_color.find(|by_role| by_role.iter().any(|bb| bb.contains(sq)))
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    /// Gets the piece on `sq`, or `None` for an empty or invalid square.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.role_of(color, sq)
                .map(|role| Piece::new(role, sq, color))
        })
    }

    /// Places a piece, replacing anything on its square. Returns `false`
    /// without changes if the piece has an invalid square.
    pub fn set_piece(&mut self, piece: Piece) -> bool {
        if !piece.square.is_valid() {
            return false;
        }
        self.remove_piece_at(piece.square);
        self.by_color
            .get_mut(piece.color)
            .get_mut(piece.role)
            .add(piece.square);
        true
    }

    /// Removes and returns the piece on `sq`, if any.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        if let Some(piece) = piece {
            self.by_color
                .get_mut(piece.color)
                .get_mut(piece.role)
                .remove(sq);
        }
        piece
    }

    /// Clears `sq` from every presence set of `color`. Returns the piece
    /// that was removed.
    pub(crate) fn discard(&mut self, color: Color, sq: Square) -> Option<Piece> {
        let mut removed = None;
        for (role, bb) in self.by_color.get_mut(color).zip_role_mut() {
            if bb.remove(sq) && removed.is_none() {
                removed = Some(Piece::new(role, sq, color));
            }
        }
        removed
    }

    /// Moves a piece of a known role between two squares. The caller makes
    /// sure `to` is clear of pieces of every other set.
    pub(crate) fn relocate(&mut self, color: Color, role: Role, from: Square, to: Square) {
        let bb = self.by_color.get_mut(color).get_mut(role);
        bb.remove(from);
        bb.add(to);
        debug_assert!(self.conflicts().is_empty(), "relocate onto occupied square");
    }

    /// Gets every piece on the board. The order is unspecified.
    pub fn pieces(&self) -> PieceList {
        let mut pieces = PieceList::new();
        for (color, by_role) in self.by_color.zip_color() {
            for (role, bb) in by_role.zip_role() {
                for sq in bb {
                    pieces.push(Piece::new(role, sq, color));
                }
            }
        }
        pieces
    }

    /// Gets squares that are claimed by more than one presence set.
    ///
    /// Always empty for boards built through the public API.
    pub fn conflicts(&self) -> Bitboard {
        let mut seen = Bitboard::EMPTY;
        let mut conflicts = Bitboard::EMPTY;
        for by_role in self.by_color.iter() {
            for &bb in by_role.iter() {
                conflicts |= seen & bb;
                seen |= bb;
            }
        }
        conflicts
    }

    /// Gets the piece placement part of a FEN, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(15);
        for y in 0..8 {
            let mut empty = 0u8;
            for x in 0..8 {
                match self.piece_at(Square::from_axes(x, y)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if y < 7 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::ALL {
            f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
            f.write_char(if sq.x() == Some(7) { '\n' } else { ' ' })?;
        }
        Ok(())
    }
}
