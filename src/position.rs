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

use std::{error::Error, fmt};

use tracing::{debug, warn};

use crate::{
    bitboard::Bitboard,
    board::{Board, PieceList},
    color::Color,
    fen::{Fen, FenWarning},
    m::Move,
    role::Role,
    square::Square,
    types::Piece,
};

/// What may stand on the destination square of a legal move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum CaptureRule {
    /// The destination must be empty. Captures are impossible.
    #[default]
    Forbidden,
    /// The destination must not hold a piece of the side to move. An enemy
    /// piece there is captured.
    Enemy,
}

/// Reason why a move was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum IllegalMove {
    /// The move has an invalid origin or destination square.
    InvalidSquare,
    /// The side to move has no piece on the origin square.
    NoPieceToMove,
    /// A piece stands on the destination square.
    DestinationOccupied,
    /// A piece of the side to move stands on the destination square.
    OwnPieceAtDestination,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalMove::InvalidSquare => "move has an invalid square",
            IllegalMove::NoPieceToMove => "no piece of the side to move on origin square",
            IllegalMove::DestinationOccupied => "destination square is occupied",
            IllegalMove::OwnPieceAtDestination => "destination square holds own piece",
        })
    }
}

impl Error for IllegalMove {}

/// A position: piece placement and the side to move.
///
/// The position is the only mutable state. It changes only by playing
/// legal moves, which flips the side to move exactly once each.
///
/// # Examples
///
/// ```
/// use fenboard::{Move, Position, Role, Square};
///
/// let mut pos = Position::new();
/// assert!(pos.white_to_move());
///
/// let e4 = Move::new(Square::E2, Square::E4);
/// assert!(pos.is_legal_move(e4));
/// assert!(pos.make_move(e4));
///
/// assert_eq!(pos.piece_kind_at(Square::E2), None);
/// assert_eq!(pos.piece_kind_at(Square::E4), Some(Role::Pawn));
/// assert!(pos.black_to_move());
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    board: Board,
    turn: Color,
    capture_rule: CaptureRule,
}

impl Position {
    /// The standard starting position, white to move.
    pub const fn new() -> Position {
        Position::from_board(Board::new(), Color::White)
    }

    pub const fn from_board(board: Board, turn: Color) -> Position {
        Position {
            board,
            turn,
            capture_rule: CaptureRule::Forbidden,
        }
    }

    /// Builds a position from a FEN, never failing.
    ///
    /// Malformed tokens are skipped and logged. Use
    /// [`Position::from_fen_with_warnings()`] to inspect them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::{Position, Square};
    ///
    /// let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    /// assert!(pos.black_to_move());
    /// assert_eq!(pos.all_pieces().len(), 2);
    /// assert!(pos.piece_at(Square::E8).is_some());
    /// ```
    pub fn from_fen(fen: &str) -> Position {
        let (pos, warnings) = Position::from_fen_with_warnings(fen);
        for warning in &warnings {
            warn!(%warning, fen, "ignored malformed fen token");
        }
        pos
    }

    /// Builds a position from a FEN, also returning diagnostics for every
    /// malformed token that was skipped.
    pub fn from_fen_with_warnings(fen: &str) -> (Position, Vec<FenWarning>) {
        let (fen, warnings) = Fen::from_ascii_lossy(fen.as_bytes());
        let pos = fen.into_position();
        debug!(
            pieces = pos.board.occupied().count(),
            turn = %pos.turn,
            warnings = warnings.len(),
            "parsed position"
        );
        (pos, warnings)
    }

    /// Sets what may stand on the destination square of a legal move.
    ///
    /// The default, [`CaptureRule::Forbidden`], rejects every occupied
    /// destination.
    #[must_use]
    pub const fn with_capture_rule(mut self, capture_rule: CaptureRule) -> Position {
        self.capture_rule = capture_rule;
        self
    }

    #[inline]
    pub const fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the side to move.
    #[inline]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub const fn white_to_move(&self) -> bool {
        self.turn.is_white()
    }

    #[inline]
    pub const fn black_to_move(&self) -> bool {
        self.turn.is_black()
    }

    /// Gets the piece on `sq`. `None` means an empty square, or an invalid
    /// one.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn piece_kind_at(&self, sq: Square) -> Option<Role> {
        self.board.role_at(sq)
    }

    /// Tests if the piece belongs to the side to move. Does not check that
    /// the piece is actually on the board.
    #[inline]
    pub fn is_active_side(&self, piece: Piece) -> bool {
        piece.color == self.turn
    }

    /// Tests if a piece of the side to move stands on `sq`.
    #[inline]
    pub fn is_active_square(&self, sq: Square) -> bool {
        self.board.role_of(self.turn, sq).is_some()
    }

    /// Gets all squares occupied by the side to move.
    pub fn active_pieces(&self) -> Bitboard {
        self.board.by_color(self.turn)
    }

    /// Gets every piece on the board, tagged with its side and square. The
    /// order is unspecified.
    pub fn all_pieces(&self) -> PieceList {
        self.board.pieces()
    }

    /// Checks a move, returning the role of the moving piece.
    ///
    /// A move is legal if both squares are valid, the side to move has a
    /// piece on the origin, and the destination is acceptable under the
    /// [`CaptureRule`]. Movement patterns are not checked.
    ///
    /// # Errors
    ///
    /// Returns the first reason the move is illegal.
    pub fn check_move(&self, m: Move) -> Result<Role, IllegalMove> {
        if !m.is_valid() {
            return Err(IllegalMove::InvalidSquare);
        }

        let role = self
            .board
            .role_of(self.turn, m.from)
            .ok_or(IllegalMove::NoPieceToMove)?;

        match self.capture_rule {
            CaptureRule::Forbidden if self.board.role_at(m.to).is_some() => {
                Err(IllegalMove::DestinationOccupied)
            }
            CaptureRule::Enemy if self.board.role_of(self.turn, m.to).is_some() => {
                Err(IllegalMove::OwnPieceAtDestination)
            }
            _ => Ok(role),
        }
    }

    #[inline]
    pub fn is_legal_move(&self, m: Move) -> bool {
        self.check_move(m).is_ok()
    }

    /// Plays a move, returning the captured piece, if any.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the position unchanged if the move
    /// is not legal.
    pub fn play(&mut self, m: Move) -> Result<Option<Piece>, IllegalMove> {
        let role = self.check_move(m)?;
        let us = self.turn;

        let captured = self.board.discard(!us, m.to);
        self.board.relocate(us, role, m.from, m.to);
        self.turn = !us;

        Ok(captured)
    }

    /// Plays a move if it is legal. Returns `false` and leaves the position
    /// unchanged otherwise.
    #[inline]
    pub fn make_move(&mut self, m: Move) -> bool {
        self.play(m).is_ok()
    }

    /// Gets a FEN record for the position. The castling, en passant and clock
    /// fields carry their defaults.
    pub fn to_fen(&self) -> Fen {
        Fen::from_position(self)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} to move", self.board, self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pos: &Position) -> (Vec<Piece>, Color) {
        let mut pieces = pos.all_pieces().to_vec();
        pieces.sort_by_key(|p| (p.square, p.role as u8, p.color.is_white()));
        (pieces, pos.turn())
    }

    #[test]
    fn test_turn_alternates() {
        let mut pos = Position::new();
        assert!(pos.white_to_move());
        assert!(pos.make_move(Move::new(Square::E2, Square::E4)));
        assert!(pos.black_to_move());
        assert!(pos.make_move(Move::new(Square::E7, Square::E5)));
        assert!(pos.white_to_move());
    }

    #[test]
    fn test_rejected_move_is_atomic() {
        let candidates = [
            Move::new(Square::E2, Square::E2),
            Move::new(Square::E7, Square::E5),
            Move::new(Square::E4, Square::E5),
            Move::new(Square::A1, Square::A2),
            Move::new(Square::D1, Square::D8),
            Move::new(Square::INVALID, Square::E4),
            Move::new(Square::E2, Square::INVALID),
        ];
        let mut pos = Position::new();
        let before = snapshot(&pos);
        for m in candidates {
            assert!(!pos.is_legal_move(m), "{m}");
            assert!(!pos.make_move(m), "{m}");
            assert_eq!(snapshot(&pos), before, "{m}");
        }
    }

    #[test]
    fn test_check_move_reasons() {
        let pos = Position::new();
        assert_eq!(
            pos.check_move(Move::new(Square::INVALID, Square::E4)),
            Err(IllegalMove::InvalidSquare)
        );
        assert_eq!(
            pos.check_move(Move::new(Square::E4, Square::E5)),
            Err(IllegalMove::NoPieceToMove)
        );
        assert_eq!(
            pos.check_move(Move::new(Square::E7, Square::E5)),
            Err(IllegalMove::NoPieceToMove)
        );
        assert_eq!(
            pos.check_move(Move::new(Square::D1, Square::D8)),
            Err(IllegalMove::DestinationOccupied)
        );
        assert_eq!(
            pos.check_move(Move::new(Square::G1, Square::F3)),
            Ok(Role::Knight)
        );
    }

    #[test]
    fn test_no_movement_patterns() {
        // Any piece may go to any empty square.
        let mut pos = Position::new();
        assert!(pos.make_move(Move::new(Square::A1, Square::H5)));
        assert_eq!(pos.piece_kind_at(Square::H5), Some(Role::Rook));
    }

    #[test]
    fn test_enemy_capture_rule() {
        let mut pos = Position::new().with_capture_rule(CaptureRule::Enemy);
        assert_eq!(
            pos.check_move(Move::new(Square::D1, Square::D2)),
            Err(IllegalMove::OwnPieceAtDestination)
        );
        assert_eq!(
            pos.play(Move::new(Square::D1, Square::D7)),
            Ok(Some(Piece::new(Role::Pawn, Square::D7, Color::Black)))
        );
        assert_eq!(
            pos.piece_at(Square::D7),
            Some(Piece::new(Role::Queen, Square::D7, Color::White))
        );
        assert!(pos.board().conflicts().is_empty());
        assert_eq!(pos.all_pieces().len(), 31);
        assert!(pos.black_to_move());
    }

    #[test]
    fn test_active() {
        let pos = Position::new();
        assert!(pos.is_active_square(Square::E2));
        assert!(!pos.is_active_square(Square::E7));
        assert!(!pos.is_active_square(Square::E4));
        assert_eq!(pos.active_pieces(), Bitboard(0xffff_0000_0000_0000));
        assert!(pos.is_active_side(Piece::new(Role::Pawn, Square::E7, Color::White)));
        assert!(!pos.is_active_side(Piece::new(Role::Pawn, Square::E2, Color::Black)));
    }
}
