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

//! Parse and write Forsyth-Edwards-Notation.
//!
//! # Examples
//!
//! Lenient parsing never fails. Malformed tokens are skipped and reported:
//!
//! ```
//! use fenboard::fen::{Fen, FenWarning};
//!
//! let (fen, warnings) = Fen::from_ascii_lossy(b"4k3/8/8/8/8/8/8/4X3 w - - 0 1");
//! assert_eq!(fen.board.pieces().len(), 1);
//! assert_eq!(warnings, [FenWarning::UnknownPiece { ch: 'X', index: 60 }]);
//! ```
//!
//! Strict parsing fails on the first malformed token:
//!
//! ```
//! use fenboard::fen::Fen;
//!
//! assert!("4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Fen>().is_ok());
//! assert!("4k3/8/8/8/8/8/8/4K3 x - - 0 1".parse::<Fen>().is_err());
//! ```
//!
//! # Placement
//!
//! Squares are filled in index order, starting at [`Square::A8`]. A digit
//! skips that many squares and `/` is ignored, so the index only ever grows
//! and no square is filled twice. Every letter, even an unknown one, takes
//! up one square.

use std::{error::Error, fmt, num::NonZeroU32, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    position::Position,
    square::Square,
    types::Piece,
};

/// The standard starting position.
pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A non-fatal problem found while parsing a FEN.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FenWarning {
    /// A placement character that is not a piece letter. It still took up
    /// one square.
    UnknownPiece { ch: char, index: usize },
    /// A piece letter past the last square. The piece was not placed.
    PieceOffBoard { piece: char, index: usize },
    /// An active color character other than `w` or `b`.
    InvalidTurn { ch: char },
    /// An en passant field that is neither `-` nor a square name.
    InvalidEpSquare,
    /// A halfmove clock that is not a number.
    InvalidHalfmoveClock,
    /// A fullmove number that is not a positive number.
    InvalidFullmoves,
}

impl fmt::Display for FenWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FenWarning::UnknownPiece { ch, index } => {
                write!(f, "unrecognized piece {ch:?} at square index {index}")
            }
            FenWarning::PieceOffBoard { piece, index } => {
                write!(f, "piece {piece:?} at square index {index} is off the board")
            }
            FenWarning::InvalidTurn { ch } => write!(f, "unrecognized active color {ch:?}"),
            FenWarning::InvalidEpSquare => f.write_str("invalid en passant square"),
            FenWarning::InvalidHalfmoveClock => f.write_str("invalid halfmove clock"),
            FenWarning::InvalidFullmoves => f.write_str("invalid fullmove number"),
        }
    }
}

impl Error for FenWarning {}

/// Error when strictly parsing a FEN that has malformed tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFenError {
    warning: FenWarning,
}

impl ParseFenError {
    /// Gets the first problem found in the FEN.
    pub fn warning(&self) -> &FenWarning {
        &self.warning
    }
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fen: {}", self.warning)
    }
}

impl Error for ParseFenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.warning)
    }
}

/// A parsed FEN.
///
/// Only the placement and the active color make up a [`Position`]. The
/// other fields are kept so that a FEN can be written back.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fen {
    pub board: Board,
    pub turn: Color,
    /// Castling field, verbatim. Empty if the field was missing.
    pub castling: String,
    pub ep_square: Option<Square>,
    pub halfmoves: u32,
    pub fullmoves: NonZeroU32,
}

impl Default for Fen {
    fn default() -> Fen {
        Fen {
            board: Board::new(),
            turn: Color::White,
            castling: String::from("KQkq"),
            ep_square: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }
}

impl Fen {
    pub fn empty() -> Fen {
        Fen {
            board: Board::empty(),
            castling: String::new(),
            ..Fen::default()
        }
    }

    /// Parses a FEN, skipping malformed tokens.
    ///
    /// Fields are separated by single spaces. Every space moves on to the
    /// next field, in the order placement, active color, castling, en
    /// passant, halfmove clock, fullmove number. Missing fields keep their
    /// defaults. Fields after the sixth are ignored.
    pub fn from_ascii_lossy(fen: &[u8]) -> (Fen, Vec<FenWarning>) {
        let mut result = Fen::empty();
        let mut warnings = Vec::new();

        for (field, part) in fen.split(|&ch| ch == b' ').enumerate() {
            match field {
                0 => result.board = parse_placement(part, &mut warnings),
                1 => {
                    for &ch in part {
                        match Color::from_char(char::from(ch)) {
                            Some(turn) => result.turn = turn,
                            None => warnings.push(FenWarning::InvalidTurn {
                                ch: char::from(ch),
                            }),
                        }
                    }
                }
                2 => result.castling = String::from_utf8_lossy(part).into_owned(),
                3 => match part {
                    b"" | b"-" => (),
                    _ => match Square::from_ascii(part) {
                        Ok(sq) => result.ep_square = Some(sq),
                        Err(_) => warnings.push(FenWarning::InvalidEpSquare),
                    },
                },
                4 if !part.is_empty() => match btoi::btou(part) {
                    Ok(halfmoves) => result.halfmoves = halfmoves,
                    Err(_) => warnings.push(FenWarning::InvalidHalfmoveClock),
                },
                5 if !part.is_empty() => {
                    match btoi::btou(part).ok().and_then(NonZeroU32::new) {
                        Some(fullmoves) => result.fullmoves = fullmoves,
                        None => warnings.push(FenWarning::InvalidFullmoves),
                    }
                }
                _ => (),
            }
        }

        (result, warnings)
    }

    /// Parses a FEN, failing on the first malformed token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFenError`] if lenient parsing would have reported any
    /// [`FenWarning`].
    pub fn from_ascii(fen: &[u8]) -> Result<Fen, ParseFenError> {
        let (result, warnings) = Fen::from_ascii_lossy(fen);
        match warnings.into_iter().next() {
            Some(warning) => Err(ParseFenError { warning }),
            None => Ok(result),
        }
    }

    pub fn from_position(pos: &Position) -> Fen {
        Fen {
            board: pos.board().clone(),
            turn: pos.turn(),
            castling: String::from("-"),
            ..Fen::empty()
        }
    }

    pub fn into_position(self) -> Position {
        Position::from_board(self.board, self.turn)
    }
}

fn parse_placement(part: &[u8], warnings: &mut Vec<FenWarning>) -> Board {
    let mut board = Board::empty();
    let mut index: usize = 0;

    for &ch in part {
        match ch {
            b'0'..=b'9' => index = index.saturating_add(usize::from(ch - b'0')),
            b'/' => (),
            _ => {
                let ch = char::from(ch);
                let sq = i32::try_from(index).map_or(Square::INVALID, Square::from_index);
                match Piece::from_char(ch, sq) {
                    Some(piece) if sq.is_valid() => {
                        board.set_piece(piece);
                    }
                    Some(_) => warnings.push(FenWarning::PieceOffBoard { piece: ch, index }),
                    None => warnings.push(FenWarning::UnknownPiece { ch, index }),
                }
                index = index.saturating_add(1);
            }
        }
    }

    board
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Fen, ParseFenError> {
        Fen::from_ascii(fen.as_bytes())
    }
}

impl From<Fen> for Position {
    fn from(fen: Fen) -> Position {
        fen.into_position()
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.board.board_fen(),
            self.turn.char(),
            if self.castling.is_empty() {
                "-"
            } else {
                self.castling.as_str()
            },
        )?;
        match self.ep_square.and_then(|sq| sq.file_char().zip(sq.rank_char())) {
            Some((file, rank)) => write!(f, "{}{}", file.to_ascii_lowercase(), rank)?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmoves, self.fullmoves)
    }
}
