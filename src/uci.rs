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

//! Parse and write moves in long algebraic notation, as used by the
//! Universal Chess Interface.
//!
//! This is an adapter for text interfaces. The core works with structured
//! [`Move`] values.
//!
//! # Examples
//!
//! ```
//! use fenboard::{uci::UciMove, Move, Position, Role, Square};
//!
//! let uci: UciMove = "e2e4".parse()?;
//! assert_eq!(uci.to_move(), Move::new(Square::E2, Square::E4));
//!
//! let mut pos = Position::new();
//! assert!(pos.make_move(uci.to_move()));
//!
//! let promotion: UciMove = "a7a8q".parse()?;
//! assert_eq!(promotion.to_move().promotion, Some(Role::Queen));
//! assert_eq!(promotion.to_string(), "a7a8q");
//! # Ok::<_, fenboard::uci::ParseUciError>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{m::Move, role::Role, square::Square};

/// Error when parsing an invalid UCI move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid uci")
    }
}

impl Error for ParseUciError {}

/// A move as represented in the UCI protocol, e.g. `g1f3` or `e7e8q`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl UciMove {
    /// Parses a move in long algebraic notation.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUciError`] if the input is not two square names,
    /// optionally followed by a lowercase promotion letter other than `p`
    /// or `k`.
    pub fn from_ascii(s: &[u8]) -> Result<UciMove, ParseUciError> {
        if s.len() != 4 && s.len() != 5 {
            return Err(ParseUciError);
        }

        let from = Square::from_ascii(&s[0..2]).map_err(|_| ParseUciError)?;
        let to = Square::from_ascii(&s[2..4]).map_err(|_| ParseUciError)?;

        let promotion = match s.get(4) {
            None => None,
            Some(&ch) if ch.is_ascii_lowercase() => match Role::from_char(char::from(ch)) {
                Some(Role::Pawn | Role::King) | None => return Err(ParseUciError),
                role => role,
            },
            Some(_) => return Err(ParseUciError),
        };

        Ok(UciMove {
            from,
            to,
            promotion,
        })
    }

    /// Converts to a structured move. The move is not checked against any
    /// position.
    pub const fn to_move(self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }

    /// Converts from a structured move. Returns `None` if the move has an
    /// invalid square.
    pub const fn from_move(m: Move) -> Option<UciMove> {
        if m.is_valid() {
            Some(UciMove {
                from: m.from,
                to: m.to,
                promotion: m.promotion,
            })
        } else {
            None
        }
    }
}

impl FromStr for UciMove {
    type Err = ParseUciError;

    fn from_str(s: &str) -> Result<UciMove, ParseUciError> {
        UciMove::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self.from.to_string().to_ascii_lowercase();
        let to = self.to.to_string().to_ascii_lowercase();
        match self.promotion {
            Some(role) => write!(f, "{from}{to}{}", role.char()),
            None => write!(f, "{from}{to}"),
        }
    }
}

impl From<UciMove> for Move {
    fn from(uci: UciMove) -> Move {
        uci.to_move()
    }
}
