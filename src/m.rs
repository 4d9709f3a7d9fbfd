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

use std::fmt::{self, Write as _};

use crate::{role::Role, square::Square};

/// A proposed transition of a piece from one square to another.
///
/// A move is only a proposal. [`Move::is_valid()`] checks that both squares
/// exist, [`Position::is_legal_move()`](crate::Position::is_legal_move)
/// decides if it can be played.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using long algebraic
/// notation, e.g. `E2-E4` or `E7-E8=Q`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Role to promote to. Carried along, but not validated.
    pub promotion: Option<Role>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Role) -> Move {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Checks that both squares are valid. A valid move is not necessarily
    /// legal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenboard::{Move, Square};
    ///
    /// assert!(Move::new(Square::E2, Square::E4).is_valid());
    /// assert!(!Move::new(Square::E2, Square::from_axes(4, 8)).is_valid());
    /// ```
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    /// Checks if the move carries a promotion role.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            f.write_char('=')?;
            f.write_char(role.upper_char())?;
        }
        Ok(())
    }
}
