//! A compact chess position model: bitboard piece placement, FEN parsing
//! and move application.
//!
//! # Examples
//!
//! Build a position and play a move:
//!
//! ```
//! use fenboard::{Move, Position, Role, Square};
//!
//! let mut pos = Position::from_fen(fenboard::fen::START);
//! assert_eq!(pos.all_pieces().len(), 32);
//!
//! // 1. e4
//! let e4 = Move::new(Square::E2, Square::E4);
//! assert!(pos.is_legal_move(e4));
//! assert!(pos.make_move(e4));
//! assert_eq!(pos.piece_kind_at(Square::E4), Some(Role::Pawn));
//! assert!(pos.black_to_move());
//! ```
//!
//! Legality is narrow: the side to move must have a piece on
//! the origin and the destination must be empty. Movement patterns, check,
//! castling, en passant and promotion rules are not part of the model.
//!
//! ```
//! # use fenboard::{Move, Position, Square};
//! let pos = Position::new();
//! // Occupied destination.
//! assert!(!pos.is_legal_move(Move::new(Square::D1, Square::D2)));
//! // Not white's piece.
//! assert!(!pos.is_legal_move(Move::new(Square::E7, Square::E5)));
//! // Any piece may jump to any empty square.
//! assert!(pos.is_legal_move(Move::new(Square::A1, Square::H4)));
//! ```
//!
//! Also supports writing [FEN](fen), [labels](notation) and
//! [UCI](uci) move parsing.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Square`], [`Color`] and [`Role`].
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod m;
mod position;
mod role;
mod square;
mod types;
mod util;

pub mod bitboard;
pub mod board;
pub mod fen;
pub mod notation;
pub mod uci;

pub use bitboard::Bitboard;
pub use board::{Board, PieceList};
pub use color::{ByColor, Color, ParseColorError};
pub use m::Move;
pub use position::{CaptureRule, IllegalMove, Position};
pub use role::{ByRole, Role};
pub use square::{ParseSquareError, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
