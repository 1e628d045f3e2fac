// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Flopside Texas Hold'em board analyzer.
//!
//! Builds a [Hand], a [Board], and their [BoardHand] aggregate from
//! 2-symbol card tokens, derives the board texture hints, and resolves
//! the best 5-card hand with its [Category]:
//!
//! ```
//! # use flopside_eval::*;
//! let bh = BoardHand::parse("KhTd", "5h7d9c", "Js", "Qh")?;
//!
//! assert_eq!(bh.best().category, Category::Straight);
//! assert_eq!(bh.best().cards, "KhQhJsTd9c".parse()?);
//! # Ok::<(), flopside_eval::Error>(())
//! ```
//!
//! The starting hand carries its pair, suited, and connected flags:
//!
//! ```
//! # use flopside_eval::*;
//! let hand: Hand = "KhKd".parse()?;
//! assert!(hand.pair() && !hand.suited() && !hand.connected());
//! # Ok::<(), flopside_eval::Error>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod board;
pub use board::{Board, StraightWindow};

mod board_hand;
pub use board_hand::BoardHand;

mod eval;
pub use eval::{BestHand, Category, best_hand};

mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use flopside_cards::{Card, CardSet, Deck, Error, Rank, RankSet, Suit, SuitSet};
