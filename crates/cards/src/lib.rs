// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Flopside playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use flopside_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! a [CardSet] for deck-valid cards collections parsed from 2-symbol
//! tokens, with rank and suit indices:
//!
//! ```
//! # use flopside_cards::{CardSet, Rank, Suit};
//! let cards: CardSet = "KhKd7d".parse()?;
//! assert_eq!(cards.suits_of(Rank::King).len(), 2);
//! assert_eq!(cards.ranks_of(Suit::Diamonds).len(), 2);
//! # Ok::<(), flopside_cards::Error>(())
//! ```
//!
//! and a [Deck] type for dealing random cards:
//!
//! ```
//! # use flopside_cards::{CardSet, Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = (0..2).map(|_| deck.deal()).collect::<CardSet>();
//! assert_eq!(hand.len(), 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::Error;

mod set;
pub use set::{CardSet, RankSet, SuitSet};
