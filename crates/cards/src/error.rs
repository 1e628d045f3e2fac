// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Cards construction errors.
use thiserror::Error;

/// Errors raised while building cards collections.
///
/// All variants are input validation failures detected at construction
/// time; once a set or hand is built no further operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cards string that cannot be split into 2-symbol tokens.
    #[error("invalid cards string {0:?}")]
    InvalidCardsString(String),

    /// A 2-symbol token that names no card in the 52-card deck.
    #[error("invalid cards set: {0:?} is not a deck card")]
    InvalidCardsSet(String),

    /// A hand with a cardinality other than 2.
    #[error("invalid hand: expected 2 cards, got {0}")]
    InvalidHand(usize),
}
