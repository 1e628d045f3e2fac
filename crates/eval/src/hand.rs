// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Two hole cards and their starting-hand attributes.
use std::{fmt, str::FromStr};

use flopside_cards::{CardSet, Error, Rank, RankSet, Suit};

/// A Texas Hold'em starting hand of exactly 2 cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: CardSet,
    pair: bool,
    suited: bool,
    connected: bool,
}

impl Hand {
    /// Creates a hand from a validated cards set.
    ///
    /// Fails with [Error::InvalidHand] when the set does not hold
    /// exactly 2 cards.
    pub fn new(cards: CardSet) -> Result<Self, Error> {
        if cards.len() != 2 {
            return Err(Error::InvalidHand(cards.len()));
        }

        let ranks = cards.ranks();
        let suits = Suit::suits()
            .filter(|s| !cards.ranks_of(*s).is_empty())
            .count();

        Ok(Self {
            cards,
            pair: ranks.len() == 1,
            suited: suits == 1,
            connected: connected(ranks),
        })
    }

    /// The hand cards.
    pub fn cards(&self) -> CardSet {
        self.cards
    }

    /// Whether both cards share a rank.
    pub fn pair(&self) -> bool {
        self.pair
    }

    /// Whether both cards share a suit.
    pub fn suited(&self) -> bool {
        self.suited
    }

    /// Whether the two ranks are adjacent, with the ace adjacent to
    /// both the king and the deuce.
    pub fn connected(&self) -> bool {
        self.connected
    }
}

/// Checks two ranks for adjacency in the A,2,3,..,K,A run.
fn connected(ranks: RankSet) -> bool {
    let mut ranks = ranks.iter();
    match (ranks.next(), ranks.next()) {
        (Some(hi), Some(lo)) => {
            hi as u8 - lo as u8 == 1 || (hi == Rank::Ace && lo == Rank::Deuce)
        }
        // A paired hand has a single distinct rank.
        _ => false,
    }
}

impl FromStr for Hand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CardSet>().and_then(Hand::new)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand: {}", self.cards)?;
        writeln!(f, "Pair: {}", self.pair)?;
        writeln!(f, "Suited: {}", self.suited)?;
        write!(f, "Connected: {}", self.connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_hand() {
        let hand: Hand = "KhKd".parse().unwrap();
        assert!(hand.pair());
        assert!(!hand.suited());
        assert!(!hand.connected());
    }

    #[test]
    fn suited_hand() {
        let hand: Hand = "Ah7h".parse().unwrap();
        assert!(!hand.pair());
        assert!(hand.suited());
        assert!(!hand.connected());
    }

    #[test]
    fn connected_hands() {
        for (cards, connected) in [
            ("9h8d", true),
            ("KhQh", true),
            // The ace connects both high and low.
            ("AhKd", true),
            ("Ah2d", true),
            ("Ah3d", false),
            ("Kh2d", false),
            ("KhTd", false),
        ] {
            let hand: Hand = cards.parse().unwrap();
            assert_eq!(hand.connected(), connected, "{cards}");
        }
    }

    #[test]
    fn invalid_cardinality() {
        assert!(matches!("Kh".parse::<Hand>(), Err(Error::InvalidHand(1))));
        assert!(matches!(
            "Kh7d2c".parse::<Hand>(),
            Err(Error::InvalidHand(3))
        ));
        // Duplicate tokens collapse to a single card.
        assert!(matches!("KhKh".parse::<Hand>(), Err(Error::InvalidHand(1))));
        // Validity is checked before cardinality.
        assert!(matches!(
            "Kh7d2x".parse::<Hand>(),
            Err(Error::InvalidCardsSet(_))
        ));
    }

    #[test]
    fn display_report() {
        let hand: Hand = "KhKd".parse().unwrap();
        assert_eq!(
            hand.to_string(),
            "Hand: KhKd\nPair: true\nSuited: false\nConnected: false"
        );
    }
}
