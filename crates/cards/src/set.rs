// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Cards sets and their rank/suit indices.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, Error, Rank, Suit};

/// A set of cards from the 52-card deck.
///
/// The set is a 52-bit string with one bit per deck card, so membership
/// is structural: a `CardSet` can only ever hold deck cards, and a card
/// can only appear once. Bits are grouped by rank, four suit bits per
/// rank, which makes the per-rank suit index and the per-suit rank
/// index single mask extractions.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Adds a card to the set.
    pub fn insert(&mut self, card: Card) {
        self.0 |= 1 << card.id();
    }

    /// Checks if a card is in the set.
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1 << card.id()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if every card of this set is in `other`.
    pub fn is_subset(&self, other: CardSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// The suits present for a rank.
    pub fn suits_of(&self, rank: Rank) -> SuitSet {
        SuitSet(((self.0 >> (rank as u8 * 4)) & 0xF) as u8)
    }

    /// The ranks present for a suit.
    pub fn ranks_of(&self, suit: Suit) -> RankSet {
        let mut ranks = 0u16;
        for rank in Rank::ranks() {
            if self.contains(Card::new(rank, suit)) {
                ranks |= 1 << rank as u16;
            }
        }
        RankSet(ranks)
    }

    /// The set of distinct ranks in the set.
    pub fn ranks(&self) -> RankSet {
        let mut ranks = 0u16;
        for rank in Rank::ranks() {
            if !self.suits_of(rank).is_empty() {
                ranks |= 1 << rank as u16;
            }
        }
        RankSet(ranks)
    }

    /// Iterates the cards from highest to lowest rank, suits in s, h,
    /// d, c order within a rank.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        Rank::ranks()
            .rev()
            .flat_map(move |rank| self.suits_of(rank).iter().map(move |s| Card::new(rank, s)))
    }
}

impl FromStr for CardSet {
    type Err = Error;

    /// Parses a concatenation of 2-symbol card tokens, e.g. `"Kh7d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s.chars().collect::<Vec<_>>();
        if symbols.len() % 2 != 0 {
            return Err(Error::InvalidCardsString(s.to_string()));
        }

        let mut cards = CardSet::EMPTY;
        for token in symbols.chunks(2) {
            let card = Rank::from_symbol(token[0])
                .zip(Suit::from_symbol(token[1]))
                .map(|(rank, suit)| Card::new(rank, suit))
                .ok_or_else(|| Error::InvalidCardsSet(token.iter().collect()))?;
            cards.insert(card);
        }

        Ok(cards)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards = CardSet::EMPTY;
        for card in iter {
            cards.insert(card);
        }
        cards
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        CardSet(1 << card.id())
    }
}

impl ops::BitOr for CardSet {
    type Output = CardSet;

    fn bitor(self, rhs: CardSet) -> CardSet {
        CardSet(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: CardSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.iter() {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardSet({self})")
    }
}

/// A set of suits, the per-rank entry of the value index.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SuitSet(u8);

impl SuitSet {
    /// Checks if a suit is in the set.
    pub fn contains(&self, suit: Suit) -> bool {
        self.0 & (1 << suit as u8) != 0
    }

    /// Number of suits in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the suits in s, h, d, c order.
    pub fn iter(self) -> impl Iterator<Item = Suit> {
        Suit::suits().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for SuitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuitSet(")?;
        for suit in self.iter() {
            write!(f, "{suit}")?;
        }
        write!(f, ")")
    }
}

/// A set of ranks, the per-suit entry of the suit index.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RankSet(u16);

impl RankSet {
    /// Checks if a rank is in the set.
    pub fn contains(&self, rank: Rank) -> bool {
        self.0 & (1 << rank as u16) != 0
    }

    /// Number of ranks in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the ranks from highest to lowest.
    pub fn iter(self) -> impl Iterator<Item = Rank> {
        Rank::ranks().rev().filter(move |r| self.contains(*r))
    }
}

impl fmt::Debug for RankSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankSet(")?;
        for rank in self.iter() {
            write!(f, "{rank}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::HashSet;

    #[test]
    fn parse_and_render_round_trip() {
        let cards: CardSet = "Kh7d2c".parse().unwrap();
        assert_eq!(cards.len(), 3);

        // Re-rendering reproduces the same tokens as a multiset.
        let rendered = cards.to_string();
        let tokens = rendered
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|t| t.iter().collect::<String>())
            .collect::<HashSet<_>>();
        let expected = ["Kh", "7d", "2c"]
            .iter()
            .map(|t| t.to_string())
            .collect::<HashSet<_>>();
        assert_eq!(tokens, expected);

        assert_eq!(rendered.parse::<CardSet>().unwrap(), cards);
    }

    #[test]
    fn parse_odd_length() {
        assert!(matches!(
            "Kh7".parse::<CardSet>(),
            Err(Error::InvalidCardsString(_))
        ));
    }

    #[test]
    fn parse_non_deck_token() {
        assert!(matches!(
            "Kh1d".parse::<CardSet>(),
            Err(Error::InvalidCardsSet(token)) if token == "1d"
        ));
        assert!(matches!(
            "Kq".parse::<CardSet>(),
            Err(Error::InvalidCardsSet(_))
        ));
    }

    #[test]
    fn duplicates_collapse() {
        let cards: CardSet = "2s2s2s".parse().unwrap();
        assert_eq!(cards.len(), 1);
        assert!(cards.contains(Card::new(Rank::Deuce, Suit::Spades)));
    }

    #[test]
    fn rank_and_suit_indices() {
        let cards: CardSet = "KhKd7d2c".parse().unwrap();

        let kings = cards.suits_of(Rank::King);
        assert_eq!(kings.len(), 2);
        assert!(kings.contains(Suit::Hearts));
        assert!(kings.contains(Suit::Diamonds));
        assert!(!kings.contains(Suit::Spades));
        assert!(cards.suits_of(Rank::Ace).is_empty());

        let diamonds = cards.ranks_of(Suit::Diamonds);
        assert_eq!(diamonds.len(), 2);
        assert!(diamonds.contains(Rank::King));
        assert!(diamonds.contains(Rank::Seven));
        assert!(cards.ranks_of(Suit::Spades).is_empty());

        assert_eq!(cards.ranks().len(), 3);
    }

    #[test]
    fn iteration_is_rank_descending() {
        let cards: CardSet = "2cAhKd7d".parse().unwrap();
        let iterated = cards.iter().collect::<Vec<_>>();
        assert_eq!(
            iterated,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Diamonds),
                Card::new(Rank::Deuce, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn union_and_subset() {
        let hand: CardSet = "KhTd".parse().unwrap();
        let board: CardSet = "5h7d9c".parse().unwrap();
        let all = hand | board;

        assert_eq!(all.len(), 5);
        assert!(hand.is_subset(all));
        assert!(board.is_subset(all));
        assert!(!all.is_subset(hand));
    }

    #[test]
    fn full_deck_set() {
        let cards = Deck::default().into_iter().collect::<CardSet>();
        assert_eq!(cards.len(), Deck::SIZE);

        for rank in Rank::ranks() {
            assert_eq!(cards.suits_of(rank).len(), 4);
        }
        for suit in Suit::suits() {
            assert_eq!(cards.ranks_of(suit).len(), 13);
        }
    }
}
