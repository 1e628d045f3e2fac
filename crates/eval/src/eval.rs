// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand category detectors and the best-hand resolver.
use serde::{Deserialize, Serialize};
use std::fmt;

use flopside_cards::{Card, CardSet, Rank, Suit};

use crate::board::{StraightWindow, straight_windows};

/// The category of a resolved 5-card hand.
///
/// Categories are listed from strongest to weakest; the resolver
/// reports the first one whose detector matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Five consecutive ranks in one suit.
    StraightFlush,
    /// All four suits of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three of one rank.
    ThreeOfAKind,
    /// Two ranks paired.
    TwoPair,
    /// One rank paired.
    OnePair,
    /// No category matched.
    None,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "Pair",
            Category::None => "none",
        };

        write!(f, "{label}")
    }
}

/// The best 5-card hand found in an aggregate and its category.
///
/// The cards are a subset of the aggregate and hold 5 cards unless the
/// aggregate itself has fewer than 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    /// The resolved cards.
    pub cards: CardSet,
    /// The category of the resolved cards.
    pub category: Category,
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.cards, self.category)
    }
}

/// Resolves the best hand out of all cards, using the board-only hints
/// to narrow the straight and flush scans.
///
/// Detectors run in descending category strength and the first match
/// wins; with no match the fallback is the 5 highest cards labelled
/// [Category::None]. Total for any non-empty aggregate.
pub fn best_hand(
    cards: CardSet,
    straights: &[StraightWindow],
    flush_suit: Option<Suit>,
) -> BestHand {
    let made = None
        .or_else(|| straight_flush(cards, straights, flush_suit).map(|c| (c, Category::StraightFlush)))
        .or_else(|| quads(cards).map(|c| (c, Category::FourOfAKind)))
        .or_else(|| full_house(cards).map(|c| (c, Category::FullHouse)))
        .or_else(|| flush(cards).map(|c| (c, Category::Flush)))
        .or_else(|| straight(cards, straights).map(|c| (c, Category::Straight)))
        .or_else(|| trips(cards).map(|c| (c, Category::ThreeOfAKind)))
        .or_else(|| two_pair(cards).map(|c| (c, Category::TwoPair)))
        .or_else(|| one_pair(cards).map(|c| (c, Category::OnePair)));

    match made {
        Some((cards, category)) => BestHand { cards, category },
        None => BestHand {
            cards: fill(cards, CardSet::EMPTY, 5),
            category: Category::None,
        },
    }
}

/// Fills a partial hand up to `target` cards with the best kickers.
///
/// Walks ranks from ace down to deuce, suits in s, h, d, c order,
/// adding available cards not already committed; stops early when the
/// aggregate runs out of cards.
fn fill(cards: CardSet, mut partial: CardSet, target: usize) -> CardSet {
    for card in cards.iter() {
        if partial.len() >= target {
            break;
        }
        partial.insert(card);
    }
    partial
}

/// Only attempted when the board hints at both a straight and a flush:
/// scans the rank run restricted to the hint suit, ace-high first.
fn straight_flush(
    cards: CardSet,
    straights: &[StraightWindow],
    flush_suit: Option<Suit>,
) -> Option<CardSet> {
    let suit = flush_suit.filter(|_| !straights.is_empty())?;
    straight_windows()
        .map(|w| w.ranks().iter().map(|r| Card::new(*r, suit)).collect::<CardSet>())
        .find(|run| run.is_subset(cards))
}

fn quads(cards: CardSet) -> Option<CardSet> {
    Rank::ranks().rev().find_map(|rank| {
        (cards.suits_of(rank).len() == 4).then(|| {
            let quad = Suit::suits().map(|s| Card::new(rank, s)).collect();
            fill(cards, quad, 5)
        })
    })
}

fn full_house(cards: CardSet) -> Option<CardSet> {
    for trips_rank in Rank::ranks().rev() {
        if cards.suits_of(trips_rank).len() != 3 {
            continue;
        }
        for pair_rank in Rank::ranks().rev() {
            if pair_rank == trips_rank || cards.suits_of(pair_rank).len() < 2 {
                continue;
            }
            // The pair takes the first 2 suits in s, h, d, c order.
            let trips = cards
                .suits_of(trips_rank)
                .iter()
                .map(|s| Card::new(trips_rank, s));
            let pair = cards
                .suits_of(pair_rank)
                .iter()
                .take(2)
                .map(|s| Card::new(pair_rank, s));
            return Some(trips.chain(pair).collect());
        }
    }
    None
}

fn flush(cards: CardSet) -> Option<CardSet> {
    Suit::suits().find_map(|suit| {
        let ranks = cards.ranks_of(suit);
        (ranks.len() >= 5)
            .then(|| ranks.iter().take(5).map(|r| Card::new(r, suit)).collect())
    })
}

/// Scans the board's potential straight windows, strongest first, for
/// one fully covered by the combined cards; each rank takes its first
/// available suit in s, h, d, c order.
fn straight(cards: CardSet, straights: &[StraightWindow]) -> Option<CardSet> {
    straights
        .iter()
        .map(|w| {
            w.ranks()
                .iter()
                .filter_map(|r| cards.suits_of(*r).iter().next().map(|s| Card::new(*r, s)))
                .collect::<CardSet>()
        })
        .find(|made| made.len() == 5)
}

fn trips(cards: CardSet) -> Option<CardSet> {
    Rank::ranks().rev().find_map(|rank| {
        (cards.suits_of(rank).len() == 3).then(|| {
            let trips = cards.suits_of(rank).iter().map(|s| Card::new(rank, s)).collect();
            fill(cards, trips, 5)
        })
    })
}

fn two_pair(cards: CardSet) -> Option<CardSet> {
    let mut pairs = Rank::ranks()
        .rev()
        .filter(|r| cards.suits_of(*r).len() == 2);

    match (pairs.next(), pairs.next()) {
        (Some(hi), Some(lo)) => {
            let both = cards
                .suits_of(hi)
                .iter()
                .map(|s| Card::new(hi, s))
                .chain(cards.suits_of(lo).iter().map(|s| Card::new(lo, s)))
                .collect();
            Some(fill(cards, both, 5))
        }
        _ => None,
    }
}

fn one_pair(cards: CardSet) -> Option<CardSet> {
    Rank::ranks().rev().find_map(|rank| {
        (cards.suits_of(rank).len() == 2).then(|| {
            let pair = cards.suits_of(rank).iter().map(|s| Card::new(rank, s)).collect();
            fill(cards, pair, 5)
        })
    })
}
