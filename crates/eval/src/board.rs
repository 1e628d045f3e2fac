// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Community cards and board texture hints.
use std::fmt;

use flopside_cards::{CardSet, Error, Rank, Suit};

/// The descending rank run used for straight windows, with the ace at
/// both ends so it plays high and low.
const RANK_RUN: [Rank; 14] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Trey,
    Rank::Deuce,
    Rank::Ace,
];

/// A 5-rank straight window, highest rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightWindow([Rank; 5]);

impl StraightWindow {
    /// The window ranks in descending order.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.0
    }
}

impl fmt::Display for StraightWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in self.0 {
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

/// Iterates the 10 overlapping straight windows from ace-high down to
/// the 5-high wheel.
pub(crate) fn straight_windows() -> impl Iterator<Item = StraightWindow> {
    (0..10).map(|i| {
        let mut ranks = [Rank::Ace; 5];
        ranks.copy_from_slice(&RANK_RUN[i..i + 5]);
        StraightWindow(ranks)
    })
}

/// Community cards built up in flop, turn, and river stages.
///
/// Partial boards are legal: the turn is only honored when a flop is
/// present, and the river only when a turn is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    flop: CardSet,
    turn: CardSet,
    river: CardSet,
}

impl Board {
    /// Creates a board from its stages.
    pub fn new(flop: CardSet, turn: CardSet, river: CardSet) -> Self {
        let turn = if flop.is_empty() { CardSet::EMPTY } else { turn };
        let river = if turn.is_empty() { CardSet::EMPTY } else { river };
        Self { flop, turn, river }
    }

    /// Parses a board from per-stage token strings.
    pub fn parse(flop: &str, turn: &str, river: &str) -> Result<Self, Error> {
        Ok(Self::new(flop.parse()?, turn.parse()?, river.parse()?))
    }

    /// The flop cards.
    pub fn flop(&self) -> CardSet {
        self.flop
    }

    /// The turn card.
    pub fn turn(&self) -> CardSet {
        self.turn
    }

    /// The river card.
    pub fn river(&self) -> CardSet {
        self.river
    }

    /// All community cards.
    pub fn cards(&self) -> CardSet {
        self.flop | self.turn | self.river
    }

    /// The straight windows reachable from the board alone.
    ///
    /// A window qualifies when the board holds at least 3 of its 5
    /// ranks; qualifying windows come out strongest first. These are
    /// search hints: the straight detectors re-check the windows over
    /// the full hand plus board cards.
    pub fn potential_straights(&self) -> Vec<StraightWindow> {
        let ranks = self.cards().ranks();
        straight_windows()
            .filter(|w| w.ranks().iter().filter(|r| ranks.contains(**r)).count() >= 3)
            .collect()
    }

    /// The suit of a flush reachable from the board alone.
    ///
    /// The first suit in s, h, d, c order with at least 3 board cards,
    /// if any.
    pub fn potential_flush(&self) -> Option<Suit> {
        let cards = self.cards();
        Suit::suits().find(|s| cards.ranks_of(*s).len() >= 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(flop: &str, turn: &str, river: &str) -> Board {
        Board::parse(flop, turn, river).unwrap()
    }

    #[test]
    fn windows_cover_the_run() {
        let windows = straight_windows().collect::<Vec<_>>();
        assert_eq!(windows.len(), 10);
        assert_eq!(windows[0].to_string(), "AKQJT");
        assert_eq!(windows[9].to_string(), "5432A");
    }

    #[test]
    fn stage_gating() {
        let b = Board::parse("", "Js", "Qh").unwrap();
        assert!(b.cards().is_empty(), "turn ignored without a flop");

        let b = board("5h7d9c", "", "Qh");
        assert_eq!(b.cards().len(), 3, "river ignored without a turn");

        let b = board("5h7d9c", "Js", "Qh");
        assert_eq!(b.cards().len(), 5);
    }

    #[test]
    fn potential_straights_on_river() {
        let b = board("5h7d9c", "Js", "Qh");
        let windows = b
            .potential_straights()
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>();
        assert_eq!(windows, vec!["KQJT9", "QJT98", "JT987", "98765"]);
    }

    #[test]
    fn potential_straights_empty() {
        let b = board("2h7d9c", "", "");
        assert!(b.potential_straights().is_empty());
    }

    #[test]
    fn wheel_window_qualifies() {
        let b = board("Ah2d4c", "", "");
        let windows = b
            .potential_straights()
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>();
        assert_eq!(windows, vec!["5432A"]);
    }

    #[test]
    fn potential_flush() {
        let b = board("5h7d9c", "Js", "Qh");
        assert_eq!(b.potential_flush(), None);

        let b = board("5h7h9c", "Jh", "");
        assert_eq!(b.potential_flush(), Some(Suit::Hearts));
    }
}
