// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! The hand plus board aggregate and its analysis report.
use std::fmt;

use flopside_cards::{CardSet, Error, Suit};

use crate::{
    board::{Board, StraightWindow},
    eval::{BestHand, best_hand},
    hand::Hand,
};

/// A starting hand together with the community cards.
///
/// All derived state, the board texture hints and the resolved best
/// hand, is computed eagerly at construction; a new board stage means
/// building a new aggregate over the accumulated cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardHand {
    hand: Hand,
    board: Board,
    cards: CardSet,
    potential_straights: Vec<StraightWindow>,
    potential_flush: Option<Suit>,
    best: BestHand,
}

impl BoardHand {
    /// Creates the aggregate from a hand and a board.
    pub fn new(hand: Hand, board: Board) -> Self {
        let cards = hand.cards() | board.cards();
        let potential_straights = board.potential_straights();
        let potential_flush = board.potential_flush();
        let best = best_hand(cards, &potential_straights, potential_flush);

        Self {
            hand,
            board,
            cards,
            potential_straights,
            potential_flush,
            best,
        }
    }

    /// Parses the aggregate from per-stage token strings.
    pub fn parse(hand: &str, flop: &str, turn: &str, river: &str) -> Result<Self, Error> {
        Ok(Self::new(hand.parse()?, Board::parse(flop, turn, river)?))
    }

    /// The starting hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The community cards.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All hand and board cards.
    pub fn cards(&self) -> CardSet {
        self.cards
    }

    /// The straight windows reachable from the board alone.
    pub fn potential_straights(&self) -> &[StraightWindow] {
        &self.potential_straights
    }

    /// The suit of a flush reachable from the board alone.
    pub fn potential_flush(&self) -> Option<Suit> {
        self.potential_flush
    }

    /// The resolved best hand.
    pub fn best(&self) -> &BestHand {
        &self.best
    }
}

impl fmt::Display for BoardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.hand)?;
        writeln!(f, "Flop: {}", self.board.flop())?;
        writeln!(f, "Turn: {}", self.board.turn())?;
        writeln!(f, "River: {}", self.board.river())?;

        write!(f, "Potential Straights:")?;
        if self.potential_straights.is_empty() {
            write!(f, " none")?;
        } else {
            for window in &self.potential_straights {
                write!(f, " {window}")?;
            }
        }
        writeln!(f)?;

        match self.potential_flush {
            Some(suit) => writeln!(f, "Potential Flush Suit: {}", suit.name())?,
            None => writeln!(f, "Potential Flush Suit: none")?,
        }

        write!(f, "Best Hand: {}", self.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Category;

    #[test]
    fn river_straight_report() {
        let bh = BoardHand::parse("KhTd", "5h7d9c", "Js", "Qh").unwrap();

        assert_eq!(bh.cards().len(), 7);
        assert_eq!(bh.potential_flush(), None);
        assert_eq!(bh.best().category, Category::Straight);

        let report = bh.to_string();
        assert!(report.contains("Hand: KhTd"));
        assert!(report.contains("Flop: 9c7d5h"));
        assert!(report.contains("Turn: Js"));
        assert!(report.contains("River: Qh"));
        assert!(report.contains("Potential Straights: KQJT9 QJT98 JT987 98765"));
        assert!(report.contains("Potential Flush Suit: none"));
        assert!(report.contains("Best Hand: KhQhJsTd9c (Straight)"));
    }

    #[test]
    fn flush_suit_reported_by_name() {
        let bh = BoardHand::parse("Ah2c", "KhQh7h", "", "").unwrap();
        assert_eq!(bh.potential_flush(), Some(Suit::Hearts));
        assert!(bh.to_string().contains("Potential Flush Suit: Hearts"));
    }

    #[test]
    fn hand_cards_overlap_board() {
        // Set semantics: a card appearing in both hand and board
        // counts once.
        let hand: Hand = "KhTd".parse().unwrap();
        let board = Board::parse("KhTd2c", "", "").unwrap();
        let bh = BoardHand::new(hand, board);
        assert_eq!(bh.cards().len(), 3);
    }

    #[test]
    fn hand_only_aggregate() {
        let bh = BoardHand::parse("KhKd", "", "", "").unwrap();
        assert!(bh.potential_straights().is_empty());
        assert_eq!(bh.potential_flush(), None);
        assert_eq!(bh.best().category, Category::OnePair);
        assert_eq!(bh.best().cards.len(), 2);
    }
}
