// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0

//! Flopside board analyzer CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use flopside_eval::{Board, BoardHand, CardSet, Deck, Hand};

#[derive(Debug, Parser)]
struct Cli {
    /// The 2 hole cards, e.g. KhTd.
    #[clap(required_unless_present = "random", conflicts_with = "random")]
    hand: Option<String>,
    /// The 3 flop cards, e.g. 5h7d9c.
    #[clap(default_value = "")]
    flop: String,
    /// The turn card, honored only with a flop.
    #[clap(default_value = "")]
    turn: String,
    /// The river card, honored only with a turn.
    #[clap(default_value = "")]
    river: String,
    /// Analyze a random deal instead.
    #[clap(long, short)]
    random: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let board_hand = if cli.random {
        random_deal()
    } else {
        // The hand argument is required unless --random is given.
        let hand = cli.hand.unwrap_or_default();
        BoardHand::parse(&hand, &cli.flop, &cli.turn, &cli.river)?
    };

    println!("{board_hand}");

    Ok(())
}

/// Deals a full random board from a shuffled deck.
fn random_deal() -> BoardHand {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());

    let hand = (0..2).map(|_| deck.deal()).collect::<CardSet>();
    let flop = (0..3).map(|_| deck.deal()).collect::<CardSet>();
    let turn = CardSet::from(deck.deal());
    let river = CardSet::from(deck.deal());
    info!("dealt hand {hand} on board {}", flop | turn | river);

    let hand = Hand::new(hand).expect("two cards dealt");
    BoardHand::new(hand, Board::new(flop, turn, river))
}
