// Copyright (C) 2026 Flopside contributors
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example sample_deals
// Sampled deals:   100000
//
// Straight Flush:  21
// Four of a Kind:  171
// Full House:      2542
// Flush:           2988
// Straight:        4693
// Three of a Kind: 4634
// Two Pair:        23341
// Pair:            44277
// none:            17333
// ```

use flopside_eval::*;

fn main() {
    const DEALS: usize = 100_000;

    let mut counts = [0usize; 9];
    let mut rng = rand::rng();

    for _ in 0..DEALS {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = Hand::new((0..2).map(|_| deck.deal()).collect()).unwrap();
        let flop = (0..3).map(|_| deck.deal()).collect();
        let turn = CardSet::from(deck.deal());
        let river = CardSet::from(deck.deal());

        let bh = BoardHand::new(hand, Board::new(flop, turn, river));
        counts[bh.best().category as usize] += 1;
    }

    println!("Sampled deals:   {DEALS}\n");
    println!("Straight Flush:  {}", counts[Category::StraightFlush as usize]);
    println!("Four of a Kind:  {}", counts[Category::FourOfAKind as usize]);
    println!("Full House:      {}", counts[Category::FullHouse as usize]);
    println!("Flush:           {}", counts[Category::Flush as usize]);
    println!("Straight:        {}", counts[Category::Straight as usize]);
    println!("Three of a Kind: {}", counts[Category::ThreeOfAKind as usize]);
    println!("Two Pair:        {}", counts[Category::TwoPair as usize]);
    println!("Pair:            {}", counts[Category::OnePair as usize]);
    println!("none:            {}", counts[Category::None as usize]);
}
