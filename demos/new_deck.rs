//! Prints a customised deck.
//!
//! Pass a seed as the first argument for a reproducible order.

use cardeck::{DeckBuilder, Rank, Suit, entropy_rng, seeded_rng, transform};

fn main() {
    let mut rng = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(seed)) => seeded_rng(seed),
        Some(Err(err)) => {
            eprintln!("Invalid seed: {err}");
            return;
        }
        None => entropy_rng(),
    };

    let cards = DeckBuilder::new()
        .filter(|card| card.rank == Some(Rank::Two) || card.suit == Suit::Spades)
        .with_jokers(2)
        .shuffle(&mut rng)
        .build();
    let cards = transform::cut(&mut rng)(cards);

    println!("{} cards:", cards.len());
    for (position, card) in cards.iter().enumerate() {
        println!("{:>3}. {card}", position + 1);
    }
}
