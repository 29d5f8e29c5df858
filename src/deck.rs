//! Deck construction.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A step in building a deck.
///
/// Any `FnMut(Vec<Card>) -> Vec<Card>` is a transform, so closures and the
/// functions in [`transform`](crate::transform) can be used directly. A
/// transform may add, remove, reorder, or duplicate cards; its output is not
/// validated.
pub trait Transform {
    /// Consumes the deck and returns the transformed deck.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Returns the canonical 52-card deck.
///
/// Spades, Diamonds, Clubs, Hearts in that order, each from Ace to King.
/// No jokers.
#[must_use]
pub fn canonical() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Builds the canonical deck and runs `transforms` over it in order.
///
/// Each transform receives the output of the previous one. With no
/// transforms the canonical deck is returned as is.
///
/// ```
/// use cardeck::transform::{clean_cut, num_decks, with_jokers};
///
/// let cards = cardeck::new(&mut [&mut num_decks(2), &mut with_jokers(3), &mut clean_cut]);
/// assert_eq!(cards.len(), 107);
/// ```
#[must_use]
pub fn new(transforms: &mut [&mut dyn Transform]) -> Vec<Card> {
    transforms
        .iter_mut()
        .fold(canonical(), |cards, transform| transform.apply(cards))
}
