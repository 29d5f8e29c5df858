//! Built-in deck transforms.
//!
//! Every transform has the shape `Vec<Card> -> Vec<Card>`. Parameterless
//! transforms ([`clean_cut`], [`default_sort`]) are plain functions; the
//! rest are factories returning a closure. All of them can be handed to
//! [`new`](crate::new) or [`DeckBuilder::with`](crate::DeckBuilder::with).
//!
//! None of them fail, and all of them accept an empty deck.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Removes every card for which `predicate` returns `true`.
///
/// Kept cards stay in their original relative order.
///
/// ```
/// use cardeck::{Rank, Suit, transform};
///
/// let cards = cardeck::new(&mut [&mut transform::filter(|card| {
///     card.rank == Some(Rank::Two) || card.suit == Suit::Spades
/// })]);
/// assert_eq!(cards.len(), 36);
/// ```
pub fn filter<F>(predicate: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: Fn(&Card) -> bool,
{
    move |mut cards| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Repeats the deck `n` times, each copy in the original order.
///
/// `n == 0` yields an empty deck.
pub fn num_decks(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards| cards.repeat(n)
}

/// Appends `n` jokers to the end of the deck.
pub fn with_jokers(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.extend(iter::repeat_n(Card::joker(), n));
        cards
    }
}

/// Shuffles the deck with `rng`.
///
/// Takes the generator by value; pass `&mut rng` to keep using it
/// afterwards. Seed it with [`seeded_rng`](crate::seeded_rng) for a
/// reproducible order, or with [`entropy_rng`](crate::entropy_rng) for a
/// fresh one.
pub fn shuffle<R>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    R: Rng,
{
    move |mut cards| {
        cards.shuffle(&mut rng);
        cards
    }
}

/// Cuts the deck at a random point in `0..len` and completes the cut.
///
/// An empty deck is returned untouched.
pub fn cut<R>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    R: Rng,
{
    move |mut cards| {
        if !cards.is_empty() {
            let at = rng.random_range(0..cards.len());
            cards.rotate_left(at);
        }
        cards
    }
}

/// Cuts the deck in the middle (`len / 2`) and completes the cut.
///
/// ```
/// use cardeck::{Card, Rank, Suit, transform};
///
/// let cards = cardeck::new(&mut [&mut transform::clean_cut]);
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
/// ```
#[must_use]
pub fn clean_cut(mut cards: Vec<Card>) -> Vec<Card> {
    let at = cards.len() / 2;
    cards.rotate_left(at);
    cards
}

/// Compares two cards in new-deck order: Spades, Diamonds, Clubs, Hearts,
/// then jokers; Ace to King within a suit.
///
/// Pass it to [`custom_sort`] to reproduce [`default_sort`].
#[must_use]
pub fn new_deck_order(a: &Card, b: &Card) -> Ordering {
    a.cmp(b)
}

/// Sorts the deck into new-deck order. The sort is stable.
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by(new_deck_order);
    cards
}

/// Sorts the deck with a caller-supplied comparator. The sort is stable.
///
/// The comparator must be a total order; otherwise the resulting order is
/// unspecified.
///
/// ```
/// use cardeck::{Card, transform};
///
/// // Kings first, jokers last.
/// let cards = cardeck::new(&mut [&mut transform::custom_sort(|a: &Card, b: &Card| {
///     b.rank.cmp(&a.rank)
/// })]);
/// assert_eq!(cards[0].to_string(), "King of Spades");
/// ```
pub fn custom_sort<F>(mut compare: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    move |mut cards| {
        cards.sort_by(&mut compare);
        cards
    }
}
