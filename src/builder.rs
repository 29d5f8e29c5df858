//! Fluent deck configuration.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::deck::{Transform, canonical};
use crate::transform;

/// Collects transforms and builds a deck from them.
///
/// Transforms run in the order they were added, exactly as with
/// [`new`](crate::new):
///
/// ```
/// use cardeck::{DeckBuilder, Suit, seeded_rng};
///
/// let mut rng = seeded_rng(42);
/// let cards = DeckBuilder::new()
///     .filter(|card| card.suit == Suit::Hearts)
///     .num_decks(2)
///     .with_jokers(2)
///     .shuffle(&mut rng)
///     .build();
/// assert_eq!(cards.len(), 80);
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    transforms: Vec<Box<dyn Transform + 'a>>,
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no transforms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary transform.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckBuilder;
    ///
    /// let cards = DeckBuilder::new()
    ///     .with(|mut cards: Vec<cardeck::Card>| {
    ///         cards.truncate(5);
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards.len(), 5);
    /// ```
    #[must_use]
    pub fn with(mut self, transform: impl Transform + 'a) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Removes every card matching `predicate`.
    ///
    /// See [`transform::filter`].
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&Card) -> bool + 'a,
    {
        self.with(transform::filter(predicate))
    }

    /// Repeats the deck `n` times.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckBuilder;
    ///
    /// assert_eq!(DeckBuilder::new().num_decks(6).build().len(), 312);
    /// assert!(DeckBuilder::new().num_decks(0).build().is_empty());
    /// ```
    #[must_use]
    pub fn num_decks(self, n: usize) -> Self {
        self.with(transform::num_decks(n))
    }

    /// Appends `n` jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckBuilder;
    ///
    /// let cards = DeckBuilder::new().with_jokers(2).build();
    /// assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 2);
    /// ```
    #[must_use]
    pub fn with_jokers(self, n: usize) -> Self {
        self.with(transform::with_jokers(n))
    }

    /// Shuffles the deck with `rng`.
    ///
    /// A borrowed generator (`&mut rng`) stays borrowed until [`build`](Self::build).
    #[must_use]
    pub fn shuffle<R>(self, rng: R) -> Self
    where
        R: Rng + 'a,
    {
        self.with(transform::shuffle(rng))
    }

    /// Cuts the deck at a random point chosen with `rng`.
    #[must_use]
    pub fn cut<R>(self, rng: R) -> Self
    where
        R: Rng + 'a,
    {
        self.with(transform::cut(rng))
    }

    /// Cuts the deck in the middle.
    #[must_use]
    pub fn clean_cut(self) -> Self {
        self.with(transform::clean_cut)
    }

    /// Sorts the deck into new-deck order.
    #[must_use]
    pub fn default_sort(self) -> Self {
        self.with(transform::default_sort)
    }

    /// Sorts the deck with `compare`.
    #[must_use]
    pub fn custom_sort<F>(self, compare: F) -> Self
    where
        F: FnMut(&Card, &Card) -> Ordering + 'a,
    {
        self.with(transform::custom_sort(compare))
    }

    /// Returns the number of transforms added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether no transforms have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds the canonical deck and applies every transform in order.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        self.transforms
            .into_iter()
            .fold(canonical(), |cards, mut transform| transform.apply(cards))
    }
}
