//! A playing-card deck builder with optional `no_std` support.
//!
//! [`new`] builds the canonical 52-card deck and runs a chain of
//! [`Transform`]s over it: filtering, multiplying, adding jokers, shuffling,
//! cutting, and sorting. [`DeckBuilder`] offers the same pipeline fluently.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Rank, Suit, seeded_rng, transform};
//!
//! let mut rng = seeded_rng(42);
//! let cards = cardeck::new(&mut [
//!     &mut transform::with_jokers(2),
//!     &mut transform::shuffle(&mut rng),
//!     &mut transform::default_sort,
//! ]);
//! assert_eq!(cards.len(), 54);
//! assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
//! assert!(cards[52].is_joker());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod builder;
pub mod card;
pub mod deck;
pub mod error;
mod rng;
pub mod transform;

// Re-export main types
pub use builder::DeckBuilder;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Transform, canonical, new};
pub use error::{ParseCardError, RankError};
#[cfg(feature = "std")]
pub use rng::entropy_rng;
pub use rng::seeded_rng;
