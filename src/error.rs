//! Error types for card conversions.
//!
//! Deck construction and the transforms themselves never fail; only the
//! conversions into card types do.

use thiserror::Error;

/// Errors that can occur converting an integer into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank value {0} is outside 1..=13")]
    OutOfRange(u8),
}

/// Errors that can occur parsing a [`Card`](crate::Card) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Text is neither `"Joker"` nor of the form `"<Rank> of <Suit>"`.
    #[error("expected \"<rank> of <suit>\" or \"Joker\"")]
    MissingSeparator,
    /// Rank name not recognised.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit name not recognised.
    #[error("unknown suit")]
    UnknownSuit,
}
