//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError};

/// Card suit.
///
/// Declaration order is new-deck order, so the derived [`Ord`] sorts
/// Spades first and [`Suit::Joker`] last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Sentinel suit for jokers.
    Joker,
}

impl Suit {
    /// The four playable suits in new-deck order.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the position of the suit in new-deck order (Spades = 0, Joker = 4).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    /// Converts a value in `1..=13` into a rank.
    ///
    /// ```
    /// use cardeck::{Rank, RankError};
    ///
    /// assert_eq!(Rank::try_from(12u8), Ok(Rank::Queen));
    /// assert_eq!(Rank::try_from(0u8), Err(RankError::OutOfRange(0)));
    /// ```
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(RankError::OutOfRange(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Fields are ordered suit first, so the derived [`Ord`] is new-deck order:
/// by suit, then by rank. Jokers carry no rank and sort after every Heart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card; `None` for jokers.
    ///
    /// A card of a standard suit without a rank displays as its suit name
    /// and sorts before that suit's Ace.
    pub rank: Option<Rank>,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not reject [`Suit::Joker`]. Such a card still
    /// displays as `"Joker"`, whatever its rank.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank: Some(rank),
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: None,
        }
    }

    /// Returns whether the card is a joker.
    ///
    /// Only the suit decides; a rankless card of a standard suit is not a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the new-deck sort key, `13 * suit + rank`.
    ///
    /// Jokers use rank 0.
    #[must_use]
    pub fn sort_key(&self) -> u8 {
        13 * self.suit.index() + self.rank.map_or(0, Rank::value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.suit, self.rank) {
            (Suit::Joker, _) => f.write_str("Joker"),
            (suit, Some(rank)) => write!(f, "{rank} of {suit}"),
            (suit, None) => write!(f, "{suit}"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form of a card back into a [`Card`].
    ///
    /// ```
    /// use cardeck::{Card, Rank, Suit};
    ///
    /// let card: Card = "Queen of Hearts".parse().unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
    /// assert_eq!("Joker".parse::<Card>(), Ok(Card::joker()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Suit::Joker.name() {
            return Ok(Self::joker());
        }

        let (rank, suit) = s
            .split_once(" of ")
            .ok_or(ParseCardError::MissingSeparator)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|candidate| candidate.name() == rank.trim())
            .ok_or(ParseCardError::UnknownRank)?;
        let suit = Suit::STANDARD
            .into_iter()
            .find(|candidate| candidate.name() == suit.trim())
            .ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
