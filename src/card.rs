//! Card types and the War comparison rule.

use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the capitalized suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Ranks outside 1..=13 indicate a bug in deck construction and are
    /// rejected by a debug assertion.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!(rank >= 1 && rank <= 13, "card rank out of range");
        Self { suit, rank }
    }

    /// Compares two cards under the War rule.
    ///
    /// An Ace (rank 1) beats every other rank, two Aces tie, and all other
    /// ranks compare numerically. This is deliberately not an [`Ord`] impl:
    /// two Aces of different suits compare [`Ordering::Equal`] while being
    /// unequal under [`Eq`], which would violate the `Ord` contract.
    #[must_use]
    pub const fn battle(&self, other: &Self) -> Ordering {
        match (self.rank, other.rank) {
            (1, 1) => Ordering::Equal,
            (1, _) => Ordering::Greater,
            (_, 1) => Ordering::Less,
            (a, b) => {
                if a < b {
                    Ordering::Less
                } else if a > b {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        }
    }

    const fn rank_word(self) -> Option<&'static str> {
        match self.rank {
            1 => Some("Ace"),
            11 => Some("Jack"),
            12 => Some("Queen"),
            13 => Some("King"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    /// Formats as "Ace of Hearts", "Jack of Spades", "7 of Clubs".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank_word() {
            Some(word) => write!(f, "{} of {}", word, self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

/// Number of cards in the full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each player.
pub const HALF_DECK: usize = DECK_SIZE / 2;
