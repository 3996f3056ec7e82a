//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, HALF_DECK, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// A standard deck of 52 cards.
///
/// A deck is built once per game, shuffled, and consumed by [`Deck::deal`].
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck. Public so tests can script exact layouts.
    pub cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck, suit-major and rank-minor.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place, returning `&mut Self` for chaining.
    pub fn shuffle(&mut self, rng: &mut impl Rng) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Splits the deck into two hands of 26 cards each, preserving the
    /// current order within each half. Consumes the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] if the deck does not hold exactly
    /// 52 cards. This is a defensive check against misuse; a freshly built
    /// deck always passes.
    pub fn deal(self) -> Result<(Hand, Hand), DealError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DealError::InvalidState);
        }

        let mut front = self.cards;
        let back = front.split_off(HALF_DECK);

        Ok((Hand::from_cards(front), Hand::from_cards(back)))
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
