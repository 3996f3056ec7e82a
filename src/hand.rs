//! A player's hand of cards.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// One player's ordered cards. The front card is the next to be played.
///
/// The backing queue is never exposed: a hand only supports drawing from the
/// front and collecting a won pile onto the back, which keeps the play order
/// invariants enforceable.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a hand holding `cards` in play order, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the front card.
    ///
    /// Returns `None` when the hand is empty. An empty hand is the normal
    /// game-ending condition, not an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Takes a won pile and puts it on the back of the hand.
    ///
    /// The pile is shuffled before it is appended. Replaying a pile in a
    /// fixed order can reproduce the same conflict sequence forever
    /// ("endless war"); the shuffle breaks that cycle.
    pub fn collect(&mut self, mut cards: Vec<Card>, rng: &mut impl Rng) {
        cards.shuffle(rng);
        self.cards.extend(cards);
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in play order, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    /// Formats one card per line, lowest rank first under the War ordering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&Card> = self.cards.iter().collect();
        sorted.sort_by(|a, b| a.battle(b));

        let mut first = true;
        for card in sorted {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
