//! Error types for game operations.
//!
//! Running out of cards is not represented here: an empty hand is a normal
//! game-ending signal and is reported as `None` from
//! [`Hand::draw`](crate::hand::Hand::draw).

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck does not hold exactly 52 cards.
    #[error("deck must hold exactly 52 cards to deal")]
    InvalidState,
}
