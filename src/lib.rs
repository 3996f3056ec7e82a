//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled 52-card deck
//! into two hands and plays them against each other under the War rule:
//! Ace beats everything, two Aces tie, and ties escalate into a "war" where
//! each player commits three more cards before comparing again.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameState, NullAnnouncer};
//!
//! let game = Game::new(NullAnnouncer, 42);
//! let winner = game.run();
//! assert!(matches!(winner, GameState::Player1Wins | GameState::Player2Wins));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod announcer;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
mod sync;

// Re-export main types
#[cfg(feature = "std")]
pub use announcer::ConsoleAnnouncer;
pub use announcer::{Announcer, NullAnnouncer};
pub use card::{Card, DECK_SIZE, HALF_DECK, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{Game, GameState};
pub use hand::Hand;
