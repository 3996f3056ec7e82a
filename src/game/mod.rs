//! Game engine and turn resolution.

use alloc::format;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::announcer::Announcer;
use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::sync::Mutex;

pub mod state;

pub use state::GameState;

/// A game of War between two players.
///
/// The game owns both hands, the RNG, and the announcer for the duration of
/// play. Hot fields are public behind [`Mutex`] so tests can script exact
/// hand layouts.
pub struct Game<A: Announcer> {
    /// Player 1's hand.
    pub hand1: Mutex<Hand>,
    /// Player 2's hand.
    pub hand2: Mutex<Hand>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Receives play-by-play events. Never influences game logic.
    pub announcer: Mutex<A>,
    /// Random number generator driving both shuffles.
    rng: Mutex<ChaCha8Rng>,
}

impl<A: Announcer> Game<A> {
    /// Creates a new game with the given seed: builds a deck, shuffles it,
    /// and deals 26 cards to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, NullAnnouncer};
    ///
    /// let game = Game::new(NullAnnouncer, 42);
    /// let winner = game.run();
    /// assert!(winner.is_terminal());
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly built deck always holds 52 cards"
    )]
    pub fn new(announcer: A, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let (hand1, hand2) = deck
            .deal()
            .expect("a freshly built deck holds exactly 52 cards");

        Self {
            hand1: Mutex::new(hand1),
            hand2: Mutex::new(hand2),
            state: Mutex::new(GameState::InProgress),
            announcer: Mutex::new(announcer),
            rng: Mutex::new(rng),
        }
    }

    /// Plays turns until one player holds all 52 cards.
    ///
    /// Returns the terminal state. Hand 1 is checked first, so the
    /// theoretically unreachable both-empty case resolves to a player 2 win.
    pub fn run(&self) -> GameState {
        loop {
            let state = self.state();
            if state.is_terminal() {
                return state;
            }

            if self.hand1.lock().is_empty() {
                self.announcer.lock().announce("Player 2 Wins!");
                *self.state.lock() = GameState::Player2Wins;
            } else if self.hand2.lock().is_empty() {
                self.announcer.lock().announce("Player 1 Wins!");
                *self.state.lock() = GameState::Player1Wins;
            } else {
                self.play_turn();
            }
        }
    }

    /// Plays one full decision round, including any tie escalation.
    ///
    /// Ties escalate in a loop rather than by recursion: the pile and the
    /// compared pair carry over between iterations, so escalation depth
    /// never grows the call stack. Every card drawn here lands in the pile,
    /// and the pile is always awarded to exactly one hand before returning,
    /// which keeps the 52-card population conserved.
    pub fn play_turn(&self) {
        let mut pile: Vec<Card> = Vec::new();
        let mut depth = 0usize;

        let mut played1 = self.draw_into(1, &mut pile);
        let mut played2 = self.draw_into(2, &mut pile);

        loop {
            depth += 1;
            self.announcer.lock().increment();
            self.report_play(1, played1);
            self.report_play(2, played2);

            match (played1, played2) {
                // A missing card here means that hand was already empty when
                // the round started; the other player takes the pile.
                (None, _) => {
                    self.award(2, pile);
                    break;
                }
                (_, None) => {
                    self.award(1, pile);
                    break;
                }
                (Some(card1), Some(card2)) => match card1.battle(&card2) {
                    Ordering::Greater => {
                        self.announcer.lock().announce("Player 1 wins hand");
                        self.award(1, pile);
                        break;
                    }
                    Ordering::Less => {
                        self.announcer.lock().announce("Player 2 wins hand");
                        self.award(2, pile);
                        break;
                    }
                    Ordering::Equal => {
                        self.announcer
                            .lock()
                            .announce("Draw: Each player draws three cards");

                        // Each player adds three cards to the pile,
                        // interleaved, player 1 first. A hand that runs dry
                        // mid-draw forfeits the pile to the other player.
                        let mut exhausted = None;
                        for _ in 0..3 {
                            match self.hand1.lock().draw() {
                                Some(card) => {
                                    pile.push(card);
                                    played1 = Some(card);
                                }
                                None => {
                                    exhausted = Some(1);
                                    break;
                                }
                            }
                            match self.hand2.lock().draw() {
                                Some(card) => {
                                    pile.push(card);
                                    played2 = Some(card);
                                }
                                None => {
                                    exhausted = Some(2);
                                    break;
                                }
                            }
                        }

                        if let Some(player) = exhausted {
                            self.announcer
                                .lock()
                                .announce(&format!("Player {player} is out of cards"));
                            self.award(if player == 1 { 2 } else { 1 }, pile);
                            break;
                        }

                        // The last card each player drew is the next pair to
                        // compare, with the whole pile still at stake.
                    }
                },
            }
        }

        let mut announcer = self.announcer.lock();
        for _ in 0..depth {
            announcer.decrement();
        }
    }

    /// Draws the front card of a hand into the pile.
    fn draw_into(&self, player: u8, pile: &mut Vec<Card>) -> Option<Card> {
        let card = self.hand(player).lock().draw();
        if let Some(card) = card {
            pile.push(card);
        }
        card
    }

    /// Awards the pile to a player's hand.
    fn award(&self, player: u8, pile: Vec<Card>) {
        let mut rng = self.rng.lock();
        self.hand(player).lock().collect(pile, &mut *rng);
    }

    fn hand(&self, player: u8) -> &Mutex<Hand> {
        if player == 1 { &self.hand1 } else { &self.hand2 }
    }

    fn report_play(&self, player: u8, card: Option<Card>) {
        let mut announcer = self.announcer.lock();
        match card {
            Some(card) => announcer.announce(&format!("Player {player}: {card}")),
            None => announcer.announce(&format!("Player {player} is out of cards")),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the sizes of both hands, player 1 first.
    #[must_use]
    pub fn hand_sizes(&self) -> (usize, usize) {
        (self.hand1.lock().len(), self.hand2.lock().len())
    }
}
