//! A high-card showdown game engine with optional `no_std` support.
//!
//! A shuffled 52-card [`Deck`] is dealt one card at a time; the player and
//! the computer each take a card and the higher value wins. The [`Game`]
//! type wraps the deck engine with scores and the round state machine.
//!
//! # Example
//!
//! ```
//! use ace_showdown::{Game, GameOptions, RoundOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if let Ok(RoundOutcome::Played(result)) = game.play_round() {
//!     println!("{} vs {}: {:?}", result.player_card, result.computer_card, result.outcome);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, Draw};
pub use error::{DeckError, DrawError, RevealError};
pub use game::{DealOutcome, DealtCards, Game, GameState, RoundOutcome, Scoreboard};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, compare_cards};
