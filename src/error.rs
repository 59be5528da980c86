//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::{Card, DECK_SIZE};

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a single deck holds.
    #[error("deck holds {0} cards, more than the {max} allowed", max = DECK_SIZE)]
    TooManyCards(usize),
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A dealt round has not been revealed yet.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// The deck ran out partway through a round.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when revealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// No round has been dealt.
    #[error("invalid game state for revealing")]
    InvalidState,
}
