//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Fresh deck, no cards on the table.
    #[default]
    Initial,
    /// Both cards are dealt but not yet compared.
    Playing,
    /// The round has been compared and scored.
    Result,
}

/// Running win counts. Ties are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the computer.
    pub computer: u32,
}

/// Cards dealt for a round, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCards {
    /// The player's card, dealt first.
    pub player: Card,
    /// The computer's card, dealt second.
    pub computer: Card,
    /// Whether the deck was replaced before dealing.
    pub restarted: bool,
}

/// What happened when a round was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// Two cards were dealt and await [`reveal`](super::Game::reveal).
    Dealt(DealtCards),
    /// Too few cards were left; the deck was replaced and nothing was dealt.
    Restarted,
}

/// What happened when a full round was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round was dealt and compared.
    Played(crate::result::RoundResult),
    /// Too few cards were left; the deck was replaced and nothing was dealt.
    Restarted,
}
