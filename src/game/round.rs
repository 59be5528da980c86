use core::mem;

use crate::card::Card;
use crate::deck::{Deck, Draw};
use crate::error::{DrawError, RevealError};
use crate::result::{Outcome, RoundResult, compare_cards};

use super::{DealOutcome, DealtCards, Game, GameState, RoundOutcome};

/// Cards needed to deal one round.
const ROUND_CARDS: usize = 2;

impl Game {
    /// Deals the top card of the session deck.
    fn deal_one(&mut self) -> Option<Card> {
        let Draw { card, remaining } = mem::replace(&mut self.deck, Deck::empty()).deal();
        self.deck = remaining;
        card
    }

    /// Compares the dealt cards and updates the scoreboard.
    fn settle(&mut self, player_card: Card, computer_card: Card) -> RoundResult {
        let outcome = compare_cards(player_card, computer_card);

        match outcome {
            Outcome::Player => self.scores.player = self.scores.player.saturating_add(1),
            Outcome::Computer => self.scores.computer = self.scores.computer.saturating_add(1),
            Outcome::Tie => {}
        }

        self.winner = Some(outcome);
        self.state = GameState::Result;

        tracing::debug!(
            %player_card,
            %computer_card,
            ?outcome,
            player_score = self.scores.player,
            computer_score = self.scores.computer,
            "round settled"
        );

        RoundResult {
            player_card,
            computer_card,
            outcome,
        }
    }

    /// Deals one card to the player, then one to the computer.
    ///
    /// If fewer than two cards remain, the deck is replaced with a freshly
    /// shuffled one before anything is dealt. Unless
    /// [`GameOptions::deal_after_restart`](crate::GameOptions::deal_after_restart)
    /// is set, the request then stops with [`DealOutcome::Restarted`].
    ///
    /// On success the game moves to [`GameState::Playing`] and the cards wait
    /// for [`Game::reveal`].
    ///
    /// # Errors
    ///
    /// Returns an error if a dealt round has not been revealed yet.
    pub fn deal_round(&mut self) -> Result<DealOutcome, DrawError> {
        if self.state == GameState::Playing {
            return Err(DrawError::InvalidState);
        }

        let mut restarted = false;
        if self.deck.len() < ROUND_CARDS {
            tracing::info!(
                remaining = self.deck.len(),
                "not enough cards for a round, starting a new game"
            );
            self.new_game();
            if !self.options.deal_after_restart {
                return Ok(DealOutcome::Restarted);
            }
            restarted = true;
        }

        self.player_card = None;
        self.computer_card = None;
        self.winner = None;

        let player = self.deal_one().ok_or(DrawError::NotEnoughCards)?;
        let computer = self.deal_one().ok_or(DrawError::NotEnoughCards)?;

        self.player_card = Some(player);
        self.computer_card = Some(computer);
        self.state = GameState::Playing;

        Ok(DealOutcome::Dealt(DealtCards {
            player,
            computer,
            restarted,
        }))
    }

    /// Compares the dealt cards and scores the round.
    ///
    /// Moves the game to [`GameState::Result`].
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting to be revealed.
    pub fn reveal(&mut self) -> Result<RoundResult, RevealError> {
        if self.state != GameState::Playing {
            return Err(RevealError::InvalidState);
        }

        let (Some(player_card), Some(computer_card)) = (self.player_card, self.computer_card)
        else {
            return Err(RevealError::InvalidState);
        };

        Ok(self.settle(player_card, computer_card))
    }

    /// Deals and reveals a round in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if a dealt round has not been revealed yet.
    pub fn play_round(&mut self) -> Result<RoundOutcome, DrawError> {
        match self.deal_round()? {
            DealOutcome::Dealt(cards) => Ok(RoundOutcome::Played(
                self.settle(cards.player, cards.computer),
            )),
            DealOutcome::Restarted => Ok(RoundOutcome::Restarted),
        }
    }
}
