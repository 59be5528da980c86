//! Game session and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::result::Outcome;

mod round;
pub mod state;

pub use state::{DealOutcome, DealtCards, GameState, RoundOutcome, Scoreboard};

/// A high-card game session between a player and the computer.
///
/// The session owns the deck, the scoreboard, and the random number
/// generator. Rounds are dealt with [`Game::deal_round`] and settled with
/// [`Game::reveal`], or both at once with [`Game::play_round`].
pub struct Game {
    /// Cards left to deal.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Running win counts.
    scores: Scoreboard,
    /// The player's card for the current round.
    player_card: Option<Card>,
    /// The computer's card for the current round.
    computer_card: Option<Card>,
    /// Winner of the last revealed round.
    winner: Option<Outcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use ace_showdown::{DECK_SIZE, Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Initial);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new().shuffled(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Initial,
            scores: Scoreboard::default(),
            player_card: None,
            computer_card: None,
            winner: None,
            rng,
        }
    }

    /// Starts a new game with a freshly shuffled deck.
    ///
    /// Clears the table and returns to [`GameState::Initial`]. Scores are kept.
    pub fn new_game(&mut self) {
        self.deck = Deck::new().shuffled(&mut self.rng);
        self.player_card = None;
        self.computer_card = None;
        self.winner = None;
        self.state = GameState::Initial;
        tracing::debug!(scores = ?self.scores, "new game started");
    }

    /// Zeroes the scoreboard and starts a new game.
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
        self.new_game();
    }

    /// Returns whether a round can be drawn without restarting the deck.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.state != GameState::Playing && self.deck.len() >= 2
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the running scores.
    #[must_use]
    pub const fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's card for the current round.
    #[must_use]
    pub const fn player_card(&self) -> Option<Card> {
        self.player_card
    }

    /// Returns the computer's card for the current round.
    #[must_use]
    pub const fn computer_card(&self) -> Option<Card> {
        self.computer_card
    }

    /// Returns the winner of the last revealed round.
    ///
    /// `None` until the current round is revealed.
    #[must_use]
    pub const fn winner(&self) -> Option<Outcome> {
        self.winner
    }
}
