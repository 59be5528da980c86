//! Card comparison and round results.

use crate::card::Card;

/// Winner of a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's card is higher.
    Player,
    /// The computer's card is higher.
    Computer,
    /// Both cards have the same value.
    Tie,
}

impl Outcome {
    /// Returns the outcome seen from the other side of the table.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
            Self::Tie => Self::Tie,
        }
    }
}

/// Compares the player's card `a` against the computer's card `b`.
///
/// Only card values matter, so equal ranks of different suits tie.
///
/// ```
/// use ace_showdown::{Card, Outcome, Rank, Suit, compare_cards};
///
/// let ace = Card::new(Suit::Clubs, Rank::Ace);
/// let two = Card::new(Suit::Spades, Rank::Two);
/// assert_eq!(compare_cards(ace, two), Outcome::Player);
/// ```
#[must_use]
pub const fn compare_cards(a: Card, b: Card) -> Outcome {
    let (a, b) = (a.value(), b.value());
    if a > b {
        Outcome::Player
    } else if b > a {
        Outcome::Computer
    } else {
        Outcome::Tie
    }
}

/// Result of a revealed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The card dealt to the player.
    pub player_card: Card,
    /// The card dealt to the computer.
    pub computer_card: Card,
    /// Who won the round.
    pub outcome: Outcome,
}
