//! Deck construction, shuffling, and dealing.
//!
//! A [`Deck`] is an ordered run of undrawn cards whose top is the end of the
//! sequence. Decks are threaded by value: [`Deck::deal`] consumes the deck and
//! hands back the remainder alongside the drawn card.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of unique cards, at most [`DECK_SIZE`] long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards from bottom to top.
    cards: Vec<Card>,
}

/// The result of dealing one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The dealt card, or `None` if the deck was empty.
    pub card: Option<Card>,
    /// The cards left after dealing.
    pub remaining: Deck,
}

/// Bit position of a card within a 52-bit occupancy mask.
const fn slot(card: Card) -> u32 {
    card.suit as u32 * Rank::ALL.len() as u32 + card.rank as u32
}

impl Deck {
    /// Creates the canonical unshuffled deck.
    ///
    /// Cards are ordered suit-major (Hearts, Diamonds, Clubs, Spades) and
    /// rank-minor (Two through Ace).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck from cards listed bottom to top.
    ///
    /// The last card is the first one dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if more than [`DECK_SIZE`] cards are given or a card
    /// appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards(cards.len()));
        }

        let mut seen: u64 = 0;
        for &card in &cards {
            let bit = 1u64 << slot(card);
            if seen & bit != 0 {
                return Err(DeckError::DuplicateCard(card));
            }
            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Returns a shuffled copy of the deck, leaving `self` untouched.
    ///
    /// Uses a Fisher-Yates pass from the top down, so every ordering is
    /// equally likely given a uniform `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();

        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        tracing::debug!(cards = cards.len(), "deck shuffled");
        Self { cards }
    }

    /// Deals the top card.
    ///
    /// Dealing from an empty deck is not an error: the draw carries no card
    /// and the remainder stays empty.
    #[must_use]
    pub fn deal(mut self) -> Draw {
        let card = self.cards.pop();
        tracing::trace!(?card, remaining = self.cards.len(), "card dealt");
        Draw {
            card,
            remaining: self,
        }
    }

    /// Returns the card that would be dealt next.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the canonical unshuffled deck. See [`Deck::new`].
#[must_use]
pub fn create_deck() -> Deck {
    Deck::new()
}

/// Returns a shuffled copy of `deck`. See [`Deck::shuffled`].
#[must_use]
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    deck.shuffled(rng)
}

/// Deals the top card of `deck`. See [`Deck::deal`].
#[must_use]
pub fn deal_card(deck: Deck) -> Draw {
    deck.deal()
}
