//! Deck engine integration tests.

use std::collections::HashSet;

use ace_showdown::deck::{create_deck, deal_card, shuffle_deck};
use ace_showdown::{Card, DECK_SIZE, Deck, Outcome, Rank, Suit, compare_cards};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len()).prop_map(|(s, r)| card(Suit::ALL[s], Rank::ALL[r]))
}

#[test]
fn created_deck_is_full_cross_product() {
    let deck = create_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn rank_value_table() {
    let expected = [
        (Rank::Two, 2),
        (Rank::Three, 3),
        (Rank::Four, 4),
        (Rank::Five, 5),
        (Rank::Six, 6),
        (Rank::Seven, 7),
        (Rank::Eight, 8),
        (Rank::Nine, 9),
        (Rank::Ten, 10),
        (Rank::Jack, 11),
        (Rank::Queen, 12),
        (Rank::King, 13),
        (Rank::Ace, 14),
    ];
    for (rank, value) in expected {
        assert_eq!(rank.value(), value);
        assert_eq!(card(Suit::Spades, rank).value(), value);
    }
}

#[test]
fn shuffle_keeps_cards_and_input() {
    let deck = create_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let shuffled = shuffle_deck(&deck, &mut rng);

    assert_eq!(deck, create_deck());
    assert_eq!(shuffled.len(), DECK_SIZE);

    let mut before = deck.cards().to_vec();
    let mut after = shuffled.cards().to_vec();
    before.sort_by_key(|c| (c.suit, c.rank));
    after.sort_by_key(|c| (c.suit, c.rank));
    assert_eq!(before, after);
}

#[test]
fn shuffle_places_top_card_uniformly() {
    // Chi-square over the landing position of the original top card.
    const TRIALS: usize = DECK_SIZE * 200;
    // Well above the 51 degrees of freedom critical value at p = 1e-6.
    const LIMIT: f64 = 115.0;

    let deck = create_deck();
    let tracked = *deck.top().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts = [0usize; DECK_SIZE];

    for _ in 0..TRIALS {
        let shuffled = deck.shuffled(&mut rng);
        let position = shuffled.cards().iter().position(|c| *c == tracked).unwrap();
        counts[position] += 1;
    }

    let expected = TRIALS as f64 / DECK_SIZE as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi_square < LIMIT, "chi-square {chi_square} too large");
}

#[test]
fn shuffle_produces_every_ordering_evenly() {
    // Four cards have 24 orderings; 23 degrees of freedom.
    const TRIALS: usize = 24 * 1000;
    const LIMIT: f64 = 71.0;

    let deck = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Ace),
    ])
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen: Vec<(Vec<Card>, usize)> = Vec::new();

    for _ in 0..TRIALS {
        let order = deck.shuffled(&mut rng).cards().to_vec();
        match seen.iter_mut().find(|(o, _)| *o == order) {
            Some((_, count)) => *count += 1,
            None => seen.push((order, 1)),
        }
    }

    assert_eq!(seen.len(), 24);
    let expected = TRIALS as f64 / 24.0;
    let chi_square: f64 = seen
        .iter()
        .map(|&(_, count)| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi_square < LIMIT, "chi-square {chi_square} too large");
}

#[test]
fn deal_takes_from_the_end() {
    let deck = create_deck();
    let draw = deal_card(deck);

    assert_eq!(draw.card, Some(card(Suit::Spades, Rank::Ace)));
    assert_eq!(draw.remaining.len(), DECK_SIZE - 1);
    assert!(!draw.remaining.contains(&card(Suit::Spades, Rank::Ace)));
}

#[test]
fn deal_from_empty_deck_yields_nothing() {
    let draw = Deck::empty().deal();
    assert_eq!(draw.card, None);
    assert!(draw.remaining.is_empty());
}

#[test]
fn deal_two_cards_then_compare() {
    let two_of_spades = card(Suit::Spades, Rank::Two);
    let ace_of_clubs = card(Suit::Clubs, Rank::Ace);
    let deck = Deck::from_cards(vec![two_of_spades, ace_of_clubs]).unwrap();

    let first = deck.deal();
    assert_eq!(first.card, Some(ace_of_clubs));
    assert_eq!(first.remaining.cards(), &[two_of_spades]);

    let second = first.remaining.deal();
    assert_eq!(second.card, Some(two_of_spades));
    assert!(second.remaining.is_empty());

    assert_eq!(compare_cards(ace_of_clubs, two_of_spades), Outcome::Player);
}

#[test]
fn equal_ranks_tie_across_suits() {
    assert_eq!(
        compare_cards(card(Suit::Hearts, Rank::Seven), card(Suit::Diamonds, Rank::Seven)),
        Outcome::Tie
    );
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in any_card(), b in any_card()) {
        let forward = compare_cards(a, b);
        let backward = compare_cards(b, a);
        prop_assert_eq!(forward, backward.inverse());
        if a.value() == b.value() {
            prop_assert_eq!(forward, Outcome::Tie);
        }
    }

    #[test]
    fn dealing_shrinks_by_one(seed in any::<u64>(), deals in 0usize..=DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = create_deck().shuffled(&mut rng);
        for _ in 0..deals {
            deck = deck.deal().remaining;
        }

        let before = deck.len();
        let draw = deck.deal();
        match draw.card {
            Some(dealt) => {
                prop_assert_eq!(draw.remaining.len(), before - 1);
                prop_assert!(!draw.remaining.contains(&dealt));
            }
            None => {
                prop_assert_eq!(before, 0);
                prop_assert!(draw.remaining.is_empty());
            }
        }
    }
}
