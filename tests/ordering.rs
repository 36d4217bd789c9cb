//! Ordering engine tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warrs::ordering::{self, Algorithm, Direction};
use warrs::{Card, ConfigError, DECK_SIZE, Deck, SUITS};

fn arb_card() -> impl Strategy<Value = Card> {
    (0..SUITS.len(), 2u8..=14)
        .prop_map(|(suit, value)| Card::from_value(SUITS[suit], value).unwrap())
}

fn sorted_by_identity(cards: &[Card]) -> Vec<(u8, warrs::Suit)> {
    let mut keys: Vec<_> = cards
        .iter()
        .map(|card| (card.point_value(), card.suit()))
        .collect();
    keys.sort_unstable();
    keys
}

/// Counts how often each item lands in each position.
fn position_counts(algorithm: Algorithm, trials: usize) -> [[usize; 4]; 4] {
    let mut rng = ChaCha8Rng::seed_from_u64(1983);
    let mut counts = [[0usize; 4]; 4];

    for _ in 0..trials {
        let mut items: [u8; 4] = [0, 1, 2, 3];
        algorithm.apply(&mut items, &mut rng);
        for (position, item) in items.iter().enumerate() {
            counts[position][usize::from(*item)] += 1;
        }
    }

    counts
}

fn assert_uniform(counts: &[[usize; 4]; 4], trials: usize) {
    let expected = trials / 4;
    let tolerance = expected / 20;
    for (position, row) in counts.iter().enumerate() {
        for (item, &count) in row.iter().enumerate() {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "item {item} landed in position {position} {count} times, expected about {expected}"
            );
        }
    }
}

#[test]
fn fisher_yates_positions_are_uniform() {
    let trials = 40_000;
    assert_uniform(&position_counts(Algorithm::FisherYates, trials), trials);
}

#[test]
fn random_key_positions_are_uniform() {
    let trials = 40_000;
    assert_uniform(&position_counts(Algorithm::Random, trials), trials);
}

#[test]
fn names_resolve_case_insensitively() {
    assert_eq!(Algorithm::from_name("random"), Algorithm::Random);
    assert_eq!(Algorithm::from_name("FisherYates"), Algorithm::FisherYates);
    assert_eq!(
        Algorithm::from_name("ORDERBYVALUE"),
        Algorithm::OrderByValue(Direction::Ascending)
    );
    assert_eq!(Algorithm::from_name("orderbylowest"), Algorithm::OrderByLowest);
    assert_eq!(Algorithm::from_name("orderByHighest"), Algorithm::OrderByHighest);

    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
}

#[test]
fn unknown_names_fall_back_to_random() {
    assert_eq!(Algorithm::from_name("special"), Algorithm::Random);
    assert_eq!(Algorithm::from_name(""), Algorithm::Random);
    assert_eq!(
        "special".parse::<Algorithm>(),
        Err(ConfigError::UnknownAlgorithm)
    );
}

#[test]
fn sorting_ignores_the_rng_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut values: Vec<u8> = vec![7, 3, 11, 3, 14];

    Algorithm::OrderByValue(Direction::Descending).apply(&mut values, &mut rng);
    assert_eq!(values, [14, 11, 7, 3, 3]);

    Algorithm::OrderByLowest.apply(&mut values, &mut rng);
    assert_eq!(values, [3, 3, 7, 11, 14]);
}

#[test]
fn order_by_key_sorts_on_a_chosen_field() {
    let mut rows = vec![(3u8, "b"), (9, "c"), (5, "a")];

    ordering::order_by_key(&mut rows, Direction::Descending, |row| row.0);
    assert_eq!(rows, [(9, "c"), (5, "a"), (3, "b")]);

    ordering::order_by_key(&mut rows, Direction::Ascending, |row| row.1);
    assert_eq!(rows, [(5, "a"), (3, "b"), (9, "c")]);
}

#[test]
fn shuffles_handle_tiny_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for algorithm in Algorithm::ALL {
        let mut empty: [u8; 0] = [];
        algorithm.apply(&mut empty, &mut rng);

        let mut one = [9u8];
        algorithm.apply(&mut one, &mut rng);
        assert_eq!(one, [9]);
    }
}

#[test]
fn seeded_deck_shuffles_repeat() {
    for algorithm in [Algorithm::Random, Algorithm::FisherYates] {
        let mut first = Deck::new();
        let mut second = Deck::new();
        first.shuffle(algorithm, &mut ChaCha8Rng::seed_from_u64(42));
        second.shuffle(algorithm, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_ne!(first, Deck::new(), "{algorithm} left the deck untouched");
    }
}

#[test]
fn deck_sorts_by_value() {
    let mut deck = Deck::new();
    deck.shuffle(Algorithm::OrderByHighest, &mut ChaCha8Rng::seed_from_u64(0));

    let values: Vec<u8> = deck.cards().map(Card::point_value).collect();
    assert_eq!(values.len(), DECK_SIZE);
    assert_eq!(values[..4], [14, 14, 14, 14]);
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
}

proptest! {
    #[test]
    fn every_algorithm_preserves_the_cards(
        cards in prop::collection::vec(arb_card(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for algorithm in Algorithm::ALL {
            let mut reordered = cards.clone();
            algorithm.apply(&mut reordered, &mut rng);
            prop_assert_eq!(sorted_by_identity(&reordered), sorted_by_identity(&cards));
        }
    }

    #[test]
    fn highest_is_lowest_reversed(values in prop::collection::vec(2u8..=14, 0..60)) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut highest = values.clone();
        let mut lowest = values;
        Algorithm::OrderByHighest.apply(&mut highest, &mut rng);
        Algorithm::OrderByLowest.apply(&mut lowest, &mut rng);

        let len = highest.len();
        for index in 0..len {
            prop_assert_eq!(highest[index], lowest[len - 1 - index]);
        }
    }

    #[test]
    fn shuffled_deck_keeps_all_cards(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(Algorithm::FisherYates, &mut ChaCha8Rng::seed_from_u64(seed));
        let cards: Vec<Card> = deck.cards().copied().collect();
        let fresh: Vec<Card> = Deck::new().cards().copied().collect();
        prop_assert_eq!(sorted_by_identity(&cards), sorted_by_identity(&fresh));
    }
}
