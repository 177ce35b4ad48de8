//! Property-based tests for similarity, ranking and recommendation.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `similarity(a, b) == similarity(b, a)`.
//! - **Self-similarity:** equals the sum of squares and is zero only for an
//!   all-unrated vector.
//! - **Determinism:** ranking the same inputs twice yields the same order.
//! - **Bounded, unique output:** never more than `amount` picks and no title
//!   twice.
//! - **Novelty:** no pick lands on a position the target already rated.
//! - **Provenance:** every pick is vouched for by its recommending neighbour.

use proptest::prelude::*;
use shelfwise_core::{
    Book, Catalog, Rating, RatingStore, RatingVector, rank_neighbours, recommend, similarity,
};

const VOCABULARY: [i8; 7] = [-5, -3, -1, 0, 1, 3, 5];

fn rating_vector(len: usize) -> impl Strategy<Value = RatingVector> {
    let rating = proptest::sample::select(VOCABULARY.to_vec());
    proptest::collection::vec(rating, len).prop_map(|values| {
        RatingVector::from_values(values)
            .unwrap_or_else(|err| panic!("vocabulary values are valid: {err}"))
    })
}

fn vector_pair() -> impl Strategy<Value = (RatingVector, RatingVector)> {
    (0_usize..12).prop_flat_map(|len| (rating_vector(len), rating_vector(len)))
}

/// A catalog with a small title pool so duplicate titles occur, a store of
/// up to five users, and a target vector.
fn world() -> impl Strategy<Value = (Catalog, RatingStore, RatingVector, usize)> {
    (1_usize..8).prop_flat_map(|len| {
        (
            proptest::collection::vec(0_u8..4, len),
            proptest::collection::vec(rating_vector(len), 1..6),
            rating_vector(len),
            0..=len,
        )
            .prop_map(move |(titles, users, target, amount)| {
                let catalog: Catalog = titles
                    .iter()
                    .map(|title| Book::new("Author", format!("T{title}")))
                    .collect();
                let mut store = RatingStore::new(len);
                for (idx, ratings) in users.into_iter().enumerate() {
                    store
                        .insert(format!("user{idx}"), ratings)
                        .unwrap_or_else(|err| panic!("generated vectors match: {err}"));
                }
                (catalog, store, target, amount)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn similarity_is_symmetric((a, b) in vector_pair()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn self_similarity_is_sum_of_squares(a in (0_usize..12).prop_flat_map(rating_vector)) {
        let expected: i64 = a.iter().map(|r| i64::from(r) * i64::from(r)).sum();
        let score = similarity(&a, &a).unwrap_or_else(|err| panic!("same length: {err}"));
        prop_assert_eq!(score, expected);
        prop_assert!(score >= 0);
        prop_assert_eq!(score == 0, a.iter().all(|r| !r.is_rated()));
    }

    #[test]
    fn ranking_is_deterministic_and_sorted((_, store, target, _) in world()) {
        let first = rank_neighbours(&target, &store, "user0")
            .unwrap_or_else(|err| panic!("rank: {err}"));
        let second = rank_neighbours(&target, &store, "user0")
            .unwrap_or_else(|err| panic!("rank: {err}"));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), store.len() - 1);
        for pair in first.windows(2) {
            if let [higher, lower] = pair {
                prop_assert!(higher >= lower, "{:?} ranked above {:?}", higher, lower);
            }
        }
    }

    #[test]
    fn recommendations_respect_invariants((catalog, store, target, amount) in world()) {
        let neighbours = rank_neighbours(&target, &store, "user0")
            .unwrap_or_else(|err| panic!("rank: {err}"));
        let picks = recommend(amount, &catalog, &store, &target, &neighbours)
            .unwrap_or_else(|err| panic!("recommend: {err}"));

        prop_assert!(picks.len() <= amount);

        let mut titles: Vec<&str> = picks.iter().map(|pick| pick.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), picks.len(), "duplicate titles in {:?}", picks);

        for pick in &picks {
            let theirs = store
                .get(&pick.recommended_by)
                .unwrap_or_else(|| panic!("{} is stored", pick.recommended_by));
            let vouched = catalog
                .iter()
                .zip(theirs.iter())
                .zip(target.iter())
                .any(|((book, their_rating), own_rating)| {
                    book.title() == pick.title
                        && their_rating.is_recommendable()
                        && own_rating == Rating::UNRATED
                });
            prop_assert!(vouched, "{:?} is not vouched for", pick);
        }
    }
}
