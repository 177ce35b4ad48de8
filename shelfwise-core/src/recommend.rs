//! Turn ranked neighbours into a bounded list of novel books.

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Catalog, LengthMismatch, RatingStore, RatingVector, SimilarityScore};

/// A book suggested to the target user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Title of the recommended book.
    pub title: String,
    /// Neighbour whose rating qualified the book.
    pub recommended_by: String,
}

impl Recommendation {
    /// Pair a title with the neighbour recommending it.
    #[must_use]
    pub fn new(title: impl Into<String>, recommended_by: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            recommended_by: recommended_by.into(),
        }
    }
}

/// Errors returned by [`recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// A rating vector does not match the catalog size.
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatch),
    /// A ranked neighbour has no ratings in the store.
    #[error("neighbour {user} is not in the rating store")]
    UnknownNeighbour {
        /// Missing neighbour.
        user: String,
    },
}

/// Collect up to `amount` books the target has not rated.
///
/// Neighbours are visited in ranked order. For each one the catalog is
/// scanned from position 0, and a book qualifies when the neighbour rated it
/// at least [`Rating::RECOMMEND_THRESHOLD`](crate::Rating::RECOMMEND_THRESHOLD),
/// the target left it unrated, and no earlier pick shares its title. The scan
/// stops as soon as `amount` books are collected. Running out of neighbours
/// is not an error; the list is simply shorter. An `amount` larger than the
/// catalog is clamped to the catalog size.
///
/// # Errors
/// - [`RecommendError::LengthMismatch`] when `target` or a neighbour's
///   ratings do not match the catalog size.
/// - [`RecommendError::UnknownNeighbour`] when a neighbour is missing from
///   `store`.
///
/// # Examples
/// ```
/// use shelfwise_core::{
///     Book, Catalog, RatingStore, RatingVector, Recommendation, SimilarityScore, recommend,
/// };
///
/// let catalog = Catalog::new(vec![Book::new("A", "X"), Book::new("B", "Y")]);
/// let mut store = RatingStore::new(2);
/// store.insert("bob", RatingVector::from_values([3, 5]).unwrap()).unwrap();
///
/// let target = RatingVector::from_values([5, 0]).unwrap();
/// let neighbours = [SimilarityScore::new(15, "bob")];
/// let picks = recommend(2, &catalog, &store, &target, &neighbours).unwrap();
/// assert_eq!(picks, vec![Recommendation::new("Y", "bob")]);
/// ```
pub fn recommend(
    amount: usize,
    catalog: &Catalog,
    store: &RatingStore,
    target: &RatingVector,
    neighbours: &[SimilarityScore],
) -> Result<Vec<Recommendation>, RecommendError> {
    if amount > catalog.len() {
        debug!(
            "clamping {amount} requested books to the catalog size {}",
            catalog.len()
        );
    }
    let amount = amount.min(catalog.len());
    if amount == 0 {
        return Ok(Vec::new());
    }
    ensure_catalog_len(catalog, target)?;

    let mut picks = Vec::with_capacity(amount);
    let mut seen_titles: HashSet<&str> = HashSet::new();
    for neighbour in neighbours {
        let theirs = store
            .get(&neighbour.user)
            .ok_or_else(|| RecommendError::UnknownNeighbour {
                user: neighbour.user.clone(),
            })?;
        ensure_catalog_len(catalog, theirs)?;

        let candidates = catalog.iter().zip(theirs.iter()).zip(target.iter());
        for ((book, their_rating), own_rating) in candidates {
            if their_rating.is_recommendable()
                && !own_rating.is_rated()
                && seen_titles.insert(book.title())
            {
                picks.push(Recommendation::new(book.title(), neighbour.user.as_str()));
                if picks.len() == amount {
                    return Ok(picks);
                }
            }
        }
    }
    debug!(
        "neighbours exhausted after {} of {amount} recommendations",
        picks.len()
    );
    Ok(picks)
}

const fn ensure_catalog_len(
    catalog: &Catalog,
    ratings: &RatingVector,
) -> Result<(), LengthMismatch> {
    if ratings.len() == catalog.len() {
        Ok(())
    } else {
        Err(LengthMismatch {
            expected: catalog.len(),
            actual: ratings.len(),
        })
    }
}
