//! Nearest-neighbour ranking of stored users.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LengthMismatch, RatingStore, RatingVector, similarity};

/// Similarity of one stored user to the target.
///
/// Field order matters: the derived ordering compares `score` first and
/// falls back to `user`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimilarityScore {
    /// Dot product of the two rating vectors.
    pub score: i64,
    /// Name of the stored user.
    pub user: String,
}

impl SimilarityScore {
    /// Pair a score with the user it belongs to.
    #[must_use]
    pub fn new(score: i64, user: impl Into<String>) -> Self {
        Self {
            score,
            user: user.into(),
        }
    }
}

/// Rank every stored user except `exclude_user` by similarity to `target`.
///
/// Results are sorted by `(score, user)` descending, so equal scores fall
/// back to descending name order. When `exclude_user` is not in the store
/// (an elicited user), every stored user is ranked.
///
/// # Errors
/// Returns [`LengthMismatch`] when `target` does not match the length of the
/// stored vectors.
///
/// # Examples
/// ```
/// use shelfwise_core::{RatingStore, RatingVector, SimilarityScore, rank_neighbours};
///
/// let mut store = RatingStore::new(3);
/// store.insert("alice", RatingVector::from_values([5, 0, 3]).unwrap()).unwrap();
/// store.insert("bob", RatingVector::from_values([3, 5, 0]).unwrap()).unwrap();
///
/// let target = RatingVector::from_values([5, 0, 3]).unwrap();
/// let ranked = rank_neighbours(&target, &store, "alice").unwrap();
/// assert_eq!(ranked, vec![SimilarityScore::new(15, "bob")]);
/// ```
pub fn rank_neighbours(
    target: &RatingVector,
    store: &RatingStore,
    exclude_user: &str,
) -> Result<Vec<SimilarityScore>, LengthMismatch> {
    let mut scores = store
        .iter()
        .filter(|(user, _)| *user != exclude_user)
        .map(|(user, ratings)| {
            similarity(target, ratings).map(|score| SimilarityScore::new(score, user))
        })
        .collect::<Result<Vec<_>, _>>()?;
    // Names are unique, so the pair ordering is total.
    scores.sort_unstable_by(|left, right| right.cmp(left));
    debug!(
        "ranked {} neighbours for {exclude_user}; closest: {:?}",
        scores.len(),
        scores.first().map(|best| best.user.as_str())
    );
    Ok(scores)
}
