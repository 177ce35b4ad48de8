//! End-to-end recommendation for a single user request.
//!
//! Everything the pipeline needs travels as arguments: the catalog, the
//! store and a [`RecommendationRequest`] describing who is asking.

use std::borrow::Cow;

use log::debug;
use rand::Rng;

use crate::{
    Catalog, ElicitError, RatingSource, RatingStore, RatingVector, RecommendError,
    Recommendation, SimilarityScore, elicit_ratings, rank_neighbours, recommend,
};

/// Who is asking, with which ratings, for how many books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRequest<'a> {
    /// Name of the target user.
    pub user: &'a str,
    /// The target's own ratings, stored or elicited.
    pub ratings: &'a RatingVector,
    /// Maximum number of recommendations.
    pub amount: usize,
}

impl<'a> RecommendationRequest<'a> {
    /// Bundle a request.
    #[must_use]
    pub const fn new(user: &'a str, ratings: &'a RatingVector, amount: usize) -> Self {
        Self {
            user,
            ratings,
            amount,
        }
    }
}

/// Result of [`recommend_for_user`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationOutcome {
    /// Every other user, most similar first.
    pub neighbours: Vec<SimilarityScore>,
    /// Books picked from the neighbours.
    pub recommendations: Vec<Recommendation>,
}

/// Rank neighbours for the request and pick recommendations from them.
///
/// # Errors
/// Propagates [`RecommendError`] from ranking and selection.
pub fn recommend_for_user(
    catalog: &Catalog,
    store: &RatingStore,
    request: &RecommendationRequest<'_>,
) -> Result<RecommendationOutcome, RecommendError> {
    let neighbours = rank_neighbours(request.ratings, store, request.user)?;
    let recommendations = recommend(
        request.amount,
        catalog,
        store,
        request.ratings,
        &neighbours,
    )?;
    debug!(
        "recommended {} of {} requested books to {}",
        recommendations.len(),
        request.amount,
        request.user
    );
    Ok(RecommendationOutcome {
        neighbours,
        recommendations,
    })
}

/// Look up `user` in the store, eliciting ratings only when absent.
///
/// # Errors
/// Propagates [`ElicitError`] when elicitation fails.
pub fn ratings_for_user<'a, S, R>(
    catalog: &Catalog,
    store: &'a RatingStore,
    user: &str,
    source: &mut S,
    rng: &mut R,
) -> Result<Cow<'a, RatingVector>, ElicitError>
where
    S: RatingSource + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(stored) = store.get(user) {
        return Ok(Cow::Borrowed(stored));
    }
    debug!("{user} is not in the rating store; eliciting ratings");
    elicit_ratings(catalog, source, rng).map(Cow::Owned)
}
