//! Facade crate for the Shelfwise book recommender.
//!
//! This crate re-exports the core domain types and pipeline, and exposes the
//! flat-file loaders behind the `data` feature.

#![forbid(unsafe_code)]

pub use shelfwise_core::{
    Book, Catalog, ElicitError, LengthMismatch, Rating, RatingError, RatingSource, RatingStore,
    RatingVector, RecommendError, Recommendation, RecommendationOutcome, RecommendationRequest,
    SimilarityScore, StoreError, elicit_ratings, rank_neighbours, ratings_for_user, recommend,
    recommend_for_user, required_ratings, similarity,
};

#[cfg(feature = "data")]
pub use shelfwise_data::{LoadError, ParseError, load_catalog, load_ratings};
