//! Core domain types and the recommendation pipeline for Shelfwise.
//!
//! The crate is pure: it never touches the filesystem or the console.
//! Loaders in `shelfwise-data` build the [`Catalog`] and [`RatingStore`],
//! and interactive collaborators plug in through [`RatingSource`].
//!
//! The pipeline runs in three steps:
//! - [`similarity`] scores two rating vectors by their dot product.
//! - [`rank_neighbours`] orders every other user by similarity to a target.
//! - [`recommend`] walks the ranked neighbours and picks well-rated books the
//!   target has not rated yet.
//!
//! # Examples
//!
//! ```
//! use shelfwise_core::{
//!     Book, Catalog, RatingStore, RatingVector, RecommendationRequest, recommend_for_user,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![
//!     Book::new("A", "X"),
//!     Book::new("B", "Y"),
//!     Book::new("C", "Z"),
//! ]);
//! let mut store = RatingStore::new(catalog.len());
//! store.insert("alice", RatingVector::from_values([5, 0, 3])?)?;
//! store.insert("bob", RatingVector::from_values([3, 5, 0])?)?;
//!
//! let ratings = RatingVector::from_values([5, 0, 3])?;
//! let request = RecommendationRequest::new("alice", &ratings, 1);
//! let outcome = recommend_for_user(&catalog, &store, &request)?;
//! assert_eq!(outcome.recommendations.len(), 1);
//! assert_eq!(outcome.recommendations[0].title, "Y");
//! assert_eq!(outcome.recommendations[0].recommended_by, "bob");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod book;
pub mod elicit;
pub mod pipeline;
pub mod ranking;
pub mod rating;
pub mod recommend;
pub mod similarity;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use book::{Book, Catalog};
pub use elicit::{ElicitError, RatingSource, elicit_ratings, required_ratings};
pub use pipeline::{
    RecommendationOutcome, RecommendationRequest, ratings_for_user, recommend_for_user,
};
pub use ranking::{SimilarityScore, rank_neighbours};
pub use rating::{Rating, RatingError, RatingVector};
pub use recommend::{RecommendError, Recommendation, recommend};
pub use similarity::{LengthMismatch, similarity};
pub use store::{RatingStore, StoreError};
