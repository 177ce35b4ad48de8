//! Build a rating vector for a user the store does not know.
//!
//! The driver decides which catalog positions to ask about; a
//! [`RatingSource`] supplies the answers. Sources own any validation loop,
//! so the driver only ever sees valid ratings or an I/O failure.

use std::io;

use log::debug;
use rand::Rng;
use rand::seq::index;
use thiserror::Error;

use crate::{Book, Catalog, Rating, RatingError, RatingVector};

/// Share of the catalog, as `1 / ELICITATION_FRACTION`, a new user must rate.
pub const ELICITATION_FRACTION: usize = 5;

/// Supplies individual ratings on request.
///
/// Implementations must return an actual opinion (never
/// [`Rating::UNRATED`]) and should keep asking until they get one. The
/// console prompt in `shelfwise-cli` is the production implementation.
pub trait RatingSource {
    /// Return the rating for `book`, found at `position` in the catalog.
    ///
    /// # Errors
    /// Returns an I/O error when no answer can be obtained, for example
    /// because the input stream ended.
    fn request_rating(&mut self, position: usize, book: &Book) -> io::Result<Rating>;
}

/// Errors raised while eliciting ratings.
#[derive(Debug, Error)]
pub enum ElicitError {
    /// The source failed to provide an answer.
    #[error("failed to obtain a rating for position {position}")]
    Source {
        /// Catalog position being asked about.
        position: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The source answered with "not rated".
    #[error("rating source returned no opinion for position {position}")]
    UnratedAnswer {
        /// Catalog position being asked about.
        position: usize,
    },
    /// Recording the rating failed.
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Number of ratings needed to cover at least a fifth of `catalog_len` books.
///
/// # Examples
/// ```
/// use shelfwise_core::required_ratings;
///
/// assert_eq!(required_ratings(0), 0);
/// assert_eq!(required_ratings(1), 1);
/// assert_eq!(required_ratings(10), 2);
/// assert_eq!(required_ratings(11), 3);
/// ```
#[must_use]
pub const fn required_ratings(catalog_len: usize) -> usize {
    catalog_len.div_ceil(ELICITATION_FRACTION)
}

/// Ask `source` to rate [`required_ratings`] distinct, randomly chosen books.
///
/// Every other position stays unrated. Positions are never asked about twice,
/// so the result always holds at least a fifth of the catalog in opinions.
///
/// # Errors
/// Returns [`ElicitError::Source`] when the source fails and
/// [`ElicitError::UnratedAnswer`] when it answers with `0`.
pub fn elicit_ratings<S, R>(
    catalog: &Catalog,
    source: &mut S,
    rng: &mut R,
) -> Result<RatingVector, ElicitError>
where
    S: RatingSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut ratings = RatingVector::unrated(catalog.len());
    let wanted = required_ratings(catalog.len());
    debug!("eliciting {wanted} ratings across {} books", catalog.len());

    for position in index::sample(rng, catalog.len(), wanted) {
        let book = catalog
            .get(position)
            .ok_or(RatingError::PositionOutOfRange {
                position,
                len: catalog.len(),
            })?;
        let rating = source
            .request_rating(position, book)
            .map_err(|source_err| ElicitError::Source {
                position,
                source: source_err,
            })?;
        if !rating.is_rated() {
            return Err(ElicitError::UnratedAnswer { position });
        }
        ratings.set(position, rating)?;
    }
    Ok(ratings)
}
