//! Ratings and per-user rating vectors.
//!
//! Ratings come from a fixed vocabulary: `-5`, `-3`, `-1`, `1`, `3` and `5`,
//! with `0` reserved for "not rated". A [`RatingVector`] holds one rating per
//! catalog position.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised when constructing or updating ratings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The value is not part of the rating vocabulary.
    #[error("rating {value} is not one of -5, -3, -1, 0, 1, 3, 5")]
    OutsideVocabulary {
        /// Offending value.
        value: i64,
    },
    /// `0` was offered where an actual opinion is required.
    #[error("rating must not be 0 when eliciting an opinion")]
    Unrated,
    /// A position beyond the end of the vector was addressed.
    #[error("position {position} is outside a rating vector of length {len}")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Length of the vector.
        len: usize,
    },
}

/// A single rating drawn from the fixed vocabulary.
///
/// # Examples
/// ```
/// use shelfwise_core::Rating;
///
/// let rating = Rating::try_from(3).unwrap();
/// assert_eq!(rating.value(), 3);
/// assert!(rating.is_recommendable());
/// assert!(Rating::try_from(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct Rating(i8);

impl Rating {
    /// Marker for a book the user has not rated.
    pub const UNRATED: Self = Self(0);

    /// Ratings a user may give when asked for an opinion.
    pub const ELICITABLE: [i8; 6] = [-5, -3, -1, 1, 3, 5];

    /// Lowest rating a neighbour must give before a book is recommended.
    pub const RECOMMEND_THRESHOLD: i8 = 3;

    /// Validate a rating supplied in answer to an elicitation request.
    ///
    /// Unlike [`Rating::try_from`], `0` is rejected.
    ///
    /// # Errors
    /// Returns [`RatingError::Unrated`] for `0` and
    /// [`RatingError::OutsideVocabulary`] for any other value outside the
    /// vocabulary.
    pub fn elicited(value: i64) -> Result<Self, RatingError> {
        let rating = Self::try_from(value)?;
        if rating.is_rated() {
            Ok(rating)
        } else {
            Err(RatingError::Unrated)
        }
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Report whether this is an actual opinion rather than [`Rating::UNRATED`].
    #[must_use]
    pub const fn is_rated(self) -> bool {
        self.0 != 0
    }

    /// Report whether a neighbour giving this rating vouches for the book.
    #[must_use]
    pub const fn is_recommendable(self) -> bool {
        self.0 >= Self::RECOMMEND_THRESHOLD
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Ok(Self::UNRATED);
        }
        Self::ELICITABLE
            .iter()
            .copied()
            .find(|&candidate| i64::from(candidate) == value)
            .map(Self)
            .ok_or(RatingError::OutsideVocabulary { value })
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

/// Ratings for every catalog position, `0` meaning "not rated".
///
/// # Examples
/// ```
/// use shelfwise_core::{Rating, RatingVector};
///
/// let mut ratings = RatingVector::unrated(3);
/// ratings.set(1, Rating::try_from(5).unwrap()).unwrap();
/// assert_eq!(ratings.rated_count(), 1);
/// assert_eq!(ratings.get(1).map(Rating::value), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RatingVector {
    ratings: Vec<Rating>,
}

impl RatingVector {
    /// Wrap already validated ratings.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "vectors are assembled at runtime"
    )]
    #[must_use]
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self { ratings }
    }

    /// Build a vector of `len` unrated positions.
    #[must_use]
    pub fn unrated(len: usize) -> Self {
        Self::new(vec![Rating::UNRATED; len])
    }

    /// Validate raw values and build a vector from them.
    ///
    /// # Errors
    /// Returns [`RatingError::OutsideVocabulary`] for the first invalid value.
    pub fn from_values<I>(values: I) -> Result<Self, RatingError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        values
            .into_iter()
            .map(|value| Rating::try_from(value.into()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Number of positions, which matches the catalog size.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Report whether the vector has no positions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Return the rating at `position`, if in range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Rating> {
        self.ratings.get(position).copied()
    }

    /// Overwrite the rating at `position`.
    ///
    /// # Errors
    /// Returns [`RatingError::PositionOutOfRange`] when `position` is not
    /// inside the vector.
    pub fn set(&mut self, position: usize, rating: Rating) -> Result<(), RatingError> {
        let len = self.ratings.len();
        let slot = self
            .ratings
            .get_mut(position)
            .ok_or(RatingError::PositionOutOfRange { position, len })?;
        *slot = rating;
        Ok(())
    }

    /// Iterate over ratings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Rating> + '_ {
        self.ratings.iter().copied()
    }

    /// Count positions holding an actual opinion.
    #[must_use]
    pub fn rated_count(&self) -> usize {
        self.iter().filter(|rating| rating.is_rated()).count()
    }

    /// Borrow the underlying ratings.
    #[must_use]
    pub fn as_slice(&self) -> &[Rating] {
        &self.ratings
    }
}
