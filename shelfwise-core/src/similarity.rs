//! Dot-product similarity between two rating vectors.
//!
//! Scores are deliberately not normalised: users who agree on many books
//! outrank users who agree on few.

use thiserror::Error;

use crate::RatingVector;

/// Two rating vectors that should align to the same catalog differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating vector length mismatch: expected {expected}, found {actual}")]
pub struct LengthMismatch {
    /// Length of the reference vector.
    pub expected: usize,
    /// Length of the vector that failed to match.
    pub actual: usize,
}

/// Sum of elementwise products of `a` and `b`.
///
/// Unrated positions are `0` and therefore contribute nothing.
///
/// # Errors
/// Returns [`LengthMismatch`] when the vectors differ in length; the shorter
/// vector is never zero-padded.
///
/// # Examples
/// ```
/// use shelfwise_core::{RatingVector, similarity};
///
/// let alice = RatingVector::from_values([5, 0, 3]).unwrap();
/// let bob = RatingVector::from_values([3, 5, 0]).unwrap();
/// assert_eq!(similarity(&alice, &bob), Ok(15));
/// ```
pub fn similarity(a: &RatingVector, b: &RatingVector) -> Result<i64, LengthMismatch> {
    if a.len() != b.len() {
        return Err(LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(left, right)| i64::from(left) * i64::from(right))
        .sum())
}
