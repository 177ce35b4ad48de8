//! In-memory mapping from user name to rating vector.

use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::RatingVector;

/// Errors returned by [`RatingStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The vector does not cover every catalog position.
    #[error("ratings for {user} have length {actual}, catalog has {expected} books")]
    LengthMismatch {
        /// User whose ratings were rejected.
        user: String,
        /// Catalog size.
        expected: usize,
        /// Length of the rejected vector.
        actual: usize,
    },
}

/// Known users and their ratings, all aligned to one catalog.
///
/// The store is built once at load time and read-only afterwards. Inserting
/// a name twice replaces the earlier vector.
///
/// # Examples
/// ```
/// use shelfwise_core::{RatingStore, RatingVector};
///
/// let mut store = RatingStore::new(2);
/// store.insert("alice", RatingVector::from_values([5, 0]).unwrap()).unwrap();
/// assert!(store.contains("alice"));
/// assert!(store.insert("bob", RatingVector::from_values([5]).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingStore {
    catalog_len: usize,
    users: HashMap<String, RatingVector>,
}

impl RatingStore {
    /// Create an empty store for a catalog of `catalog_len` books.
    #[must_use]
    pub fn new(catalog_len: usize) -> Self {
        Self {
            catalog_len,
            users: HashMap::new(),
        }
    }

    /// Insert or replace the ratings for `user`.
    ///
    /// Returns the vector previously stored under the same name.
    ///
    /// # Errors
    /// Returns [`StoreError::LengthMismatch`] when `ratings` does not have
    /// exactly one entry per catalog position.
    pub fn insert(
        &mut self,
        user: impl Into<String>,
        ratings: RatingVector,
    ) -> Result<Option<RatingVector>, StoreError> {
        let name = user.into();
        if ratings.len() != self.catalog_len {
            return Err(StoreError::LengthMismatch {
                user: name,
                expected: self.catalog_len,
                actual: ratings.len(),
            });
        }
        let previous = self.users.insert(name.clone(), ratings);
        if previous.is_some() {
            warn!("ratings for {name} appear more than once; keeping the last record");
        }
        Ok(previous)
    }

    /// Return the ratings stored for `user`.
    #[must_use]
    pub fn get(&self, user: &str) -> Option<&RatingVector> {
        self.users.get(user)
    }

    /// Report whether `user` has stored ratings.
    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Report whether no users are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Catalog size every stored vector matches.
    #[must_use]
    pub const fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    /// Iterate over users and their ratings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RatingVector)> + '_ {
        self.users
            .iter()
            .map(|(user, ratings)| (user.as_str(), ratings))
    }
}
