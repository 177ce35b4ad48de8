//! Test-only collaborators and fixtures shared by unit and behaviour tests.

use std::collections::VecDeque;
use std::io;

use crate::{Book, Catalog, Rating, RatingSource};

/// `RatingSource` that replays scripted answers and records each request.
///
/// Once the script is exhausted the source either repeats a fixed rating or
/// reports [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    answers: VecDeque<Rating>,
    fallback: Option<Rating>,
    requested: Vec<usize>,
}

impl ScriptedSource {
    /// Answer with `answers` in order, then fail.
    #[must_use]
    pub fn new(answers: Vec<Rating>) -> Self {
        Self {
            answers: answers.into(),
            fallback: None,
            requested: Vec::new(),
        }
    }

    /// Answer every request with `rating`.
    #[must_use]
    pub fn repeating(rating: Rating) -> Self {
        Self {
            fallback: Some(rating),
            ..Self::default()
        }
    }

    /// Positions asked about so far, in request order.
    #[must_use]
    pub fn requested(&self) -> &[usize] {
        &self.requested
    }
}

impl RatingSource for ScriptedSource {
    fn request_rating(&mut self, position: usize, _book: &Book) -> io::Result<Rating> {
        self.requested.push(position);
        self.answers
            .pop_front()
            .or(self.fallback)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Catalog of `len` books titled `Title 0`, `Title 1`, and so on.
#[must_use]
pub fn numbered_catalog(len: usize) -> Catalog {
    (0..len)
        .map(|position| Book::new(format!("Author {position}"), format!("Title {position}")))
        .collect()
}
