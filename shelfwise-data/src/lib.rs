//! Flat-file loaders for the Shelfwise catalog and rating store.
//!
//! Responsibilities:
//! - Parse the books file (`author,title` per line) into a [`Catalog`].
//! - Parse the ratings file (a name line followed by a ratings line, per
//!   user) into a [`RatingStore`] aligned to that catalog.
//!
//! Boundaries:
//! - Do not encode recommendation rules (they live in `shelfwise-core`).
//! - Reject malformed input at load time; the core never sees it.

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use shelfwise_core::{Book, Catalog, Rating, RatingError, RatingStore, RatingVector, StoreError};
use thiserror::Error;

/// Errors raised while parsing the books or ratings text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A books line does not hold exactly one comma.
    #[error("line {line}: expected `author,title`, found {content:?}")]
    MalformedBook {
        /// Offending line.
        line: usize,
        /// Raw line content.
        content: String,
    },
    /// A user name line is not followed by a ratings line.
    #[error("line {line}: user {user:?} has no ratings line")]
    MissingRatings {
        /// Line holding the user name.
        line: usize,
        /// Name without ratings.
        user: String,
    },
    /// A ratings token is not an integer.
    #[error("line {line}: {token:?} is not an integer rating")]
    InvalidRatingToken {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        token: String,
    },
    /// A rating falls outside the vocabulary.
    #[error("line {line}: {source}")]
    InvalidRating {
        /// Offending line.
        line: usize,
        /// Validation failure.
        #[source]
        source: RatingError,
    },
    /// The ratings do not cover every catalog position.
    #[error("line {line}: {source}")]
    Store {
        /// Offending line.
        line: usize,
        /// Store rejection.
        #[source]
        source: StoreError,
    },
}

/// Errors raised while loading a data file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("failed to read {path}")]
    Read {
        /// File being read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file content is malformed.
    #[error("failed to parse {path}")]
    Parse {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: ParseError,
    },
}

/// Load the catalog from a books file.
///
/// # Errors
/// Returns [`LoadError::Read`] when the file cannot be read and
/// [`LoadError::Parse`] when a line is malformed.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use shelfwise_data::load_catalog;
///
/// let catalog = load_catalog(Utf8Path::new("books.txt")).expect("load books");
/// println!("{} books", catalog.len());
/// ```
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, LoadError> {
    let contents = read(path)?;
    let catalog = parse_catalog(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} books from {path}", catalog.len());
    Ok(catalog)
}

/// Load the rating store from a ratings file, validating every vector
/// against a catalog of `catalog_len` books.
///
/// # Errors
/// Returns [`LoadError::Read`] when the file cannot be read and
/// [`LoadError::Parse`] when the content is malformed.
pub fn load_ratings(path: &Utf8Path, catalog_len: usize) -> Result<RatingStore, LoadError> {
    let contents = read(path)?;
    let store = parse_ratings(&contents, catalog_len).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded ratings for {} users from {path}", store.len());
    Ok(store)
}

fn read(path: &Utf8Path) -> Result<String, LoadError> {
    shelfwise_fs::read_utf8_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `author,title` lines into a catalog. Blank lines are skipped.
///
/// # Errors
/// Returns [`ParseError::MalformedBook`] for a line without exactly one
/// comma.
///
/// # Examples
/// ```
/// use shelfwise_data::parse_catalog;
///
/// let catalog = parse_catalog("Douglas Adams,The Hitchhiker's Guide To The Galaxy\n").unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn parse_catalog(contents: &str) -> Result<Catalog, ParseError> {
    numbered_lines(contents)
        .map(|(line, content)| {
            content
                .split_once(',')
                .filter(|(_, title)| !title.contains(','))
                .map(|(author, title)| Book::new(author.trim(), title.trim()))
                .ok_or_else(|| ParseError::MalformedBook {
                    line,
                    content: content.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Catalog::new)
}

/// Parse alternating name and ratings lines into a store.
///
/// Ratings are whitespace-separated integers, so trailing spaces are
/// tolerated. A repeated name replaces the earlier record.
///
/// # Errors
/// Returns a [`ParseError`] for a dangling name, a non-integer token, a
/// rating outside the vocabulary, or a ratings line of the wrong length.
///
/// # Examples
/// ```
/// use shelfwise_data::parse_ratings;
///
/// let store = parse_ratings("alice\n5 0 3 \nbob\n3 5 0 \n", 3).unwrap();
/// assert_eq!(store.len(), 2);
/// ```
pub fn parse_ratings(contents: &str, catalog_len: usize) -> Result<RatingStore, ParseError> {
    let mut store = RatingStore::new(catalog_len);
    let mut lines = numbered_lines(contents);
    while let Some((name_line, name)) = lines.next() {
        let Some((line, values)) = lines.next() else {
            return Err(ParseError::MissingRatings {
                line: name_line,
                user: name.to_owned(),
            });
        };
        let ratings = parse_rating_line(line, values)?;
        store
            .insert(name, ratings)
            .map_err(|source| ParseError::Store { line, source })?;
    }
    Ok(store)
}

fn parse_rating_line(line: usize, values: &str) -> Result<RatingVector, ParseError> {
    values
        .split_whitespace()
        .map(|token| {
            let value: i64 = token.parse().map_err(|_| ParseError::InvalidRatingToken {
                line,
                token: token.to_owned(),
            })?;
            Rating::try_from(value).map_err(|source| ParseError::InvalidRating { line, source })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(RatingVector::new)
}

/// Non-blank, trimmed lines paired with their 1-based line numbers.
fn numbered_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, content)| (idx + 1, content.trim()))
        .filter(|(_, content)| !content.is_empty())
}
