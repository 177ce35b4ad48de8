//! Books and the ordered catalog that fixes their positions.
//!
//! A book is identified only by its position in the [`Catalog`]. Every
//! [`RatingVector`](crate::RatingVector) is aligned to those positions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// # Examples
/// ```
/// use shelfwise_core::Book;
///
/// let book = Book::new("Douglas Adams", "The Hitchhiker's Guide To The Galaxy");
/// assert_eq!(book.author(), "Douglas Adams");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    author: String,
    title: String,
}

impl Book {
    /// Construct a book from its author and title.
    #[must_use]
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }

    /// Return the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Return the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The fixed, ordered list of recommendable books.
///
/// Positions are stable for the lifetime of the catalog; there is no way to
/// insert or remove a book once the catalog is built.
///
/// # Examples
/// ```
/// use shelfwise_core::{Book, Catalog};
///
/// let catalog = Catalog::new(vec![Book::new("A", "X"), Book::new("B", "Y")]);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(1).map(Book::title), Some("Y"));
/// assert!(catalog.get(2).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from books in positional order.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "catalogs are assembled at runtime by loaders"
    )]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Number of books in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    /// Report whether the catalog holds no books.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Return the book at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    /// Iterate over books in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
