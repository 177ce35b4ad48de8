//! Fixture data shared by the CLI unit and behaviour tests.

use super::*;
use std::fs;
use tempfile::TempDir;

pub(super) const BOOKS: &str = "Douglas Adams,The Hitchhiker's Guide To The Galaxy\n\
Jane Austen,Emma\n\
Frank Herbert,Dune\n";

pub(super) const RATINGS: &str = "alice\n5 0 0 \nbob\n5 3 -3 \ncarol\n5 -3 5 \n";

/// Books and ratings files written into a scratch directory.
#[derive(Debug)]
pub(super) struct DataFiles {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) books: Utf8PathBuf,
    pub(super) ratings: Utf8PathBuf,
}

impl DataFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let books = root.join("books.txt");
        let ratings = root.join("ratings.txt");
        fs::write(&books, BOOKS).expect("write books");
        fs::write(&ratings, RATINGS).expect("write ratings");
        Self {
            _dir: dir,
            root,
            books,
            ratings,
        }
    }

    pub(super) fn args(&self) -> RecommendArgs {
        RecommendArgs {
            books: Some(self.books.clone()),
            ratings: Some(self.ratings.clone()),
            ..RecommendArgs::default()
        }
    }
}
