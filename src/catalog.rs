// 📚 Book Entity + Catalog Registry
//
// A book's ISBN is its identity within the catalog: two entries may share
// a title or an author, never an ISBN.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BOOK ENTITY
// ============================================================================

/// A single catalog entry.
///
/// Immutable once created: all fields are set at insertion time and never
/// change afterwards. No format validation is applied to any field; empty
/// strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title as entered by the operator
    pub title: String,

    /// Author as entered by the operator
    pub author: String,

    /// Uniqueness key within a catalog (e.g. an ISBN)
    pub isbn: String,
}

impl Book {
    /// Create a new book entry
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ID: {})", self.title, self.author, self.isbn)
    }
}

// ============================================================================
// CATALOG REGISTRY
// ============================================================================

/// Registry of all books added during the current run.
///
/// Insertion order is preserved for listing. Invariant: no two entries
/// share an ISBN. Held in memory only; the catalog starts empty on every
/// run and is discarded on exit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Add a book to the catalog.
    ///
    /// Returns `false` and leaves the catalog unchanged when an entry with
    /// the same ISBN already exists. Linear scan; the catalog is sized for
    /// interactive, human-paced usage.
    pub fn add(&mut self, book: Book) -> bool {
        if self.find(&book.isbn).is_some() {
            return false;
        }
        self.books.push(book);
        true
    }

    /// Remove the entry with the given ISBN.
    ///
    /// Returns `true` iff an entry was removed. A miss is a normal outcome,
    /// not an error.
    pub fn remove(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.isbn != isbn);
        self.books.len() < before
    }

    /// Find a book by exact ISBN
    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Snapshot of the current contents in insertion order.
    ///
    /// The returned Vec is independent of the catalog: mutating one never
    /// affects the other.
    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Count entries
    pub fn count(&self) -> usize {
        self.books.len()
    }

    /// True when the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
