//! In-memory book catalog.
//!
//! The catalog is the collaborator whose mutating operations are role-gated.
//! It holds no authorization logic itself.
//!
//! # Invariants
//! - Book IDs are assigned by the catalog, start at 1 and are never reused.
//! - `copies_available` never underflows.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Number of entries returned by `most_borrowed`.
pub const MOST_BORROWED_LIMIT: usize = 3;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies_available: u32,
    pub times_borrowed: u32,
}

/// Fields supplied when adding a book. The ID is assigned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies_available: u32,
    pub times_borrowed: u32,
}

/// Books written by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBooks {
    pub author: String,
    pub books: Vec<Book>,
}

/// Errors returned by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No book has the given ID.
    #[error("book {0} not found")]
    NotFound(u32),
    /// The book has no copies left to borrow.
    #[error("no copies of book {0} are available")]
    OutOfCopies(u32),
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The catalog lock was poisoned by a panicking writer.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Default)]
struct CatalogState {
    books: BTreeMap<u32, Book>,
    next_id: u32,
}

/// Thread-safe book store.
#[derive(Debug, Default)]
pub struct BookCatalog {
    state: RwLock<CatalogState>,
}

impl BookCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All books, ordered by ID.
    pub fn all(&self) -> Result<Vec<Book>, CatalogError> {
        let state = self.state.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(state.books.values().cloned().collect())
    }

    /// Books grouped by author, ordered by author name.
    pub fn grouped_by_author(&self) -> Result<Vec<AuthorBooks>, CatalogError> {
        let state = self.state.read().map_err(|_| CatalogError::LockPoisoned)?;

        let mut groups: BTreeMap<&str, Vec<Book>> = BTreeMap::new();
        for book in state.books.values() {
            groups.entry(book.author.as_str()).or_default().push(book.clone());
        }

        Ok(groups
            .into_iter()
            .map(|(author, books)| AuthorBooks {
                author: author.to_string(),
                books,
            })
            .collect())
    }

    /// The most borrowed books, highest first. Ties keep ID order.
    pub fn most_borrowed(&self) -> Result<Vec<Book>, CatalogError> {
        let mut books = self.all()?;
        books.sort_by(|a, b| b.times_borrowed.cmp(&a.times_borrowed));
        books.truncate(MOST_BORROWED_LIMIT);
        Ok(books)
    }

    /// Add a book and return it with its assigned ID.
    pub fn add(&self, book: NewBook) -> Result<Book, CatalogError> {
        for (name, value) in [
            ("title", &book.title),
            ("author", &book.author),
            ("isbn", &book.isbn),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField(name));
            }
        }

        let mut state = self.state.write().map_err(|_| CatalogError::LockPoisoned)?;
        state.next_id += 1;
        let book = Book {
            id: state.next_id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            copies_available: book.copies_available,
            times_borrowed: book.times_borrowed,
        };
        state.books.insert(book.id, book.clone());
        drop(state);

        tracing::info!(id = book.id, title = %book.title, "book added");
        Ok(book)
    }

    /// Remove a book.
    pub fn remove(&self, id: u32) -> Result<Book, CatalogError> {
        let mut state = self.state.write().map_err(|_| CatalogError::LockPoisoned)?;
        let book = state.books.remove(&id).ok_or(CatalogError::NotFound(id))?;
        drop(state);

        tracing::info!(id, "book removed");
        Ok(book)
    }

    /// Check out one copy of a book.
    pub fn borrow(&self, id: u32) -> Result<Book, CatalogError> {
        let mut state = self.state.write().map_err(|_| CatalogError::LockPoisoned)?;
        let book = state.books.get_mut(&id).ok_or(CatalogError::NotFound(id))?;

        if book.copies_available == 0 {
            return Err(CatalogError::OutOfCopies(id));
        }
        book.copies_available -= 1;
        book.times_borrowed = book.times_borrowed.saturating_add(1);
        let book = book.clone();
        drop(state);

        tracing::info!(id, copies_available = book.copies_available, "book borrowed");
        Ok(book)
    }
}
