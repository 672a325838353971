//! In-memory book store

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{Book, BookCandidate, BookPatch};

/// Ordered, mutex-guarded collection of books.
///
/// Every operation holds the lock for its whole duration, listing included,
/// so id assignment and append in `create` can never interleave with another
/// caller. Returned books are clones; they do not follow later mutations.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds `books`, keeping their ids.
    ///
    /// Ids must be unique; later duplicates are dropped.
    pub fn with_books(books: Vec<Book>) -> Self {
        let mut unique: Vec<Book> = Vec::with_capacity(books.len());
        for book in books {
            if !unique.iter().any(|b| b.id == book.id) {
                unique.push(book);
            }
        }
        Self {
            books: Mutex::new(unique),
        }
    }

    // A panic can only happen outside of a half-done push/remove, so the
    // collection behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All live books in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.lock().clone()
    }

    /// Store a new book under `1 + max(id)`, or 1 when empty.
    ///
    /// Deleting the highest id frees it for the next create.
    pub fn create(&self, candidate: BookCandidate) -> Book {
        let mut books = self.lock();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = Book::from_candidate(id, candidate);
        books.push(book.clone());
        book
    }

    /// Overwrite all mutable fields of book `id`
    pub fn replace(&self, id: i64, candidate: BookCandidate) -> Option<Book> {
        let mut books = self.lock();
        let book = books.iter_mut().find(|b| b.id == id)?;
        book.replace_with(candidate);
        Some(book.clone())
    }

    /// Overwrite only the fields set in `patch`
    pub fn merge(&self, id: i64, patch: BookPatch) -> Option<Book> {
        let mut books = self.lock();
        let book = books.iter_mut().find(|b| b.id == id)?;
        book.apply(patch);
        Some(book.clone())
    }

    /// Returns true if the book existed and was deleted, false otherwise
    pub fn delete(&self, id: i64) -> bool {
        let mut books = self.lock();
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
