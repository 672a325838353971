//! Repository layer holding the in-memory collections

pub mod books;

use std::sync::Arc;

pub use books::BookStore;

/// Main repository struct, cheap to clone
#[derive(Clone, Default)]
pub struct Repository {
    pub books: Arc<BookStore>,
}

impl Repository {
    /// Create a repository around an existing book store
    pub fn new(books: BookStore) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}
