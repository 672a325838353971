//! Books service

use crate::{
    models::{Book, BookCandidate, BookPatch},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn create(&self, candidate: BookCandidate) -> Book {
        let book = self.repository.books.create(candidate);
        tracing::debug!(id = book.id, "Book created");
        book
    }

    /// Full replace; `None` when no book has this id
    pub fn replace(&self, id: i64, candidate: BookCandidate) -> Option<Book> {
        let book = self.repository.books.replace(id, candidate);
        tracing::debug!(id, found = book.is_some(), "Book replaced");
        book
    }

    /// Partial update; `None` when no book has this id
    pub fn merge(&self, id: i64, patch: BookPatch) -> Option<Book> {
        if patch.is_empty() {
            tracing::debug!(id, "Merge with no recognized fields");
        }
        let book = self.repository.books.merge(id, patch);
        tracing::debug!(id, found = book.is_some(), "Book merged");
        book
    }

    pub fn delete(&self, id: i64) -> bool {
        let deleted = self.repository.books.delete(id);
        tracing::debug!(id, deleted, "Book delete");
        deleted
    }
}

/// The catalog the server can start with, ids 1 to 10
pub fn sample_catalog() -> Vec<Book> {
    [
        (
            "To Kill a Mockingbird",
            "A young girl's experience with racial injustice in a small Alabama town.",
            "Harper Lee",
        ),
        (
            "The Catcher in the Rye",
            "A disillusioned teenager's struggles with the idea of growing up.",
            "J.D. Salinger",
        ),
        (
            "1984",
            "A dystopian novel depicting a totalitarian future society.",
            "George Orwell",
        ),
        (
            "1990",
            "A novel depicting a totalitarian future society.",
            "George Orwell",
        ),
        (
            "The Great Gatsby",
            "A young man's quest to win the heart of his beloved in the roaring twenties.",
            "F. Scott Fitzgerald",
        ),
        (
            "The Count of Monte Cristo",
            "A man's quest for revenge after being betrayed by his friends.",
            "Alexandre Dumas",
        ),
        (
            "The Picture of Dorian Gray",
            "A young man's descent into madness and sin after selling his soul for eternal youth.",
            "Oscar Wilde",
        ),
        (
            "Alice in Wonderland",
            "A young girl's adventures in a fantastical world.",
            "Lewis Carroll",
        ),
        (
            "The Adventures of Sherlock Holmes",
            "The stories of a brilliant detective and his trusty sidekick.",
            "Sir Arthur Conan Doyle",
        ),
        (
            "The War of the Worlds",
            "A Martian invasion of Earth.",
            "H.G. Wells",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, description, author), id)| {
        Book::from_candidate(id, BookCandidate::new(title, description, author))
    })
    .collect()
}
