//! Business logic services

pub mod books;

use crate::{
    config::StoreConfig,
    repository::{BookStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository),
        }
    }

    /// Build a fresh repository according to the store configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        let store = if config.seed_sample_books {
            let catalog = books::sample_catalog();
            tracing::info!("Seeding store with {} sample books", catalog.len());
            BookStore::with_books(catalog)
        } else {
            BookStore::new()
        };
        Self::new(Repository::new(store))
    }
}
