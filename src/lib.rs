//! Bookshelf Server
//!
//! An in-memory catalog of books exposed as a REST JSON API: list, create,
//! full replace, partial update and delete.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state, and the book store it owns, from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            services: Arc::new(services::Services::from_config(&config.store)),
        }
    }
}
