//! Library management backend
//!
//! Patrons, books, book items and loans are kept in flat JSON documents. The store rehydrates the
//! relations between them on read and narrows them back on write; the services apply the loan and
//! membership rules on top.

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
    pub config: Arc<AppConfig>,
    pub store: Arc<repository::JsonStore>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire store, repositories and services from configuration
    pub fn new(config: AppConfig, options: services::ServiceOptions) -> Self {
        let repository = repository::Repository::new(config.json_paths.clone());
        let services = services::Services::new(&repository, options);
        Self {
            config: Arc::new(config),
            store: repository.store,
            services: Arc::new(services),
        }
    }
}
