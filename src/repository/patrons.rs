//! Patrons repository

use std::sync::Arc;

use async_trait::async_trait;

use super::{store::JsonStore, PatronRepository};
use crate::{
    error::{AppError, AppResult},
    models::Patron,
};

#[derive(Clone)]
pub struct JsonPatronRepository {
    store: Arc<JsonStore>,
}

impl JsonPatronRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PatronRepository for JsonPatronRepository {
    async fn get_patron(&self, id: i32) -> AppResult<Option<Patron>> {
        self.store
            .read(|data| {
                data.patrons
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| data.populate_patron(p))
            })
            .await
    }

    /// Case-insensitive substring match on the name, ordered by name
    async fn search_patrons(&self, term: &str) -> AppResult<Vec<Patron>> {
        let needle = term.to_lowercase();
        self.store
            .read(|data| {
                let mut matches: Vec<&Patron> = data
                    .patrons
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .collect();
                matches.sort_by(|a, b| a.name.cmp(&b.name));
                data.populate_patrons(matches)
            })
            .await
    }

    async fn update_patron(&self, patron: &Patron) -> AppResult<()> {
        if self.store.replace_patron(patron).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Patron {} not found", patron.id)))
        }
    }
}
