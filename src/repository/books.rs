//! Books repository

use std::sync::Arc;

use async_trait::async_trait;

use super::{store::JsonStore, BookRepository};
use crate::{
    error::AppResult,
    models::{Book, BookItem},
};

#[derive(Clone)]
pub struct JsonBookRepository {
    store: Arc<JsonStore>,
}

impl JsonBookRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn get_book_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let needle = title.to_lowercase();
        self.store
            .read(|data| {
                data.books
                    .iter()
                    .find(|b| b.title.to_lowercase() == needle)
                    .map(|b| data.populate_book(b))
            })
            .await
    }

    async fn get_book_items_by_book_id(&self, book_id: i32) -> AppResult<Vec<BookItem>> {
        self.store
            .read(|data| {
                data.book_items
                    .iter()
                    .filter(|bi| bi.book_id == book_id)
                    .map(|bi| data.populate_book_item(bi))
                    .collect()
            })
            .await
    }
}
