//! Catalog lookup service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Book, BookItem},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Find a book by its exact title, ignoring case
    pub async fn get_book_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        self.books.get_book_by_title(title).await
    }

    /// List the physical copies of a book
    pub async fn get_book_items(&self, book_id: i32) -> AppResult<Vec<BookItem>> {
        self.books.get_book_items_by_book_id(book_id).await
    }
}
