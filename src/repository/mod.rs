//! Repository layer over the JSON store
//!
//! Each repository is a thin query adapter: it makes sure the store is loaded, picks the matching
//! flat records and returns them populated. Services depend on the traits so they can be exercised
//! without touching the filesystem.

pub mod books;
pub mod loans;
pub mod patrons;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::JsonPaths,
    error::AppResult,
    models::{Book, BookItem, Loan, Patron},
};

pub use books::JsonBookRepository;
pub use loans::JsonLoanRepository;
pub use patrons::JsonPatronRepository;
pub use store::{Collections, JsonStore};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// First book whose title equals `title`, ignoring case
    async fn get_book_by_title(&self, title: &str) -> AppResult<Option<Book>>;

    async fn get_book_items_by_book_id(&self, book_id: i32) -> AppResult<Vec<BookItem>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatronRepository: Send + Sync {
    async fn get_patron(&self, id: i32) -> AppResult<Option<Patron>>;

    /// Patrons whose name contains `term`, sorted by name
    async fn search_patrons(&self, term: &str) -> AppResult<Vec<Patron>>;

    async fn update_patron(&self, patron: &Patron) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn get_loan(&self, id: i32) -> AppResult<Option<Loan>>;

    async fn update_loan(&self, loan: &Loan) -> AppResult<()>;
}

/// Main repository struct holding the shared store
#[derive(Clone)]
pub struct Repository {
    pub(crate) store: Arc<JsonStore>,
    pub books: JsonBookRepository,
    pub patrons: JsonPatronRepository,
    pub loans: JsonLoanRepository,
}

impl Repository {
    /// Create a new repository reading from the given JSON documents
    pub fn new(paths: JsonPaths) -> Self {
        Self::with_store(Arc::new(JsonStore::new(paths)))
    }

    pub fn with_store(store: Arc<JsonStore>) -> Self {
        Self {
            books: JsonBookRepository::new(store.clone()),
            patrons: JsonPatronRepository::new(store.clone()),
            loans: JsonLoanRepository::new(store.clone()),
            store,
        }
    }
}
