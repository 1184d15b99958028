//! Book item (physical copy) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// Physical copy of a book, as stored in `BookItems.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookItem {
    pub id: i32,
    pub book_id: i32,
    pub acquisition_date: DateTime<Utc>,
    pub condition: String,
    // Populated
    #[serde(skip_deserializing)]
    pub book: Option<Book>,
}
