//! Book (catalog title) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::author::Author;

/// Book as stored in `Books.json`.
///
/// `author` is only set on a populated book; it is never read from nor written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub genre: String,
    pub isbn: String,
    pub image_name: String,
    #[serde(skip_deserializing)]
    pub author: Option<Author>,
}
