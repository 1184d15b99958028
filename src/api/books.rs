//! Catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookItem},
    AppState,
};

#[derive(Deserialize)]
pub struct BookQuery {
    pub title: String,
}

/// Find a book by title
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("title" = String, Query, description = "Exact title, case-insensitive")
    ),
    responses(
        (status = 200, description = "Book with its author", body = Book),
        (status = 404, description = "No book with that title")
    )
)]
pub async fn get_book_by_title(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Book>> {
    if query.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    state
        .services
        .catalog
        .get_book_by_title(&query.title)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No book titled '{}'", query.title)))
}

/// List the physical copies of a book
#[utoipa::path(
    get,
    path = "/books/{id}/items",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book items, each with its book", body = Vec<BookItem>)
    )
)]
pub async fn list_book_items(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Vec<BookItem>>> {
    let items = state.services.catalog.get_book_items(book_id).await?;
    Ok(Json(items))
}
