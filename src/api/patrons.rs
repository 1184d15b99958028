//! Patron endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::{outcome_response, OutcomeResponse};
use crate::{
    error::{AppError, AppResult},
    models::Patron,
    AppState,
};

#[derive(Deserialize)]
pub struct PatronSearchQuery {
    #[serde(default)]
    pub search: String,
}

/// Search patrons by name
#[utoipa::path(
    get,
    path = "/patrons",
    tag = "patrons",
    params(
        (
            "search" = Option<String>,
            Query,
            description = "Substring of the patron name, case-insensitive"
        )
    ),
    responses(
        (
            status = 200,
            description = "Matching patrons sorted by name, with their loans",
            body = Vec<Patron>
        )
    )
)]
pub async fn search_patrons(
    State(state): State<AppState>,
    Query(query): Query<PatronSearchQuery>,
) -> AppResult<Json<Vec<Patron>>> {
    let patrons = state.services.patrons.search_patrons(&query.search).await?;
    Ok(Json(patrons))
}

/// Get a patron with their loans
#[utoipa::path(
    get,
    path = "/patrons/{id}",
    tag = "patrons",
    params(
        ("id" = i32, Path, description = "Patron ID")
    ),
    responses(
        (status = 200, description = "Patron with loans", body = Patron),
        (status = 404, description = "Patron not found")
    )
)]
pub async fn get_patron(
    State(state): State<AppState>,
    Path(patron_id): Path<i32>,
) -> AppResult<Json<Patron>> {
    state
        .services
        .patrons
        .get_patron(patron_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Patron {} not found", patron_id)))
}

/// Renew a patron's membership for one year
#[utoipa::path(
    post,
    path = "/patrons/{id}/renew",
    tag = "patrons",
    params(
        ("id" = i32, Path, description = "Patron ID")
    ),
    responses(
        (status = 200, description = "Membership renewed", body = OutcomeResponse),
        (status = 404, description = "Patron not found", body = OutcomeResponse),
        (status = 409, description = "Too early to renew or overdue loan", body = OutcomeResponse),
        (status = 500, description = "Renewal could not be saved", body = OutcomeResponse)
    )
)]
pub async fn renew_membership(
    State(state): State<AppState>,
    Path(patron_id): Path<i32>,
) -> AppResult<(StatusCode, Json<OutcomeResponse>)> {
    let status = state.services.patrons.renew_membership(patron_id).await?;
    Ok(outcome_response(status))
}
