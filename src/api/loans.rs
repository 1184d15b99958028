//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{outcome_response, OutcomeResponse};
use crate::{
    error::{AppError, AppResult},
    models::Loan,
    AppState,
};

/// Get a loan with its book item and patron
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<Loan>> {
    state
        .services
        .loans
        .get_loan(loan_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))
}

/// Return a borrowed item
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Item returned", body = OutcomeResponse),
        (status = 404, description = "Loan not found", body = OutcomeResponse),
        (status = 409, description = "Already returned", body = OutcomeResponse),
        (status = 500, description = "Return could not be saved", body = OutcomeResponse)
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<(StatusCode, Json<OutcomeResponse>)> {
    let status = state.services.loans.return_loan(loan_id).await?;
    Ok(outcome_response(status))
}

/// Extend the due date of a loan
#[utoipa::path(
    post,
    path = "/loans/{id}/extend",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan extended", body = OutcomeResponse),
        (status = 404, description = "Loan not found", body = OutcomeResponse),
        (
            status = 409,
            description = "Membership expired, loan returned or loan overdue",
            body = OutcomeResponse
        ),
        (status = 500, description = "Extension could not be saved", body = OutcomeResponse)
    )
)]
pub async fn extend_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<(StatusCode, Json<OutcomeResponse>)> {
    let status = state.services.loans.extend_loan(loan_id).await?;
    Ok(outcome_response(status))
}
